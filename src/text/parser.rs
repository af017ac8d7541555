//! Delimited text to matrix parsing
//!
//! The parse pipeline: split the input on matches of the delimiter
//! expression, convert each non-empty token to a double, infer the matrix
//! dimension from the token count, then fill the target's top-left block
//! row-major. Values are committed to the target only after the whole
//! pipeline has succeeded; a failed parse leaves the target untouched.

use regex::Regex;

use crate::error::{MatrixTextError, MatrixTextResult};
use crate::matrix::SquareMatrix;

/// Parse delimited text into a matrix, compiling `pattern` as the
/// delimiter regular expression.
///
/// See [`parse_into_with`] for the parsing rules. Callers that parse many
/// strings with the same delimiter should compile the [`Regex`] once and
/// use [`parse_into_with`] directly.
pub fn parse_into<M: SquareMatrix>(
    target: &mut M,
    text: &str,
    pattern: &str,
) -> MatrixTextResult<usize> {
    let delimiter = Regex::new(pattern)?;
    parse_into_with(target, text, &delimiter)
}

/// Parse delimited text into a matrix using a precompiled delimiter.
///
/// Tokens are the substrings between delimiter matches; empty tokens
/// (from adjacent, leading or trailing delimiters) are discarded. Every
/// remaining token must parse as a whole as an `f64`. The token count
/// must be exactly 1, 4, 9 or 16; the implied dimension `d` is its square
/// root, and the values are written row-major into the `d`×`d` top-left
/// block of `target`. Cells outside that block keep their prior values.
///
/// Returns the inferred dimension on success. On any failure `target` is
/// left entirely unmodified.
pub fn parse_into_with<M: SquareMatrix>(
    target: &mut M,
    text: &str,
    delimiter: &Regex,
) -> MatrixTextResult<usize> {
    let mut values: Vec<f64> = Vec::with_capacity(16);
    for token in split_tokens(text, delimiter) {
        match token.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => {
                log::debug!("Matrix parse failed: token '{}' is not numeric", token);
                return Err(MatrixTextError::MalformedToken(token.to_string()));
            }
        }
    }

    let dimension = match infer_dimension(values.len()) {
        Some(d) => d,
        None => {
            log::debug!("Matrix parse failed: {} elements", values.len());
            return Err(MatrixTextError::ElementCount(values.len()));
        }
    };
    if dimension > M::SIZE {
        return Err(MatrixTextError::TooManyElements {
            count: values.len(),
            size: M::SIZE,
        });
    }

    for row in 0..dimension {
        for col in 0..dimension {
            target.set(row, col, values[row * dimension + col]);
        }
    }
    Ok(dimension)
}

/// Split `text` on matches of `delimiter`, dropping empty tokens.
fn split_tokens<'t>(text: &'t str, delimiter: &Regex) -> Vec<&'t str> {
    let mut tokens = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match delimiter.find(rest) {
            Some(m) if m.end() > 0 => {
                if m.start() > 0 {
                    tokens.push(&rest[..m.start()]);
                }
                rest = &rest[m.end()..];
            }
            // No match, or a zero-width match that cannot advance the
            // scan: the remainder is the final token.
            _ => {
                tokens.push(rest);
                break;
            }
        }
    }
    tokens
}

/// Square matrix dimension implied by a token count, if any
fn infer_dimension(count: usize) -> Option<usize> {
    match count {
        1 => Some(1),
        4 => Some(2),
        9 => Some(3),
        16 => Some(4),
        _ => None,
    }
}
