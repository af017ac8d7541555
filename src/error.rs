//! Error types for matrix text conversion
//!
//! All parse failures are reported through [`MatrixTextError`]; the
//! comparison and orientation operations have no failure mode.

use thiserror::Error;

/// Errors that can occur when parsing a matrix from delimited text
#[derive(Error, Debug)]
pub enum MatrixTextError {
    /// The delimiter expression is not a valid regular expression
    #[error("Invalid delimiter pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A token could not be fully consumed as a floating-point number
    #[error("Token {0:?} is not a number")]
    MalformedToken(String),

    /// The token count does not correspond to a square matrix
    #[error("{0} elements do not form a square matrix (expected 1, 4, 9 or 16)")]
    ElementCount(usize),

    /// The inferred dimension is larger than the target matrix
    #[error("{count} elements do not fit a {size}x{size} matrix")]
    TooManyElements {
        /// Number of numeric tokens parsed
        count: usize,
        /// Size of the target matrix
        size: usize,
    },
}

/// Result type for matrix text conversion
pub type MatrixTextResult<T> = Result<T, MatrixTextError>;
