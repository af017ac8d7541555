//! Delimited text format for matrices
//!
//! Serialization and parsing are not perfectly symmetric:
//!
//! - [`to_delimited`] uses literal delimiter strings and always emits a
//!   trailing element delimiter per element and a trailing row delimiter
//!   per row.
//! - [`parse_into`] splits the input on matches of a delimiter *regular
//!   expression*, discards empty tokens, infers the matrix dimension from
//!   the token count (1, 4, 9 or 16 tokens) and fills the top-left block
//!   of the target row-major, leaving the remaining cells untouched.

pub mod parser;
pub mod writer;

pub use parser::{parse_into, parse_into_with};
pub use writer::to_delimited;
