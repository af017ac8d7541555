//! Matrix text utilities for transform matrices
//!
//! This crate provides the value-level matrix helpers used by a scene
//! object model working with 3×3 and 4×4 row-major transforms:
//!
//! - **Tolerance comparison** — approximate equality over the common
//!   top-left block of two matrices of possibly different sizes
//! - **Orientation extraction** — the rotation/scale 3×3 block of a
//!   homogeneous 4×4 transform, and its expansion back to 4×4
//! - **Delimited text conversion** — serializing a matrix with literal
//!   element/row delimiters and parsing it back with a caller-supplied
//!   delimiter regular expression, inferring the matrix dimension from
//!   the token count
//!
//! # Quick Start
//!
//! ```
//! use matrix_text::{matrices_equal, parse_into, to_delimited, Mat4};
//!
//! let m = Mat4::identity();
//! let text = to_delimited(&m, " ", "\n");
//!
//! let mut restored = Mat4::identity();
//! parse_into(&mut restored, &text, r"\s+").unwrap();
//! assert!(matrices_equal(&m, &restored, 1e-9));
//! ```
//!
//! Matrices are plain `Copy` value types owned by the caller; every
//! operation here reads its inputs and, where documented, mutates exactly
//! one caller-owned output argument. Host object models with their own
//! matrix types can participate by implementing [`SquareMatrix`].

pub mod compare;
pub mod error;
pub mod matrix;
pub mod text;

pub use compare::matrices_equal;
pub use error::{MatrixTextError, MatrixTextResult};
pub use matrix::{copy_orientation, Mat3, Mat4, SquareMatrix};
pub use text::{parse_into, parse_into_with, to_delimited};
