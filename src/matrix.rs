//! 3×3 and 4×4 row-major matrix value types
//!
//! [`Mat4`] conventionally represents a homogeneous rigid/affine transform
//! whose top-left 3×3 block is the orientation (rotation/scale) part;
//! [`Mat3`] holds such an orientation block on its own. Both are plain
//! `Copy` value types with no lifecycle ceremony; the operations in this
//! crate reach them through the [`SquareMatrix`] capability so that host
//! object models can plug in their own matrix types.

use serde::{Deserialize, Serialize};

/// Minimal capability of a fixed-size square matrix of doubles.
///
/// `SIZE` is 3 or 4 in this domain. Indices are zero-based (row, column);
/// implementations may assume both are below `SIZE`.
pub trait SquareMatrix {
    /// Number of rows (= columns)
    const SIZE: usize;

    /// Read the element at (row, col)
    fn get(&self, row: usize, col: usize) -> f64;

    /// Write the element at (row, col)
    fn set(&mut self, row: usize, col: usize, value: f64);
}

/// A 3×3 row-major matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat3 {
    /// Elements in row-major order
    pub data: [f64; 9],
}

/// A 4×4 row-major matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat4 {
    /// Elements in row-major order
    pub data: [f64; 16],
}

impl Mat3 {
    /// Create a matrix from row-major data
    pub fn new(data: [f64; 9]) -> Self {
        Self { data }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Expand into a 4×4 homogeneous transform.
    ///
    /// Top-left 3×3 from `self`, column 3 = 0, row 3 = [0, 0, 0, 1].
    pub fn to_homogeneous(&self) -> Mat4 {
        let m = &self.data;
        Mat4 {
            data: [
                m[0], m[1], m[2], 0.0, // row 0
                m[3], m[4], m[5], 0.0, // row 1
                m[6], m[7], m[8], 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }
}

impl Mat4 {
    /// Create a matrix from row-major data
    pub fn new(data: [f64; 16]) -> Self {
        Self { data }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// The orientation (rotation/scale) block of this transform
    pub fn orientation(&self) -> Mat3 {
        let mut dest = Mat3::identity();
        copy_orientation(self, &mut dest);
        dest
    }

    /// Overwrite the top-left 3×3 block, leaving translation and the
    /// bottom row untouched
    pub fn set_orientation(&mut self, m: &Mat3) {
        for row in 0..3 {
            for col in 0..3 {
                self.data[row * 4 + col] = m.data[row * 3 + col];
            }
        }
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl SquareMatrix for Mat3 {
    const SIZE: usize = 3;

    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * 3 + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * 3 + col] = value;
    }
}

impl SquareMatrix for Mat4 {
    const SIZE: usize = 4;

    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * 4 + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * 4 + col] = value;
    }
}

/// Copy the top-left 3×3 block of a transform into `dest`.
///
/// `dest[i][j] = source[i][j]` for i, j in [0, 3); only `dest` is mutated.
pub fn copy_orientation(source: &Mat4, dest: &mut Mat3) {
    for row in 0..3 {
        for col in 0..3 {
            dest.data[row * 3 + col] = source.data[row * 4 + col];
        }
    }
}
