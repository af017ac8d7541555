//! Tolerance-based matrix comparison
//!
//! A single comparison function generic over [`SquareMatrix`] covers all
//! 3×3/4×4 operand pairings.

use crate::matrix::SquareMatrix;

/// Compare two square matrices for approximate equality.
///
/// The compared extent is the smaller operand's full block: if either
/// matrix is 3×3, only the 3×3 top-left block of both is compared; when
/// both are 4×4 the full 4×4 is compared. Two cells match iff their
/// absolute difference is strictly below `tolerance` (a difference exactly
/// equal to the tolerance counts as unequal). Returns `false` on the first
/// mismatching cell.
///
/// Symmetric in argument order across the 3×3/4×4 pairing.
pub fn matrices_equal<A, B>(a: &A, b: &B, tolerance: f64) -> bool
where
    A: SquareMatrix,
    B: SquareMatrix,
{
    let extent = A::SIZE.min(B::SIZE);
    for row in 0..extent {
        for col in 0..extent {
            if (a.get(row, col) - b.get(row, col)).abs() >= tolerance {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Mat3, Mat4};

    #[test]
    fn test_equal_reflexive() {
        let m = Mat4::new([
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        assert!(matrices_equal(&m, &m, 1e-9));
        assert!(matrices_equal(&m, &m, 100.0));
    }

    #[test]
    fn test_zero_tolerance_requires_exact_match() {
        let a = Mat4::identity();
        let b = Mat4::identity();
        // |a - b| = 0 is not strictly below a tolerance of 0
        assert!(!matrices_equal(&a, &b, 0.0));
        assert!(matrices_equal(&a, &b, f64::MIN_POSITIVE));
    }

    #[test]
    fn test_tolerance_boundary_is_exclusive() {
        let a = Mat4::identity();
        let mut b = Mat4::identity();
        b.set(0, 0, 1.5);
        assert!(!matrices_equal(&a, &b, 0.5));
        assert!(matrices_equal(&a, &b, 0.5 + 1e-9));
    }

    #[test]
    fn test_full_4x4_extent() {
        let a = Mat4::identity();
        let mut b = Mat4::identity();
        b.set(3, 3, 2.0);
        assert!(!matrices_equal(&a, &b, 1e-6));
    }

    #[test]
    fn test_mixed_sizes_compare_3x3_block() {
        let a3 = Mat3::identity();
        let mut b4 = Mat4::identity();
        // translation and bottom row lie outside the compared block
        b4.set(0, 3, 99.0);
        b4.set(3, 2, 99.0);
        assert!(matrices_equal(&a3, &b4, 1e-6));

        b4.set(1, 1, 2.0);
        assert!(!matrices_equal(&a3, &b4, 1e-6));
    }

    #[test]
    fn test_mixed_sizes_symmetric() {
        let mut a3 = Mat3::identity();
        a3.set(2, 0, 0.25);
        let b4 = Mat4::identity();
        assert_eq!(
            matrices_equal(&a3, &b4, 0.5),
            matrices_equal(&b4, &a3, 0.5)
        );
        assert_eq!(
            matrices_equal(&a3, &b4, 0.1),
            matrices_equal(&b4, &a3, 0.1)
        );
    }

    #[test]
    fn test_3x3_pair() {
        let a = Mat3::new([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        let b = Mat3::new([1.0, 0.0, 0.0, 0.0, 1.0001, 0.0, 0.0, 0.0, 1.0]);
        assert!(matrices_equal(&a, &b, 1e-3));
        assert!(!matrices_equal(&a, &b, 1e-5));
    }
}
