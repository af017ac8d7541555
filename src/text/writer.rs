//! Matrix to delimited text serialization

use crate::matrix::SquareMatrix;

/// Serialize a matrix to delimited text.
///
/// Iterates rows then columns; every element is followed by `delimiter`
/// (including the last element of each row) and every row is followed by
/// `row_delimiter`. Elements are rendered with `f64`'s default formatting,
/// which round-trips through [`parse_into`](crate::parse_into) as long as
/// the delimiters cannot occur inside numeric text.
pub fn to_delimited<M: SquareMatrix>(mat: &M, delimiter: &str, row_delimiter: &str) -> String {
    let mut out = String::new();
    for row in 0..M::SIZE {
        for col in 0..M::SIZE {
            out.push_str(&mat.get(row, col).to_string());
            out.push_str(delimiter);
        }
        out.push_str(row_delimiter);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Mat3, Mat4};

    #[test]
    fn test_identity_layout() {
        let text = to_delimited(&Mat4::identity(), " ", ";");
        assert_eq!(text, "1 0 0 0 ;0 1 0 0 ;0 0 1 0 ;0 0 0 1 ;");
    }

    #[test]
    fn test_trailing_delimiters_present() {
        let text = to_delimited(&Mat4::identity(), ",", "\n");
        assert!(text.ends_with("1,\n"));
        assert_eq!(text.matches(',').count(), 16);
        assert_eq!(text.matches('\n').count(), 4);
    }

    #[test]
    fn test_fractional_values() {
        let mut m = Mat3::identity();
        m.set(0, 0, 1.25);
        m.set(2, 2, -0.5);
        let text = to_delimited(&m, " ", "\n");
        assert_eq!(text, "1.25 0 0 \n0 1 0 \n0 0 -0.5 \n");
    }
}
