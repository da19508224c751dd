//! 3x3 matrix type for linear color transforms.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! Each output component is summed left to right, in the same order as the
//! scalar formula written out by hand.
//!
//! # Usage
//!
//! ```rust
//! use deltae_math::Mat3;
//!
//! let m = Mat3::from_rows([
//!     [0.4124, 0.3576, 0.1805],
//!     [0.2126, 0.7152, 0.0722],
//!     [0.0193, 0.1192, 0.9505],
//! ]);
//! let xyz = m * [100.0, 0.0, 0.0];
//! assert!((xyz[1] - 21.26).abs() < 1e-9);
//! ```

use glam::{DMat3, DVec3};
use std::ops::Mul;

/// A 3x3 `f64` matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub const fn transpose(&self) -> Self {
        Self::from_rows([
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Transforms a column vector by this matrix.
    #[inline]
    pub fn transform(&self, v: [f64; 3]) -> [f64; 3] {
        self.to_glam().mul_vec3(DVec3::from_array(v)).to_array()
    }

    /// Converts to glam `DMat3` (column-major).
    #[inline]
    pub fn to_glam(&self) -> DMat3 {
        // glam is column-major, so the columns are our transposed rows
        DMat3::from_cols_array_2d(&self.transpose().m)
    }
}

impl Mul<[f64; 3]> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn mul(self, rhs: [f64; 3]) -> [f64; 3] {
        self.transform(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identity() {
        let identity = Mat3::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        let v = [1.0, 2.0, 3.0];
        assert_eq!(identity * v, v);
    }

    #[test]
    fn test_transform_row_major() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        assert_eq!(m * [1.0, 0.0, 0.0], [1.0, 4.0, 7.0]);
        assert_eq!(m * [1.0, 1.0, 1.0], [6.0, 15.0, 24.0]);
        assert_eq!(m.transpose().m[0], [1.0, 4.0, 7.0]);
    }

    #[test]
    fn test_transform_matches_scalar_sum() {
        let m = Mat3::from_rows([
            [0.4124, 0.3576, 0.1805],
            [0.2126, 0.7152, 0.0722],
            [0.0193, 0.1192, 0.9505],
        ]);
        let (r, g, b) = (21.404_114_048_223_256, 5.126_338_064_534_431, 90.0);
        let out = m * [r, g, b];
        assert_abs_diff_eq!(out[0], 0.4124 * r + 0.3576 * g + 0.1805 * b, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1], 0.2126 * r + 0.7152 * g + 0.0722 * b, epsilon = 1e-12);
        assert_abs_diff_eq!(out[2], 0.0193 * r + 0.1192 * g + 0.9505 * b, epsilon = 1e-12);
    }

    #[test]
    fn test_to_glam_is_column_major() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 4.0],
            [5.0, 6.0, 0.0],
        ]);
        assert_eq!(m.to_glam().row(0).to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(m.to_glam().col(0).to_array(), [1.0, 0.0, 5.0]);
        assert!((m.to_glam().determinant() - 1.0).abs() < 1e-12);
    }
}
