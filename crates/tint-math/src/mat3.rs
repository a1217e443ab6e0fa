//! Fixed 3x3 color matrices.
//!
//! A [`Mat3`] holds one weight row per output channel. Applying it to a
//! triple takes the [`dot3`] of each row with the input, so the three
//! outputs use the same evaluation order as any other weighted sum in the
//! pipeline.

use crate::dot3;

/// A 3x3 matrix of per-channel weights.
///
/// # Example
///
/// ```rust
/// use tint_math::Mat3;
///
/// let swap_rb = Mat3::from_rows([[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);
/// assert_eq!(swap_rb.transform([1.0, 2.0, 3.0]), [3.0, 2.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Weight rows, one per output channel.
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Creates a matrix from its weight rows.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Sum of each row.
    ///
    /// For an RGB to XYZ matrix this is the XYZ of RGB white.
    #[inline]
    pub fn row_sums(&self) -> [f64; 3] {
        self.m.map(|r| r[0] + r[1] + r[2])
    }

    /// Applies the matrix to a triple.
    #[inline]
    pub fn transform(&self, v: [f64; 3]) -> [f64; 3] {
        self.m.map(|row| dot3(v, row))
    }
}
