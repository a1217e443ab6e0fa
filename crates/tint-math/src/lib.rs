//! # tint-math
//!
//! Math primitives for the tint conversion pipeline.
//!
//! - [`Mat3`] - fixed 3x3 weights for linear color transforms (RGB to XYZ)
//! - [`dot3`] - weighted sum of a channel triple (luma, matrix rows)
//!
//! Everything is `f64`: the 8-bit outputs of the pipeline are produced by a
//! truncating cast, and single precision moves enough values across an
//! integer boundary to change the result.
//!
//! # Usage
//!
//! ```rust
//! use tint_math::Mat3;
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.412453, 0.357580, 0.180423],
//!     [0.212671, 0.715160, 0.072169],
//!     [0.019334, 0.119193, 0.950227],
//! ]);
//!
//! let xyz = rgb_to_xyz.transform([1.0, 0.0, 0.0]);
//! assert_eq!(xyz[0], 0.412453);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;

pub use mat3::*;

/// Weighted sum of a channel triple.
///
/// ```rust
/// use tint_math::dot3;
///
/// assert_eq!(dot3([1.0, 2.0, 3.0], [0.5, 0.25, 0.0]), 1.0);
/// ```
#[inline]
pub fn dot3(v: [f64; 3], weights: [f64; 3]) -> f64 {
    v[0] * weights[0] + v[1] * weights[1] + v[2] * weights[2]
}
