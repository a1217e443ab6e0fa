//! CIE XYZ to CIE LUV, rescaled to 8-bit.
//!
//! # Algorithm
//!
//! ```text
//! y  = Y / 100 (percent scale) or Y (unit scale)
//! L  = 116 * y^(1/3) - 16        if y > 0.008856
//!    = 903.3 * y                 otherwise
//! d  = X + 15Y + 3Z
//! u' = 4X / d,  v' = 9Y / d      (both 0 when d == 0)
//! U  = 13 * L * (u' - u'n)
//! V  = 13 * L * (v' - v'n)
//! ```
//!
//! The raw values are then mapped onto [0, 255] with fixed affine constants
//! and truncated to `u8`:
//!
//! ```text
//! L' = 255/100 * L
//! U' = 255/354 * (U + 134)
//! V' = 255/262 * (V + 140)
//! ```
//!
//! The white point (u'n, v'n) is D65 with a 2 degree observer.
//!
//! # Numeric edge cases
//!
//! Black gives d == 0; the guard sets u' = v' = 0, so L = 0 and U, V are 0,
//! which rescale to (0, 96, 136). The cube root only runs for y above the
//! threshold, and its base is clamped to zero, so finite input never yields
//! NaN. Non-finite input becomes 0 through the saturating `u8` cast.

use crate::xyz::{XyzPlanes, XyzScale};
use tint_core::{CieLuv, Image, Luv, PixelFormat};

/// u' of the D65 / 2 degree reference white.
pub const U_REF: f64 = 0.19793943;

/// v' of the D65 / 2 degree reference white.
pub const V_REF: f64 = 0.46831096;

/// Relative luminance below which L* is linear.
pub const EPSILON: f64 = 0.008856;

/// Slope of the linear segment of L*.
pub const KAPPA: f64 = 903.3;

/// Offset added to U before rescaling.
pub const U_OFFSET: f64 = 134.0;

/// Span of U mapped onto [0, 255].
pub const U_SPAN: f64 = 354.0;

/// Offset added to V before rescaling.
pub const V_OFFSET: f64 = 140.0;

/// Span of V mapped onto [0, 255].
pub const V_SPAN: f64 = 262.0;

/// L* from luminance relative to white.
#[inline]
pub fn lightness(y: f64) -> f64 {
    if y > EPSILON {
        116.0 * y.max(0.0).powf(1.0 / 3.0) - 16.0
    } else {
        KAPPA * y
    }
}

/// (u', v') chromaticity, or (0, 0) when `X + 15Y + 3Z` is zero.
#[inline]
pub fn chromaticity([x, y, z]: [f64; 3]) -> (f64, f64) {
    let denom = x + 15.0 * y + 3.0 * z;
    if denom != 0.0 {
        (4.0 * x / denom, 9.0 * y / denom)
    } else {
        (0.0, 0.0)
    }
}

/// Raw CIE L, U, V of one XYZ triple.
#[inline]
pub fn cie_luv_pixel(xyz: [f64; 3], scale: XyzScale) -> [f64; 3] {
    let l = lightness(scale.normalize(xyz[1]));
    let (u_dash, v_dash) = chromaticity(xyz);
    [l, 13.0 * l * (u_dash - U_REF), 13.0 * l * (v_dash - V_REF)]
}

/// Maps raw L, U, V onto [0, 255] (still float).
#[inline]
pub fn rescale_pixel([l, u, v]: [f64; 3]) -> [f64; 3] {
    [
        (255.0 / 100.0) * l,
        (255.0 / U_SPAN) * (u + U_OFFSET),
        (255.0 / V_SPAN) * (v + V_OFFSET),
    ]
}

/// 8-bit LUV of one XYZ triple.
#[inline]
pub fn luv_pixel(xyz: [f64; 3], scale: XyzScale) -> [u8; 3] {
    rescale_pixel(cie_luv_pixel(xyz, scale)).map(u8::from_f64)
}

/// Raw CIE LUV raster, before rescaling.
pub fn xyz_to_cie_luv(planes: &XyzPlanes) -> Image<CieLuv, f64, 3> {
    let scale = planes.scale();
    planes.stacked().map_into(move |xyz| cie_luv_pixel(xyz, scale))
}

/// Rescales and truncates a raw LUV raster to 8-bit.
pub fn rescale(img: &Image<CieLuv, f64, 3>) -> Image<Luv, u8, 3> {
    img.map_into(|luv| rescale_pixel(luv).map(u8::from_f64))
}

/// XYZ planes to 8-bit LUV in one pass.
///
/// Same result as `rescale(&xyz_to_cie_luv(planes))` without the
/// intermediate raster.
pub fn xyz_to_luv(planes: &XyzPlanes) -> Image<Luv, u8, 3> {
    let scale = planes.scale();
    planes.stacked().map_into(move |xyz| luv_pixel(xyz, scale))
}
