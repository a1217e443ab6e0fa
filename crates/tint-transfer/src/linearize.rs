//! Normalization and linearization of 8-bit RGB.
//!
//! The pipeline has two ways into XYZ. The gamma path decodes every sample
//! with [`srgb::eotf`](crate::srgb::eotf) and scales to [0, 100]; the direct
//! path only divides by 255 and treats the result as linear. [`Linearize`]
//! selects between them so both share one code path.

use crate::srgb;
use tint_core::{Image, LinearRgb, PixelFormat, Rgb};

/// Divisor that maps 8-bit samples to [0, 1].
pub const NORMALIZE: f64 = 255.0;

/// How RGB samples become linear light.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Linearize {
    /// `srgb::eotf(v / 255) * 100`, output in [0, 100].
    #[default]
    Srgb,
    /// `v / 255`, output in [0, 1].
    Normalize,
}

impl Linearize {
    /// Linearizes one raw sample in [0, 255].
    #[inline]
    pub fn apply(self, v: f64) -> f64 {
        let n = v / NORMALIZE;
        match self {
            Self::Srgb => srgb::eotf(n) * 100.0,
            Self::Normalize => n,
        }
    }

    /// Linearizes an RGB triple.
    #[inline]
    pub fn apply_rgb<T: PixelFormat>(self, rgb: [T; 3]) -> [f64; 3] {
        rgb.map(|v| self.apply(v.to_f64()))
    }
}

/// Linearizes a whole RGB raster.
///
/// Returns a new raster; the input is untouched.
pub fn linearize(img: &Image<Rgb, u8, 3>, mode: Linearize) -> Image<LinearRgb, f64, 3> {
    img.map_into(|px| mode.apply_rgb(px))
}
