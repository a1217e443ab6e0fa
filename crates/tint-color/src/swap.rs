//! Channel-order adapter.
//!
//! Reverses the channel axis: `(c0, c1, c2) -> (c2, c1, c0)`. The same
//! operation turns BGR into RGB and back, so applying it twice is the
//! identity.

use tint_core::{Bgr, ColorSpace, Image, PixelFormat, Rgb};

/// Reverses the channel order of a 3-channel raster and retags it.
#[inline]
pub fn reverse_channels<C1, C2, T>(img: &Image<C1, T, 3>) -> Image<C2, T, 3>
where
    C1: ColorSpace,
    C2: ColorSpace,
    T: PixelFormat,
{
    img.map_into(|[c0, c1, c2]| [c2, c1, c0])
}

/// BGR to RGB.
#[inline]
pub fn bgr_to_rgb<T: PixelFormat>(img: &Image<Bgr, T, 3>) -> Image<Rgb, T, 3> {
    reverse_channels(img)
}

/// RGB to BGR.
#[inline]
pub fn rgb_to_bgr<T: PixelFormat>(img: &Image<Rgb, T, 3>) -> Image<Bgr, T, 3> {
    reverse_channels(img)
}
