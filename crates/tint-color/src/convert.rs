//! Named conversions.
//!
//! One function per conversion, each a fixed composition of the stage
//! modules. BGR input is always swapped to RGB first and BGR output is
//! always produced by swapping an RGB result, so RGB is the hub of every
//! pipeline.
//!
//! | Function | Pipeline |
//! |----------|----------|
//! | [`bgr2rgb`], [`rgb2bgr`] | swap |
//! | [`rgb2xyz`] | sRGB decode, matrix |
//! | [`rgb2xyz_linear`] | normalize, matrix |
//! | [`bgr2xyz`] | swap, [`rgb2xyz`] |
//! | [`xyz2luv`] | L*u*v*, rescale |
//! | [`rgb2luv`] | [`rgb2xyz`], [`xyz2luv`] |
//! | [`bgr2luv`] | swap, [`rgb2luv`] |
//! | [`rgb2gray`], [`bgr2gray`] | (swap), BT.601 luma |
//! | [`rgb2cmy`], [`bgr2cmy`] | (swap), complement |
//! | [`cmy2rgb`], [`cmy2bgr`] | inverse complement, (swap) |
//!
//! # Example
//!
//! ```rust
//! use tint_core::{Bgr, Image};
//! use tint_color::bgr2luv;
//!
//! let bgr: Image<Bgr, u8, 3> = Image::filled(2, 2, [0, 0, 0]);
//! let luv = bgr2luv(&bgr);
//! assert_eq!(luv.shape(), (2, 2, 3));
//! assert_eq!(luv.pixel(0, 0), [0, 96, 136]);
//! ```

use crate::error::ColorResult;
use crate::xyz::{XyzPlane, XyzPlanes, XyzScale};
use crate::{cmy, gray, luv, swap, xyz};
use tint_core::{Bgr, Cmy, Gray, Image, Luv, PixelFormat, Rgb};
use tint_transfer::Linearize;
use tracing::debug;

/// BGR to RGB.
pub fn bgr2rgb<T: PixelFormat>(img: &Image<Bgr, T, 3>) -> Image<Rgb, T, 3> {
    debug!(width = img.width(), height = img.height(), "BGR2RGB");
    swap::bgr_to_rgb(img)
}

/// RGB to BGR.
pub fn rgb2bgr<T: PixelFormat>(img: &Image<Rgb, T, 3>) -> Image<Bgr, T, 3> {
    debug!(width = img.width(), height = img.height(), "RGB2BGR");
    swap::rgb_to_bgr(img)
}

/// RGB to XYZ with sRGB gamma decoding; planes are in percent scale.
pub fn rgb2xyz(img: &Image<Rgb, u8, 3>) -> XyzPlanes {
    debug!(width = img.width(), height = img.height(), "RGB2XYZ");
    xyz::rgb_to_xyz(img, Linearize::Srgb)
}

/// RGB to XYZ treating `v / 255` as linear; planes are in unit scale.
pub fn rgb2xyz_linear(img: &Image<Rgb, u8, 3>) -> XyzPlanes {
    debug!(width = img.width(), height = img.height(), "RGB2XYZ_LINEAR");
    xyz::rgb_to_xyz(img, Linearize::Normalize)
}

/// BGR to XYZ (gamma path).
pub fn bgr2xyz(img: &Image<Bgr, u8, 3>) -> XyzPlanes {
    debug!(width = img.width(), height = img.height(), "BGR2XYZ");
    xyz::rgb_to_xyz(&swap::bgr_to_rgb(img), Linearize::Srgb)
}

/// XYZ to 8-bit LUV.
///
/// The lightness normalization follows the scale recorded on the planes,
/// so output of either [`rgb2xyz`] or [`rgb2xyz_linear`] can be passed.
pub fn xyz2luv(planes: &XyzPlanes) -> Image<Luv, u8, 3> {
    let (width, height) = planes.dimensions();
    debug!(width, height, scale = ?planes.scale(), "XYZ2LUV");
    luv::xyz_to_luv(planes)
}

/// XYZ to 8-bit LUV from three bare planes.
///
/// # Errors
///
/// Returns [`ColorError::Core`](crate::ColorError::Core) if the planes differ
/// in size.
pub fn xyz2luv_components(
    x: &XyzPlane,
    y: &XyzPlane,
    z: &XyzPlane,
    scale: XyzScale,
) -> ColorResult<Image<Luv, u8, 3>> {
    let planes = XyzPlanes::new(x, y, z, scale)?;
    Ok(xyz2luv(&planes))
}

/// RGB to 8-bit LUV (gamma path).
pub fn rgb2luv(img: &Image<Rgb, u8, 3>) -> Image<Luv, u8, 3> {
    debug!(width = img.width(), height = img.height(), "RGB2LUV");
    luv::xyz_to_luv(&xyz::rgb_to_xyz(img, Linearize::Srgb))
}

/// BGR to 8-bit LUV (gamma path).
pub fn bgr2luv(img: &Image<Bgr, u8, 3>) -> Image<Luv, u8, 3> {
    debug!(width = img.width(), height = img.height(), "BGR2LUV");
    luv::xyz_to_luv(&xyz::rgb_to_xyz(&swap::bgr_to_rgb(img), Linearize::Srgb))
}

/// RGB to float luma.
pub fn rgb2gray<T: PixelFormat>(img: &Image<Rgb, T, 3>) -> Image<Gray, f64, 1> {
    debug!(width = img.width(), height = img.height(), "RGB2GRAY");
    gray::rgb_to_gray(img)
}

/// BGR to float luma.
pub fn bgr2gray<T: PixelFormat>(img: &Image<Bgr, T, 3>) -> Image<Gray, f64, 1> {
    debug!(width = img.width(), height = img.height(), "BGR2GRAY");
    gray::bgr_to_gray(img)
}

/// RGB to CMY in [0, 1].
pub fn rgb2cmy<T: PixelFormat>(img: &Image<Rgb, T, 3>) -> Image<Cmy, f64, 3> {
    debug!(width = img.width(), height = img.height(), "RGB2CMY");
    cmy::rgb_to_cmy(img)
}

/// BGR to CMY in [0, 1].
pub fn bgr2cmy<T: PixelFormat>(img: &Image<Bgr, T, 3>) -> Image<Cmy, f64, 3> {
    debug!(width = img.width(), height = img.height(), "BGR2CMY");
    cmy::bgr_to_cmy(img)
}

/// CMY to 8-bit RGB (truncating).
pub fn cmy2rgb<T: PixelFormat>(img: &Image<Cmy, T, 3>) -> Image<Rgb, u8, 3> {
    debug!(width = img.width(), height = img.height(), "CMY2RGB");
    cmy::cmy_to_rgb(img)
}

/// CMY to 8-bit BGR (truncating).
pub fn cmy2bgr<T: PixelFormat>(img: &Image<Cmy, T, 3>) -> Image<Bgr, u8, 3> {
    debug!(width = img.width(), height = img.height(), "CMY2BGR");
    cmy::cmy_to_bgr(img)
}
