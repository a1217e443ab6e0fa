//! Runtime conversion table.
//!
//! The typed functions in [`convert`](crate::convert) are what library code
//! should call. This module covers callers that only learn the conversion
//! at run time (a name on the command line, a config value): [`Conversion`]
//! names every table entry, [`AnyImage`] carries the color space as a
//! variant, and [`Conversion::apply`] checks the tag before running
//! anything.
//!
//! Each entry is a fixed list of [`Stage`]s. Running them one by one gives
//! the same raster as the matching typed function.
//!
//! ```rust
//! use tint_core::{Bgr, Image};
//! use tint_color::Conversion;
//!
//! let conv: Conversion = "bgr2luv".parse().unwrap();
//! let img: Image<Bgr, u8, 3> = Image::filled(1, 1, [255, 255, 255]);
//! let out = conv.apply(&img.into()).unwrap();
//! assert_eq!(out.pixel_values(0, 0), vec![254.0, 96.0, 136.0]);
//! ```

use crate::error::{ColorError, ColorResult};
use crate::xyz::{XyzPlanes, XyzScale};
use crate::{cmy, gray, luv, swap, xyz};
use std::fmt;
use std::str::FromStr;
use tint_core::{Bgr, Cmy, ColorSpaceId, Gray, Image, LinearRgb, Luv, PixelFormat, Rgb};
use tint_transfer::{Linearize, linearize};
use tracing::trace;

/// A raster whose color space is known only at run time.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyImage {
    /// 8-bit BGR.
    Bgr(Image<Bgr, u8, 3>),
    /// 8-bit RGB.
    Rgb(Image<Rgb, u8, 3>),
    /// Linear-light RGB (between the linearize and matrix stages).
    LinearRgb(Image<LinearRgb, f64, 3>),
    /// XYZ planes.
    Xyz(XyzPlanes),
    /// 8-bit display-range LUV.
    Luv(Image<Luv, u8, 3>),
    /// Float luma.
    Gray(Image<Gray, f64, 1>),
    /// Float CMY in [0, 1].
    Cmy(Image<Cmy, f64, 3>),
}

macro_rules! any_image_from {
    ($($variant:ident: $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AnyImage {
                fn from(img: $ty) -> Self {
                    AnyImage::$variant(img)
                }
            }
        )*
    };
}

any_image_from!(
    Bgr: Image<Bgr, u8, 3>,
    Rgb: Image<Rgb, u8, 3>,
    LinearRgb: Image<LinearRgb, f64, 3>,
    Xyz: XyzPlanes,
    Luv: Image<Luv, u8, 3>,
    Gray: Image<Gray, f64, 1>,
    Cmy: Image<Cmy, f64, 3>,
);

impl AnyImage {
    /// Color space of the raster.
    pub fn color_space(&self) -> ColorSpaceId {
        match self {
            Self::Bgr(_) => ColorSpaceId::Bgr,
            Self::Rgb(_) => ColorSpaceId::Rgb,
            Self::LinearRgb(_) => ColorSpaceId::LinearRgb,
            Self::Xyz(_) => ColorSpaceId::Xyz,
            Self::Luv(_) => ColorSpaceId::Luv,
            Self::Gray(_) => ColorSpaceId::Gray,
            Self::Cmy(_) => ColorSpaceId::Cmy,
        }
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Bgr(img) => img.dimensions(),
            Self::Rgb(img) => img.dimensions(),
            Self::LinearRgb(img) => img.dimensions(),
            Self::Xyz(planes) => planes.dimensions(),
            Self::Luv(img) => img.dimensions(),
            Self::Gray(img) => img.dimensions(),
            Self::Cmy(img) => img.dimensions(),
        }
    }

    /// Samples of one pixel as `f64`, whatever the sample type.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    pub fn pixel_values(&self, x: u32, y: u32) -> Vec<f64> {
        fn values<T: PixelFormat, const N: usize>(px: [T; N]) -> Vec<f64> {
            px.into_iter().map(|v| v.to_f64()).collect()
        }
        match self {
            Self::Bgr(img) => values(img.pixel(x, y)),
            Self::Rgb(img) => values(img.pixel(x, y)),
            Self::LinearRgb(img) => values(img.pixel(x, y)),
            Self::Xyz(planes) => values(planes.pixel(x, y)),
            Self::Luv(img) => values(img.pixel(x, y)),
            Self::Gray(img) => values(img.pixel(x, y)),
            Self::Cmy(img) => values(img.pixel(x, y)),
        }
    }

    /// Returns the LUV raster, if that is what this is.
    pub fn into_luv(self) -> Option<Image<Luv, u8, 3>> {
        match self {
            Self::Luv(img) => Some(img),
            _ => None,
        }
    }

    /// Returns the XYZ planes, if that is what this is.
    pub fn into_xyz(self) -> Option<XyzPlanes> {
        match self {
            Self::Xyz(planes) => Some(planes),
            _ => None,
        }
    }
}

/// One primitive step of a table entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Reverse the channel axis (BGR <-> RGB).
    ReverseChannels,
    /// Normalize, optionally decode gamma.
    Linearize(Linearize),
    /// RGB to XYZ matrix; the scale tags the resulting planes.
    XyzMatrix(XyzScale),
    /// XYZ to rescaled 8-bit LUV.
    Luv,
    /// BT.601 luma.
    Luma,
    /// `1 - v / 255`.
    Complement,
    /// `(1 - c) * 255`, truncated.
    Uncomplement,
}

impl Stage {
    /// Short name for listings.
    pub fn name(self) -> &'static str {
        match self {
            Self::ReverseChannels => "swap",
            Self::Linearize(Linearize::Srgb) => "linearize(srgb)",
            Self::Linearize(Linearize::Normalize) => "normalize",
            Self::XyzMatrix(XyzScale::Percent) => "xyz(percent)",
            Self::XyzMatrix(XyzScale::Unit) => "xyz(unit)",
            Self::Luv => "luv",
            Self::Luma => "luma",
            Self::Complement => "cmy",
            Self::Uncomplement => "cmy-inverse",
        }
    }

    /// Runs the stage. `None` means the input is not in a space this
    /// stage reads.
    fn run(self, img: AnyImage) -> Option<AnyImage> {
        let out: AnyImage = match (self, img) {
            (Self::ReverseChannels, AnyImage::Bgr(img)) => swap::bgr_to_rgb(&img).into(),
            (Self::ReverseChannels, AnyImage::Rgb(img)) => swap::rgb_to_bgr(&img).into(),
            (Self::Linearize(mode), AnyImage::Rgb(img)) => linearize(&img, mode).into(),
            (Self::XyzMatrix(scale), AnyImage::LinearRgb(img)) => {
                xyz::linear_to_xyz(&img, scale).into()
            }
            (Self::Luv, AnyImage::Xyz(planes)) => luv::xyz_to_luv(&planes).into(),
            (Self::Luma, AnyImage::Rgb(img)) => gray::rgb_to_gray(&img).into(),
            (Self::Complement, AnyImage::Rgb(img)) => cmy::rgb_to_cmy(&img).into(),
            (Self::Uncomplement, AnyImage::Cmy(img)) => cmy::cmy_to_rgb(&img).into(),
            _ => return None,
        };
        Some(out)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every named conversion.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// BGR to RGB.
    BGR2RGB,
    /// RGB to BGR.
    RGB2BGR,
    /// RGB to XYZ with gamma decoding.
    RGB2XYZ,
    /// RGB to XYZ without gamma decoding.
    RGB2XYZ_LINEAR,
    /// BGR to XYZ with gamma decoding.
    BGR2XYZ,
    /// XYZ to 8-bit LUV.
    XYZ2LUV,
    /// RGB to 8-bit LUV.
    RGB2LUV,
    /// BGR to 8-bit LUV.
    BGR2LUV,
    /// RGB to luma.
    RGB2GRAY,
    /// BGR to luma.
    BGR2GRAY,
    /// RGB to CMY.
    RGB2CMY,
    /// BGR to CMY.
    BGR2CMY,
    /// CMY to RGB.
    CMY2RGB,
    /// CMY to BGR.
    CMY2BGR,
}

const GAMMA_XYZ: [Stage; 2] = [
    Stage::Linearize(Linearize::Srgb),
    Stage::XyzMatrix(XyzScale::Percent),
];

impl Conversion {
    /// The whole table.
    pub const ALL: [Conversion; 14] = [
        Self::BGR2RGB,
        Self::RGB2BGR,
        Self::RGB2XYZ,
        Self::RGB2XYZ_LINEAR,
        Self::BGR2XYZ,
        Self::XYZ2LUV,
        Self::RGB2LUV,
        Self::BGR2LUV,
        Self::RGB2GRAY,
        Self::BGR2GRAY,
        Self::RGB2CMY,
        Self::BGR2CMY,
        Self::CMY2RGB,
        Self::CMY2BGR,
    ];

    /// Upper-case name, e.g. "BGR2LUV".
    pub const fn name(self) -> &'static str {
        match self {
            Self::BGR2RGB => "BGR2RGB",
            Self::RGB2BGR => "RGB2BGR",
            Self::RGB2XYZ => "RGB2XYZ",
            Self::RGB2XYZ_LINEAR => "RGB2XYZ_LINEAR",
            Self::BGR2XYZ => "BGR2XYZ",
            Self::XYZ2LUV => "XYZ2LUV",
            Self::RGB2LUV => "RGB2LUV",
            Self::BGR2LUV => "BGR2LUV",
            Self::RGB2GRAY => "RGB2GRAY",
            Self::BGR2GRAY => "BGR2GRAY",
            Self::RGB2CMY => "RGB2CMY",
            Self::BGR2CMY => "BGR2CMY",
            Self::CMY2RGB => "CMY2RGB",
            Self::CMY2BGR => "CMY2BGR",
        }
    }

    /// Space the conversion reads.
    pub const fn source(self) -> ColorSpaceId {
        match self {
            Self::BGR2RGB
            | Self::BGR2XYZ
            | Self::BGR2LUV
            | Self::BGR2GRAY
            | Self::BGR2CMY => ColorSpaceId::Bgr,
            Self::RGB2BGR
            | Self::RGB2XYZ
            | Self::RGB2XYZ_LINEAR
            | Self::RGB2LUV
            | Self::RGB2GRAY
            | Self::RGB2CMY => ColorSpaceId::Rgb,
            Self::XYZ2LUV => ColorSpaceId::Xyz,
            Self::CMY2RGB | Self::CMY2BGR => ColorSpaceId::Cmy,
        }
    }

    /// Space the conversion produces.
    pub const fn target(self) -> ColorSpaceId {
        match self {
            Self::BGR2RGB | Self::CMY2RGB => ColorSpaceId::Rgb,
            Self::RGB2BGR | Self::CMY2BGR => ColorSpaceId::Bgr,
            Self::RGB2XYZ | Self::RGB2XYZ_LINEAR | Self::BGR2XYZ => ColorSpaceId::Xyz,
            Self::XYZ2LUV | Self::RGB2LUV | Self::BGR2LUV => ColorSpaceId::Luv,
            Self::RGB2GRAY | Self::BGR2GRAY => ColorSpaceId::Gray,
            Self::RGB2CMY | Self::BGR2CMY => ColorSpaceId::Cmy,
        }
    }

    /// The fixed stage list, in execution order.
    pub fn stages(self) -> Vec<Stage> {
        let swap = [Stage::ReverseChannels];
        match self {
            Self::BGR2RGB | Self::RGB2BGR => swap.to_vec(),
            Self::RGB2XYZ => GAMMA_XYZ.to_vec(),
            Self::RGB2XYZ_LINEAR => vec![
                Stage::Linearize(Linearize::Normalize),
                Stage::XyzMatrix(XyzScale::Unit),
            ],
            Self::BGR2XYZ => [&swap[..], &GAMMA_XYZ[..]].concat(),
            Self::XYZ2LUV => vec![Stage::Luv],
            Self::RGB2LUV => [&GAMMA_XYZ[..], &[Stage::Luv][..]].concat(),
            Self::BGR2LUV => [&swap[..], &GAMMA_XYZ[..], &[Stage::Luv][..]].concat(),
            Self::RGB2GRAY => vec![Stage::Luma],
            Self::BGR2GRAY => vec![Stage::ReverseChannels, Stage::Luma],
            Self::RGB2CMY => vec![Stage::Complement],
            Self::BGR2CMY => vec![Stage::ReverseChannels, Stage::Complement],
            Self::CMY2RGB => vec![Stage::Uncomplement],
            Self::CMY2BGR => vec![Stage::Uncomplement, Stage::ReverseChannels],
        }
    }

    /// Looks up the table entry from `from` to `to`.
    ///
    /// RGB to XYZ resolves to the gamma path ([`Conversion::RGB2XYZ`]).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnsupportedConversion`] if the table has no
    /// such entry.
    pub fn between(from: ColorSpaceId, to: ColorSpaceId) -> ColorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.source() == from && c.target() == to)
            .ok_or(ColorError::UnsupportedConversion { from, to })
    }

    /// Runs the conversion on a tagged raster.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::SourceMismatch`] if `img` is not in
    /// [`source`](Self::source); nothing is computed in that case.
    pub fn apply(self, img: &AnyImage) -> ColorResult<AnyImage> {
        let mismatch = |got: ColorSpaceId| ColorError::SourceMismatch {
            conversion: self.name(),
            expected: self.source(),
            got,
        };
        if img.color_space() != self.source() {
            return Err(mismatch(img.color_space()));
        }

        let (width, height) = img.dimensions();
        let mut current = img.clone();
        for stage in self.stages() {
            trace!(conversion = self.name(), %stage, width, height, "stage");
            let got = current.color_space();
            current = stage.run(current).ok_or_else(|| mismatch(got))?;
        }
        Ok(current)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Conversion {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == upper)
            .ok_or_else(|| ColorError::UnknownConversion(s.to_string()))
    }
}
