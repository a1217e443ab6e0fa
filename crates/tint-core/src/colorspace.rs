//! Color space definitions and compile-time color space tagging.
//!
//! Color spaces are zero-sized marker types implementing [`ColorSpace`]. They
//! are used as the `C` parameter of [`Image`](crate::Image), so composing two
//! conversions whose spaces do not line up fails to compile.
//!
//! # Supported Color Spaces
//!
//! ## Device-facing (8-bit)
//! - [`Bgr`] - Blue/green/red channel order, as produced by most decoders
//! - [`Rgb`] - Red/green/blue, the hub every conversion routes through
//! - [`Luv`] - CIE LUV rescaled to [0, 255]
//!
//! ## Intermediate (float)
//! - [`LinearRgb`] - RGB as linear light, [0, 100] or [0, 1]
//! - [`Xyz`] - CIE XYZ tristimulus planes
//! - [`CieLuv`] - CIE L*, u*, v* before display rescaling
//! - [`Gray`] - BT.601 luma
//! - [`Cmy`] - Cyan/magenta/yellow complement in [0, 1]
//!
//! # Usage
//!
//! ```
//! use tint_core::prelude::*;
//!
//! fn describe<C: ColorSpace>(img: &Image<C, u8, 3>) -> String {
//!     format!("{}x{} {}", img.width(), img.height(), C::NAME)
//! }
//!
//! let img: Image<Bgr, u8, 3> = Image::new(4, 2);
//! assert_eq!(describe(&img), "4x2 BGR");
//! ```

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Trait for color space marker types.
///
/// # Implementing Custom Color Spaces
///
/// ```
/// use tint_core::{ColorSpace, ColorSpaceId};
///
/// #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// pub struct MyRgb;
///
/// impl ColorSpace for MyRgb {
///     const NAME: &'static str = "MyRGB";
///     const ID: ColorSpaceId = ColorSpaceId::Rgb;
/// }
/// ```
pub trait ColorSpace: Copy + Clone + Default + Send + Sync + fmt::Debug + 'static {
    /// Human-readable name of the color space.
    const NAME: &'static str;

    /// Runtime identifier of this space.
    const ID: ColorSpaceId;
}

/// Runtime color space identifier.
///
/// Mirrors the marker types for places where the space is only known at run
/// time (command line, the dynamic conversion table).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpaceId {
    /// Blue/green/red 8-bit
    Bgr,
    /// Red/green/blue 8-bit
    Rgb,
    /// RGB as linear light
    LinearRgb,
    /// CIE XYZ tristimulus
    Xyz,
    /// CIE LUV before rescale
    CieLuv,
    /// CIE LUV rescaled to [0, 255]
    Luv,
    /// BT.601 luma
    Gray,
    /// Cyan/magenta/yellow
    Cmy,
}

impl ColorSpaceId {
    /// All identifiers, in declaration order.
    pub const ALL: [ColorSpaceId; 8] = [
        Self::Bgr,
        Self::Rgb,
        Self::LinearRgb,
        Self::Xyz,
        Self::CieLuv,
        Self::Luv,
        Self::Gray,
        Self::Cmy,
    ];

    /// Short upper-case name, as used in conversion names ("BGR", "LUV").
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bgr => "BGR",
            Self::Rgb => "RGB",
            Self::LinearRgb => "LINRGB",
            Self::Xyz => "XYZ",
            Self::CieLuv => "CIELUV",
            Self::Luv => "LUV",
            Self::Gray => "GRAY",
            Self::Cmy => "CMY",
        }
    }

    /// Channels per pixel of a raster in this space.
    ///
    /// XYZ is reported as 3 even though the stage stores it as three
    /// single-channel planes.
    pub const fn channels(self) -> usize {
        match self {
            Self::Gray => 1,
            _ => 3,
        }
    }

    /// Whether rasters in this space hold 8-bit samples.
    pub const fn is_device_facing(self) -> bool {
        matches!(self, Self::Bgr | Self::Rgb | Self::Luv)
    }
}

impl fmt::Display for ColorSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpaceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|id| id.name() == upper)
            .ok_or_else(|| Error::unknown_color_space(s))
    }
}

macro_rules! color_space {
    ($(#[$meta:meta])* $ty:ident, $name:literal, $id:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $ty;

        impl ColorSpace for $ty {
            const NAME: &'static str = $name;
            const ID: ColorSpaceId = ColorSpaceId::$id;
        }
    };
}

color_space!(
    /// BGR - channel order (blue, green, red), 8-bit.
    ///
    /// The layout most image decoders hand out. Every BGR conversion first
    /// reverses the channel axis to reach [`Rgb`].
    Bgr, "BGR", Bgr
);

color_space!(
    /// RGB - channel order (red, green, blue), 8-bit, gamma-encoded.
    ///
    /// The hub space: every conversion in tint is rooted here.
    Rgb, "RGB", Rgb
);

color_space!(
    /// RGB treated as linear light.
    ///
    /// [0, 100] after gamma decoding, [0, 1] when only normalized.
    LinearRgb, "Linear RGB", LinearRgb
);

color_space!(
    /// CIE 1931 XYZ tristimulus values.
    ///
    /// Used both for single planes (`Image<Xyz, f64, 1>`) and for the
    /// interleaved triple the LUV stage walks.
    Xyz, "XYZ", Xyz
);

color_space!(
    /// CIE L*u*v* before display rescaling.
    ///
    /// L in [0, 100]; U and V roughly in [-134, 220] and [-140, 122].
    CieLuv, "CIE LUV", CieLuv
);

color_space!(
    /// CIE LUV rescaled to [0, 255] and stored as 8-bit.
    ///
    /// ```text
    /// L' = L * 255/100
    /// U' = (U + 134) * 255/354
    /// V' = (V + 140) * 255/262
    /// ```
    Luv, "LUV", Luv
);

color_space!(
    /// BT.601 luma, one channel.
    Gray, "Gray", Gray
);

color_space!(
    /// Cyan/magenta/yellow, the complement of normalized RGB.
    Cmy, "CMY", Cmy
);
