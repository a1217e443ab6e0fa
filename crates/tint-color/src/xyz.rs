//! RGB to CIE XYZ.
//!
//! Linear RGB is multiplied by a fixed matrix (sRGB primaries, D65):
//!
//! ```text
//! X = 0.412453*R + 0.357580*G + 0.180423*B
//! Y = 0.212671*R + 0.715160*G + 0.072169*B
//! Z = 0.019334*R + 0.119193*G + 0.950227*B
//! ```
//!
//! The stage returns [`XyzPlanes`]: X, Y and Z as three planes of the input's
//! size, tagged with the [`XyzScale`] they are in so the LUV stage can pick
//! the matching normalization.

use tint_core::{Image, LinearRgb, Result, Rgb, Xyz};
use tint_math::Mat3;
use tint_transfer::{Linearize, linearize};

/// Linear RGB to XYZ matrix.
pub const RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
]);

/// One tristimulus plane.
pub type XyzPlane = Image<Xyz, f64, 1>;

/// Scale of XYZ values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum XyzScale {
    /// White has Y = 100 (gamma-decoded input).
    #[default]
    Percent,
    /// White has Y = 1 (normalized-only input).
    Unit,
}

impl XyzScale {
    /// Returns Y relative to white.
    #[inline]
    pub fn normalize(self, y: f64) -> f64 {
        match self {
            Self::Percent => y / 100.0,
            Self::Unit => y,
        }
    }
}

impl From<Linearize> for XyzScale {
    fn from(mode: Linearize) -> Self {
        match mode {
            Linearize::Srgb => Self::Percent,
            Linearize::Normalize => Self::Unit,
        }
    }
}

/// X, Y and Z of one raster.
///
/// Stored interleaved so the LUV stage can walk one buffer; the separate
/// planes are handed out by [`x`](Self::x), [`y`](Self::y), [`z`](Self::z)
/// and [`into_tuple`](Self::into_tuple).
#[derive(Clone, Debug, PartialEq)]
pub struct XyzPlanes {
    xyz: Image<Xyz, f64, 3>,
    scale: XyzScale,
}

impl XyzPlanes {
    /// Builds planes from separately computed rasters.
    ///
    /// # Errors
    ///
    /// Returns [`tint_core::Error::DimensionMismatch`] if the planes differ in size.
    pub fn new(x: &XyzPlane, y: &XyzPlane, z: &XyzPlane, scale: XyzScale) -> Result<Self> {
        let xyz = Image::stack([x, y, z])?;
        Ok(Self { xyz, scale })
    }

    /// Wraps an interleaved 3-channel XYZ raster.
    pub fn from_stacked(xyz: Image<Xyz, f64, 3>, scale: XyzScale) -> Self {
        Self { xyz, scale }
    }

    /// Scale the values are in.
    #[inline]
    pub fn scale(&self) -> XyzScale {
        self.scale
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.xyz.dimensions()
    }

    /// Returns `[X, Y, Z]` at (x, y).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f64; 3] {
        self.xyz.pixel(x, y)
    }

    /// The interleaved raster.
    #[inline]
    pub fn stacked(&self) -> &Image<Xyz, f64, 3> {
        &self.xyz
    }

    /// The X plane.
    pub fn x(&self) -> XyzPlane {
        self.plane(0)
    }

    /// The Y plane.
    pub fn y(&self) -> XyzPlane {
        self.plane(1)
    }

    /// The Z plane.
    pub fn z(&self) -> XyzPlane {
        self.plane(2)
    }

    fn plane(&self, c: usize) -> XyzPlane {
        self.xyz.map_into(move |px: [f64; 3]| [px[c]])
    }

    /// Returns the planes as an `(X, Y, Z)` tuple.
    pub fn into_tuple(self) -> (XyzPlane, XyzPlane, XyzPlane) {
        let [x, y, z] = self.xyz.split_channels();
        (x, y, z)
    }
}

/// XYZ of one linear RGB triple.
#[inline]
pub fn linear_to_xyz_pixel(rgb: [f64; 3]) -> [f64; 3] {
    RGB_TO_XYZ.transform(rgb)
}

/// Matrix stage: linear RGB raster to XYZ planes.
pub fn linear_to_xyz(img: &Image<LinearRgb, f64, 3>, scale: XyzScale) -> XyzPlanes {
    XyzPlanes::from_stacked(img.map_into(linear_to_xyz_pixel), scale)
}

/// Gamma-encoded 8-bit RGB to XYZ.
///
/// `Linearize::Srgb` decodes the gamma curve and yields [`XyzScale::Percent`];
/// `Linearize::Normalize` only normalizes and yields [`XyzScale::Unit`].
pub fn rgb_to_xyz(img: &Image<Rgb, u8, 3>, mode: Linearize) -> XyzPlanes {
    linear_to_xyz(&linearize(img, mode), mode.into())
}
