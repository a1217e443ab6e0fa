//! Sample types stored in rasters.
//!
//! [`PixelFormat`] is implemented for the three sample types the pipeline
//! uses:
//!
//! - `u8` - device-facing rasters (BGR, RGB, LUV, CMY→RGB output)
//! - `f64` - intermediates (linear RGB, XYZ, raw LUV, gray, CMY)
//! - `f32` - accepted for callers holding single-precision data
//!
//! # Raw values
//!
//! Unlike a display pipeline, the formulas here work on raw sample values:
//! an 8-bit 128 is `128.0`, not `0.502`. Every transform normalizes
//! explicitly (`v / 255`), so [`PixelFormat::to_f64`] must not.
//!
//! # Casting to 8-bit
//!
//! `u8::from_f64` truncates toward zero and saturates at the ends of
//! `[0, 255]`; NaN becomes 0. This is the final cast of the LUV and CMY→RGB
//! stages.
//!
//! ```
//! use tint_core::PixelFormat;
//!
//! assert_eq!(u8::from_f64(96.52), 96);
//! assert_eq!(u8::from_f64(255.9), 255);
//! assert_eq!(u8::from_f64(-3.0), 0);
//! assert_eq!(u8::from_f64(f64::NAN), 0);
//! assert_eq!(200u8.to_f64(), 200.0);
//! ```

/// Trait for raster sample types.
pub trait PixelFormat: Copy + Clone + Default + Send + Sync + PartialOrd + 'static {
    /// Returns the raw numeric value as `f64`.
    fn to_f64(self) -> f64;

    /// Converts from `f64`; integer formats truncate and saturate.
    fn from_f64(v: f64) -> Self;

    /// Returns the zero value.
    fn zero() -> Self;
}

impl PixelFormat for u8 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        // `as` truncates toward zero, saturates and sends NaN to 0
        v as u8
    }

    #[inline]
    fn zero() -> Self {
        0
    }
}

impl PixelFormat for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl PixelFormat for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}
