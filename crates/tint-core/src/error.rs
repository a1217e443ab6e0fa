//! Error types for tint-core operations.
//!
//! Raster construction is the only fallible step in the core: once an
//! [`Image`](crate::Image) exists its channel count is part of its type, so
//! the conversion functions built on top of it cannot fail on shape.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Error, Result};
//!
//! fn check_channels(channels: usize) -> Result<()> {
//!     if channels != 3 {
//!         return Err(Error::channel_mismatch(3, channels));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_channels(4).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or combining rasters.
#[derive(Debug, Error)]
pub enum Error {
    /// Channel count does not match what the color space requires.
    ///
    /// Returned by [`Image::from_shape`](crate::Image::from_shape) when the
    /// caller's raster has e.g. 4 channels where a 3-channel space is expected.
    #[error("channel mismatch: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Expected channel count
        expected: usize,
        /// Actual channel count
        got: usize,
    },

    /// Invalid raster dimensions or data length.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width (columns)
        width: u32,
        /// Requested height (rows)
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Two rasters that must share a spatial shape do not.
    ///
    /// The X, Y and Z planes of the XYZ stage are the main example.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First raster width
        a_width: u32,
        /// First raster height
        a_height: u32,
        /// Second raster width
        b_width: u32,
        /// Second raster height
        b_height: u32,
    },

    /// A color space name could not be parsed.
    #[error("unknown color space: {0}")]
    UnknownColorSpace(String),
}

impl Error {
    /// Creates an [`Error::ChannelMismatch`] error.
    #[inline]
    pub fn channel_mismatch(expected: usize, got: usize) -> Self {
        Self::ChannelMismatch { expected, got }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::UnknownColorSpace`] error.
    #[inline]
    pub fn unknown_color_space(name: impl Into<String>) -> Self {
        Self::UnknownColorSpace(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_mismatch() {
        let err = Error::channel_mismatch(3, 4);
        let msg = err.to_string();
        assert!(msg.contains("expected 3"));
        assert!(msg.contains("got 4"));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Error::dimension_mismatch((100, 100), (200, 200));
        let msg = err.to_string();
        assert!(msg.contains("100x100"));
        assert!(msg.contains("200x200"));
    }

    #[test]
    fn test_unknown_color_space() {
        let err = Error::unknown_color_space("hsv");
        assert!(err.to_string().contains("hsv"));
    }
}
