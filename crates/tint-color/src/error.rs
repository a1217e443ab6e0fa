//! Error types for color operations.
//!
//! The typed conversion functions cannot fail: channel count and color space
//! are part of their signatures. Errors come from building rasters and from
//! the runtime conversion table, where the input's space is only known when
//! the call is made.

use thiserror::Error;
use tint_core::ColorSpaceId;

/// Color operation error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Raster construction failed (shape, dimensions).
    #[error(transparent)]
    Core(#[from] tint_core::Error),

    /// A conversion was applied to a raster in the wrong color space.
    #[error("{conversion} expects a {expected} raster, got {got}")]
    SourceMismatch {
        /// Conversion name, e.g. "BGR2LUV".
        conversion: &'static str,
        /// Space the conversion reads.
        expected: ColorSpaceId,
        /// Space of the raster that was passed.
        got: ColorSpaceId,
    },

    /// No table entry converts between the two spaces.
    #[error("unsupported conversion: {from} -> {to}")]
    UnsupportedConversion {
        /// Source color space.
        from: ColorSpaceId,
        /// Target color space.
        to: ColorSpaceId,
    },

    /// A conversion name could not be parsed.
    #[error("unknown conversion: {0}")]
    UnknownConversion(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_mismatch_message() {
        let err = ColorError::SourceMismatch {
            conversion: "BGR2LUV",
            expected: ColorSpaceId::Bgr,
            got: ColorSpaceId::Rgb,
        };
        assert_eq!(err.to_string(), "BGR2LUV expects a BGR raster, got RGB");
    }

    #[test]
    fn test_core_passthrough() {
        let err: ColorError = tint_core::Error::channel_mismatch(3, 1).into();
        assert_eq!(err.to_string(), "channel mismatch: expected 3, got 1");
    }
}
