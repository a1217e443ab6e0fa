//! sRGB-style gamma decoding.
//!
//! The curve keeps the sRGB breakpoint, offset and linear toe, but its power
//! segment squares instead of raising to 2.4:
//!
//! ```text
//! if V > 0.04045:
//!     L = ((V + 0.055) / 1.055)^2
//! else:
//!     L = V / 12.92
//! ```
//!
//! Downstream LUV values are calibrated against this exact curve, so it must
//! not be swapped for the IEC 61966-2-1 one.
//!
//! # Range
//!
//! - Input/Output: [0, 1]

/// Breakpoint between the linear toe and the power segment.
pub const THRESHOLD: f64 = 0.04045;

/// Slope divisor of the linear toe.
pub const TOE_DIVISOR: f64 = 12.92;

/// Offset of the power segment.
pub const OFFSET: f64 = 0.055;

/// Divisor of the power segment (`1 + OFFSET`).
pub const SCALE: f64 = 1.055;

/// Decodes a normalized, gamma-encoded sample to linear light.
///
/// # Example
///
/// ```rust
/// use tint_transfer::srgb::eotf;
///
/// assert_eq!(eotf(0.0), 0.0);
/// assert_eq!(eotf(1.0), 1.0);
/// assert!((eotf(0.5) - 0.2767).abs() < 1e-4);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v > THRESHOLD {
        let base = (v + OFFSET) / SCALE;
        base * base
    } else {
        v / TOE_DIVISOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_breakpoint_uses_toe() {
        // exactly at the threshold the toe applies
        assert_eq!(eotf(THRESHOLD), THRESHOLD / TOE_DIVISOR);
    }

    #[test]
    fn test_squares_not_2_4() {
        let v = 0.5;
        let expected = ((v + 0.055) / 1.055_f64).powi(2);
        assert_abs_diff_eq!(eotf(v), expected, epsilon = 1e-15);
        assert!((eotf(v) - ((v + 0.055) / 1.055_f64).powf(2.4)).abs() > 0.05);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = -1.0;
        for i in 0..=255 {
            let l = eotf(i as f64 / 255.0);
            assert!(l > prev, "not increasing at {}", i);
            prev = l;
        }
    }
}
