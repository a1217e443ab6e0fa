//! Luma from RGB.

use tint_core::{Bgr, Gray, Image, PixelFormat, Rgb};
use tint_math::dot3;

/// ITU-R BT.601 luma weights, R, G, B order. They sum to 1.
pub const BT601: [f64; 3] = [0.299, 0.587, 0.114];

/// Luma of one RGB triple, in the input's units.
#[inline]
pub fn luma<T: PixelFormat>(rgb: [T; 3]) -> f64 {
    dot3(rgb.map(|v| v.to_f64()), BT601)
}

/// RGB to single-channel float luma.
///
/// No clamping or casting; use [`Image::convert_format`] for an 8-bit raster.
pub fn rgb_to_gray<T: PixelFormat>(img: &Image<Rgb, T, 3>) -> Image<Gray, f64, 1> {
    img.map_into(|px| [luma(px)])
}

/// BGR to luma, through RGB.
pub fn bgr_to_gray<T: PixelFormat>(img: &Image<Bgr, T, 3>) -> Image<Gray, f64, 1> {
    rgb_to_gray(&crate::swap::bgr_to_rgb(img))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_gray_identity() {
        for v in [0u8, 1, 17, 128, 254, 255] {
            assert_abs_diff_eq!(luma([v, v, v]), v as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_weights() {
        assert_abs_diff_eq!(luma([128u8, 64, 32]), 79.488, epsilon = 1e-9);
        assert_abs_diff_eq!(BT601.iter().sum::<f64>(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_bgr_order() {
        let bgr: Image<Bgr, u8, 3> = Image::filled(2, 1, [32, 64, 128]);
        let rgb: Image<Rgb, u8, 3> = Image::filled(2, 1, [128, 64, 32]);
        assert_eq!(bgr_to_gray(&bgr), rgb_to_gray(&rgb));
        assert_eq!(rgb_to_gray(&rgb).shape(), (1, 2, 1));
    }
}
