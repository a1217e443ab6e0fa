//! RGB and CMY complements.
//!
//! Forward: `C = 1 - R / 255` per channel, float in [0, 1].
//! Inverse: `R = (1 - C) * 255`, truncated to `u8`.
//!
//! The pair round-trips up to the truncation: `(1 - (1 - v/255)) * 255` can
//! land just below `v`, so a channel may come back one lower.

use tint_core::{Bgr, Cmy, Image, PixelFormat, Rgb};

/// CMY of one RGB triple.
#[inline]
pub fn cmy_pixel<T: PixelFormat>(rgb: [T; 3]) -> [f64; 3] {
    rgb.map(|v| 1.0 - v.to_f64() / 255.0)
}

/// 8-bit RGB of one CMY triple.
#[inline]
pub fn rgb_pixel<T: PixelFormat>(cmy: [T; 3]) -> [u8; 3] {
    cmy.map(|c| u8::from_f64((1.0 - c.to_f64()) * 255.0))
}

/// RGB to CMY.
pub fn rgb_to_cmy<T: PixelFormat>(img: &Image<Rgb, T, 3>) -> Image<Cmy, f64, 3> {
    img.map_into(cmy_pixel)
}

/// CMY to 8-bit RGB.
pub fn cmy_to_rgb<T: PixelFormat>(img: &Image<Cmy, T, 3>) -> Image<Rgb, u8, 3> {
    img.map_into(rgb_pixel)
}

/// BGR to CMY, through RGB.
pub fn bgr_to_cmy<T: PixelFormat>(img: &Image<Bgr, T, 3>) -> Image<Cmy, f64, 3> {
    rgb_to_cmy(&crate::swap::bgr_to_rgb(img))
}

/// CMY to 8-bit BGR, through RGB.
pub fn cmy_to_bgr<T: PixelFormat>(img: &Image<Cmy, T, 3>) -> Image<Bgr, u8, 3> {
    crate::swap::rgb_to_bgr(&cmy_to_rgb(img))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        assert_eq!(cmy_pixel([0u8, 255, 0]), [1.0, 0.0, 1.0]);
        assert_eq!(rgb_pixel([1.0f64, 0.0, 1.0]), [0, 255, 0]);
    }

    #[test]
    fn test_roundtrip_within_one() {
        for v in 0..=255u8 {
            let back = rgb_pixel(cmy_pixel([v, v, v]));
            assert!(v.abs_diff(back[0]) <= 1, "{v} came back as {}", back[0]);
        }
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(rgb_pixel([-0.5f64, 1.5, f64::NAN]), [255, 0, 0]);
    }

    #[test]
    fn test_bgr_order() {
        let bgr: Image<Bgr, u8, 3> = Image::filled(2, 1, [0, 51, 255]);
        assert_eq!(bgr_to_cmy(&bgr).pixel(1, 0), [0.0, 0.8, 1.0]);

        let cmy: Image<Cmy, f64, 3> = Image::filled(1, 1, [0.0, 1.0, 1.0]);
        assert_eq!(cmy_to_bgr(&cmy).pixel(0, 0), [0, 0, 255]);
    }

    #[test]
    fn test_raster() {
        let rgb: Image<Rgb, u8, 3> = Image::filled(3, 2, [51, 102, 204]);
        let cmy = rgb_to_cmy(&rgb);
        assert_eq!(cmy.shape(), (2, 3, 3));
        let [c, m, y] = cmy.pixel(2, 1);
        assert!((c - 0.8).abs() < 1e-12 && (m - 0.6).abs() < 1e-12 && (y - 0.2).abs() < 1e-12);
    }
}
