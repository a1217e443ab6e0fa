//! Whole-pipeline properties of the conversion functions.
//!
//! Expected 8-bit values were computed in double precision from the
//! formulas in `luv.rs` and truncated.

use approx::assert_abs_diff_eq;
use tint_color::luv::{self, EPSILON};
use tint_color::prelude::*;
use tint_color::{AnyImage, Conversion, xyz};
use tint_transfer::linearize;

/// Deterministic pseudo-random 8-bit raster.
fn noise<C: ColorSpace>(width: u32, height: u32, seed: u32) -> Image<C, u8, 3> {
    let mut state = seed.wrapping_mul(747_796_405).wrapping_add(2_891_336_453);
    let len = (width * height * 3) as usize;
    let data = (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect();
    Image::from_data(width, height, data).unwrap()
}

// (RGB, gamma-path LUV, direct-path LUV)
const LUV_REFERENCE: &[([u8; 3], [u8; 3], [u8; 3])] = &[
    ([128, 64, 32], [105, 130, 163], [156, 123, 167]),
    ([10, 200, 50], [187, 47, 211], [206, 47, 198]),
    ([32, 64, 128], [90, 86, 83], [143, 82, 90]),
    ([50, 200, 10], [188, 52, 222], [209, 59, 224]),
];

#[test]
fn channel_swap_is_self_inverse() {
    for seed in 0..4 {
        let bgr: Image<Bgr, u8, 3> = noise(17, 9, seed);
        assert_eq!(rgb2bgr(&bgr2rgb(&bgr)), bgr);

        let rgb: Image<Rgb, u8, 3> = noise(9, 17, seed + 100);
        assert_eq!(bgr2rgb(&rgb2bgr(&rgb)), rgb);
    }
}

#[test]
fn cmy_roundtrip_within_truncation() {
    let rgb: Image<Rgb, u8, 3> = noise(32, 8, 7);
    let back = cmy2rgb(&rgb2cmy(&rgb));
    assert_eq!(back.shape(), rgb.shape());
    for (a, b) in rgb.data().iter().zip(back.data()) {
        assert!(a.abs_diff(*b) <= 1, "{a} -> {b}");
    }

    let bgr: Image<Bgr, u8, 3> = noise(8, 8, 8);
    let back = cmy2bgr(&bgr2cmy(&bgr));
    for (a, b) in bgr.data().iter().zip(back.data()) {
        assert!(a.abs_diff(*b) <= 1, "{a} -> {b}");
    }
}

#[test]
fn cmy_forward_in_unit_range() {
    let cmy = rgb2cmy(&noise::<Rgb>(16, 16, 3));
    assert!(cmy.data().iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn black_maps_through_the_guard() {
    let black: Image<Rgb, u8, 3> = Image::new(3, 3);
    let planes = rgb2xyz(&black);
    assert_eq!(planes.pixel(2, 2), [0.0, 0.0, 0.0]);

    let luv = xyz2luv(&planes);
    assert_eq!(luv.pixel(1, 1), [0, 96, 136]);

    // same through the direct path
    assert_eq!(xyz2luv(&rgb2xyz_linear(&black)).pixel(0, 0), [0, 96, 136]);
}

#[test]
fn white_takes_cube_root_branch() {
    let white: Image<Rgb, u8, 3> = Image::filled(1, 1, [255, 255, 255]);
    let planes = rgb2xyz(&white);
    let [_, y, _] = planes.pixel(0, 0);
    assert!(planes.scale().normalize(y) > EPSILON);

    let raw = luv::xyz_to_cie_luv(&planes).pixel(0, 0);
    assert_abs_diff_eq!(raw[0], 100.0, epsilon = 1e-9);
    assert_eq!(rgb2luv(&white).pixel(0, 0), [254, 96, 136]);
    assert_eq!(xyz2luv(&rgb2xyz_linear(&white)).pixel(0, 0), [254, 96, 136]);
}

#[test]
fn gray_of_gray_is_identity() {
    let data: Vec<u8> = (0..=255u8).flat_map(|v| [v, v, v]).collect();
    let rgb: Image<Rgb, u8, 3> = Image::from_data(256, 1, data).unwrap();
    let gray = rgb2gray(&rgb);
    for (x, _, [v]) in gray.pixels() {
        assert_abs_diff_eq!(v, x as f64, epsilon = 1e-9);
    }
}

#[test]
fn luv_reference_values() {
    for &(rgb, gamma, direct) in LUV_REFERENCE {
        let img: Image<Rgb, u8, 3> = Image::filled(1, 1, rgb);
        assert_eq!(rgb2luv(&img).pixel(0, 0), gamma, "{rgb:?}");
        assert_eq!(xyz2luv(&rgb2xyz_linear(&img)).pixel(0, 0), direct, "{rgb:?}");
    }
}

#[test]
fn primaries() {
    let cases = [
        ([255, 0, 0], [135, 222, 173]),
        ([0, 255, 0], [223, 36, 240]),
        ([0, 0, 255], [82, 89, 9]),
    ];
    for (rgb, expected) in cases {
        let img: Image<Rgb, u8, 3> = Image::filled(1, 1, rgb);
        assert_eq!(rgb2luv(&img).pixel(0, 0), expected, "{rgb:?}");
    }
}

#[test]
fn composed_pipeline_matches_stages() {
    let rgb: Image<Rgb, u8, 3> = noise(23, 11, 42);

    let staged = luv::rescale(&luv::xyz_to_cie_luv(&xyz::linear_to_xyz(
        &linearize(&rgb, Linearize::Srgb),
        XyzScale::Percent,
    )));
    assert_eq!(rgb2luv(&rgb), staged);
    assert_eq!(rgb2luv(&rgb), xyz2luv(&rgb2xyz(&rgb)));

    let (x, y, z) = rgb2xyz(&rgb).into_tuple();
    assert_eq!(xyz2luv_components(&x, &y, &z, XyzScale::Percent).unwrap(), staged);
}

#[test]
fn raster_matches_per_pixel() {
    // enough rows that the parallel path splits the work
    let rgb: Image<Rgb, u8, 3> = noise(64, 37, 5);
    let luv = rgb2luv(&rgb);
    for (x, y, px) in rgb.pixels() {
        let expected = luv::luv_pixel(
            xyz::linear_to_xyz_pixel(Linearize::Srgb.apply_rgb(px)),
            XyzScale::Percent,
        );
        assert_eq!(luv.pixel(x, y), expected);
    }
}

#[test]
fn inputs_are_untouched() {
    let bgr: Image<Bgr, u8, 3> = noise(5, 5, 9);
    let copy = Image::<Bgr, u8, 3>::from_data(5, 5, bgr.data().to_vec()).unwrap();
    let _ = bgr2luv(&bgr);
    let _ = bgr2cmy(&bgr);
    let _ = bgr2gray(&bgr);
    assert_eq!(bgr, copy);
}

#[test]
fn synthetic_bgr_raster() {
    let data = vec![
        0, 0, 0, 255, 255, 255, //
        128, 64, 32, 10, 200, 50,
    ];
    let bgr = Image::<Bgr, u8, 3>::from_shape(2, 2, 3, data).unwrap();
    let luv: Image<Luv, u8, 3> = bgr2luv(&bgr);

    assert_eq!(luv.shape(), (2, 2, 3));
    assert_eq!(luv.pixel(0, 0), [0, 96, 136]);
    assert_eq!(luv.pixel(1, 0), [254, 96, 136]);
    assert_eq!(luv.pixel(0, 1), [90, 86, 83]);
    assert_eq!(luv.pixel(1, 1), [188, 52, 222]);
}

#[test]
fn wrong_channel_count_fails_fast() {
    let rgba = vec![0u8; 2 * 2 * 4];
    let err = Image::<Bgr, u8, 3>::from_shape(2, 2, 4, rgba).unwrap_err();
    assert!(matches!(err, Error::ChannelMismatch { expected: 3, got: 4 }));
}

#[test]
fn table_matches_typed_functions() {
    let bgr: Image<Bgr, u8, 3> = noise(6, 4, 11);
    let rgb: Image<Rgb, u8, 3> = noise(6, 4, 12);
    let cmy = rgb2cmy(&rgb);
    let planes = rgb2xyz(&rgb);

    let run = |conv: Conversion, img: AnyImage| conv.apply(&img).unwrap();

    assert_eq!(run(Conversion::BGR2RGB, bgr.clone().into()), AnyImage::from(bgr2rgb(&bgr)));
    assert_eq!(run(Conversion::RGB2BGR, rgb.clone().into()), AnyImage::from(rgb2bgr(&rgb)));
    assert_eq!(run(Conversion::RGB2XYZ, rgb.clone().into()), AnyImage::from(rgb2xyz(&rgb)));
    assert_eq!(
        run(Conversion::RGB2XYZ_LINEAR, rgb.clone().into()),
        AnyImage::from(rgb2xyz_linear(&rgb))
    );
    assert_eq!(run(Conversion::BGR2XYZ, bgr.clone().into()), AnyImage::from(bgr2xyz(&bgr)));
    assert_eq!(run(Conversion::XYZ2LUV, planes.clone().into()), AnyImage::from(xyz2luv(&planes)));
    assert_eq!(run(Conversion::RGB2LUV, rgb.clone().into()), AnyImage::from(rgb2luv(&rgb)));
    assert_eq!(run(Conversion::BGR2LUV, bgr.clone().into()), AnyImage::from(bgr2luv(&bgr)));
    assert_eq!(run(Conversion::RGB2GRAY, rgb.clone().into()), AnyImage::from(rgb2gray(&rgb)));
    assert_eq!(run(Conversion::BGR2GRAY, bgr.clone().into()), AnyImage::from(bgr2gray(&bgr)));
    assert_eq!(run(Conversion::RGB2CMY, rgb.clone().into()), AnyImage::from(rgb2cmy(&rgb)));
    assert_eq!(run(Conversion::BGR2CMY, bgr.clone().into()), AnyImage::from(bgr2cmy(&bgr)));
    assert_eq!(run(Conversion::CMY2RGB, cmy.clone().into()), AnyImage::from(cmy2rgb(&cmy)));
    assert_eq!(run(Conversion::CMY2BGR, cmy.clone().into()), AnyImage::from(cmy2bgr(&cmy)));
}

#[test]
fn table_rejects_wrong_source() {
    let luv: Image<Luv, u8, 3> = Image::new(1, 1);
    let err = Conversion::CMY2RGB.apply(&luv.into()).unwrap_err();
    assert_eq!(err.to_string(), "CMY2RGB expects a CMY raster, got LUV");
}
