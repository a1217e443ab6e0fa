//! Pixel command
//!
//! Builds a one-row raster from literal pixels in the conversion's source
//! space, runs the conversion and prints every output pixel.

use crate::PixelArgs;
use anyhow::{Context, Result, bail};
use tint_color::{AnyImage, Conversion, XyzPlanes};
use tint_core::{Bgr, Cmy, ColorSpaceId, Image, Rgb, Xyz};
use tracing::debug;

pub fn run(args: PixelArgs, verbose: bool) -> Result<()> {
    let conv: Conversion = args.conversion.parse()?;
    let input = build_input(conv.source(), &args)?;
    debug!(conversion = %conv, pixels = args.pixels.len(), "converting");

    if verbose {
        let stages: Vec<&str> = conv.stages().into_iter().map(|s| s.name()).collect();
        println!("{}: {}", conv, stages.join(" -> "));
    }

    let output = conv
        .apply(&input)
        .with_context(|| format!("{} failed", conv))?;

    let integer = conv.target().is_device_facing();
    for (x, text) in (0u32..).zip(&args.pixels) {
        let values = output.pixel_values(x, 0);
        println!("{} -> {}", text, super::format_values(&values, integer));
    }

    Ok(())
}

/// One-row raster holding the pixels in `space`.
fn build_input(space: ColorSpaceId, args: &PixelArgs) -> Result<AnyImage> {
    let width = u32::try_from(args.pixels.len()).context("too many pixels")?;

    let image: AnyImage = match space {
        ColorSpaceId::Bgr => Image::<Bgr, u8, 3>::from_data(width, 1, samples::<u8>(args)?)?.into(),
        ColorSpaceId::Rgb => Image::<Rgb, u8, 3>::from_data(width, 1, samples::<u8>(args)?)?.into(),
        ColorSpaceId::Cmy => Image::<Cmy, f64, 3>::from_data(width, 1, samples::<f64>(args)?)?.into(),
        ColorSpaceId::Xyz => {
            let xyz = Image::<Xyz, f64, 3>::from_data(width, 1, samples::<f64>(args)?)?;
            XyzPlanes::from_stacked(xyz, args.scale.into()).into()
        }
        other => bail!("no literal input for {} rasters", other),
    };
    Ok(image)
}

fn samples<T>(args: &PixelArgs) -> Result<Vec<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let mut out = Vec::with_capacity(args.pixels.len() * 3);
    for text in &args.pixels {
        out.extend(super::parse_triple::<T>(text)?);
    }
    Ok(out)
}
