//! # tint-core
//!
//! Core types for the tint color conversion pipeline.
//!
//! This crate provides the foundational types used by every other tint crate:
//!
//! - [`ColorSpace`] - Trait and marker types for compile-time color space tagging
//! - [`ColorSpaceId`] - Runtime mirror of the markers
//! - [`PixelFormat`] - Sample types (`u8`, `f32`, `f64`)
//! - [`Image`] - Raster buffer carrying its color space in the type
//!
//! ## Design Philosophy
//!
//! A raster never stores which color space it is in; the type does. A BGR
//! raster cannot be handed to a function expecting RGB without going through
//! an explicit conversion:
//!
//! ```ignore
//! let bgr: Image<Bgr, u8, 3> = decode("photo.bmp")?;
//! let luv = tint_color::bgr2luv(&bgr);
//! // tint_color::rgb2luv(&bgr); // Compile error!
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-math (matrices)
//!    +-- tint-transfer (linearization)
//!    +-- tint-color (conversion graph)
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Row-parallel [`Image::map_into`] via rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colorspace;
pub mod error;
pub mod image;
pub mod pixel;

// Re-exports for convenience
pub use colorspace::*;
pub use error::*;
pub use image::*;
pub use pixel::PixelFormat;

/// Prelude module for convenient imports.
///
/// ```
/// use tint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::colorspace::{
        Bgr, CieLuv, Cmy, ColorSpace, ColorSpaceId, Gray, LinearRgb, Luv, Rgb, Xyz,
    };
    pub use crate::error::{Error, Result};
    pub use crate::image::Image;
    pub use crate::pixel::PixelFormat;
}
