//! # tint-transfer
//!
//! The linearization stage of the tint pipeline: decoding gamma-encoded
//! 8-bit RGB into linear-light values ahead of the XYZ matrix.
//!
//! # Stages
//!
//! | Item | What it does | Output range |
//! |------|--------------|--------------|
//! | [`srgb::eotf`] | Piecewise gamma decode of one normalized sample | [0, 1] |
//! | [`Linearize::Srgb`] | `v / 255`, decode, `* 100` | [0, 100] |
//! | [`Linearize::Normalize`] | `v / 255` only | [0, 1] |
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Image, Rgb};
//! use tint_transfer::{Linearize, linearize};
//!
//! let rgb: Image<Rgb, u8, 3> = Image::filled(2, 2, [255, 255, 255]);
//! let lin = linearize(&rgb, Linearize::Srgb);
//! assert_eq!(lin.pixel(0, 0), [100.0, 100.0, 100.0]);
//! ```
//!
//! # Dependencies
//!
//! - [`tint-core`] - Raster and color space types
//!
//! # Used By
//!
//! - `tint-color` - RGB to XYZ

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod linearize;
pub mod srgb;

pub use linearize::{Linearize, NORMALIZE, linearize};
