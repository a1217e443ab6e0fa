//! # tint-color
//!
//! Conversions between BGR, RGB, CIE XYZ, CIE LUV, grayscale and CMY.
//!
//! - **Channel swap** - BGR <-> RGB, self-inverse
//! - **XYZ** - sRGB gamma decoding (or plain normalization) and the D65 matrix
//! - **LUV** - CIE L*u*v* with a zero-denominator guard, rescaled to 8-bit
//! - **Gray** - BT.601 luma
//! - **CMY** - complement pair
//!
//! # Architecture
//!
//! ```text
//!                  tint-color
//!                      |
//!        +-------------+-------------+
//!        |                           |
//!  tint-transfer                 tint-math
//!        |                           |
//!        +-------------+-------------+
//!                      |
//!                  tint-core
//! ```
//!
//! Every conversion is routed through RGB:
//!
//! ```text
//! BGR --swap--> RGB --linearize--> linear RGB --matrix--> XYZ --> LUV
//!                |
//!                +--> GRAY
//!                +--> CMY --> RGB --swap--> BGR
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tint_core::{Bgr, Image};
//! use tint_color::{bgr2gray, bgr2luv, bgr2xyz, xyz2luv};
//!
//! let bgr: Image<Bgr, u8, 3> = Image::filled(4, 4, [32, 64, 128]);
//!
//! let luv = bgr2luv(&bgr);
//! assert_eq!(luv, xyz2luv(&bgr2xyz(&bgr)));
//!
//! let gray = bgr2gray(&bgr);
//! assert_eq!(gray.channels(), 1);
//! ```
//!
//! The typed functions cannot be handed a raster in the wrong space. When
//! the conversion is picked at run time, use [`Conversion`] and [`AnyImage`].
//!
//! # Feature Flags
//!
//! - `parallel` - Row-parallel processing via rayon (enabled by default).
//!   Output is identical with and without it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod cmy;
pub mod convert;
pub mod graph;
pub mod gray;
pub mod luv;
pub mod swap;
pub mod xyz;

pub use convert::*;
pub use error::{ColorError, ColorResult};
pub use graph::{AnyImage, Conversion, Stage};
pub use xyz::{XyzPlane, XyzPlanes, XyzScale};

// Re-export sub-crates for convenience
pub use tint_math as math;
pub use tint_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::convert::*;
    pub use crate::{AnyImage, ColorError, ColorResult, Conversion, XyzPlanes, XyzScale};
    pub use tint_core::prelude::*;
    pub use tint_transfer::Linearize;
}
