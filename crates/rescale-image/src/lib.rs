#![deny(missing_docs)]
//! Image container types for the rescale resampling engine

/// image representation for resampling purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
