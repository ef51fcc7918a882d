//! Pixel interpolation methods for image resampling.
//!
//! This module provides the interpolation algorithms used when resampling
//! images to a new resolution.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: fastest, copies the nearest pixel value (no interpolation)
//! - **Bilinear**: separable linear blend of the 2x2 neighborhood
//! - **Bicubic**: Catmull-Rom spline over the 4x4 neighborhood
//!
//! Each channel is interpolated independently; fractional results are
//! rounded to the nearest integer and clamped to `[0, 255]`.

mod bicubic;
mod bilinear;
mod nearest;

/// Coordinate mapping between output and source pixel spaces.
pub mod coords;

pub(crate) mod interpolate;

pub use coords::CoordMapper;
pub use interpolate::InterpolationMode;

pub use interpolate::interpolate_pixel;
