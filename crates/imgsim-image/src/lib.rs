#![deny(missing_docs)]
//! Image size and bounded pixel buffer views for image comparison

/// image size and borrowed pixel buffer views.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{ImageSize, RgbaView, RGBA_CHANNELS};
