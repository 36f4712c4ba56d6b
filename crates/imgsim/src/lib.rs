#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use imgsim_image as image;

#[doc(inline)]
pub use imgsim_metrics as metrics;
