//! Huecam Color — color-space conversion and bucket classification.
//!
//! Color recognition happens in HSL space, primarily through the hue
//! value. Black, grey, white and brown additionally need saturation and
//! lightness, so the classifier combines all three.

pub mod classify;
pub mod convert;
pub mod matrix;
pub mod palette;

pub use classify::{classify, ColorBucket};
pub use convert::{hsl_to_rgb, rgb_to_hsl, yuv_to_rgb};
pub use matrix::ColorMatrix;
