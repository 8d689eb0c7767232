//! Huecam Core - Foundation types for the color-vision pipeline
//!
//! This crate provides the fundamental types used throughout huecam:
//! - Color values (YUV samples, RGB, HSL) and RGB565 packing
//! - Sensor frame layouts and the borrowed raw-frame view
//! - The display buffer presented to the user
//! - Screen orientation bucketing

pub mod color;
pub mod error;
pub mod frame;
pub mod orientation;

pub use color::{Hsl, Rgb, YuvSample};
pub use error::{HuecamError, Result};
pub use frame::{DisplayBuffer, RawFrame, SensorFormat};
pub use orientation::Orientation;

/// Real-time budget constants for the preview pipeline.
pub mod preview {
    /// Target camera preview frame rate.
    pub const TARGET_FPS: u32 = 30;

    /// One frame interval at the target rate, in milliseconds. The
    /// whole-frame transform has to finish well inside this window.
    pub const FRAME_INTERVAL_MS: u64 = (1000 / TARGET_FPS) as u64;
}
