//! Error types for huecam.

use thiserror::Error;

/// Main error type for huecam operations.
///
/// All variants are configuration errors in the sense that they signal a
/// caller bug in buffer sizing or preview-size negotiation. They fail the
/// single call; the caller logs and carries on with the next frame.
#[derive(Error, Debug)]
pub enum HuecamError {
    #[error("raw buffer size mismatch: expected {expected} bytes, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },

    #[error(
        "display buffer is {display_width}x{display_height} but the frame is {frame_width}x{frame_height}"
    )]
    DimensionMismatch {
        display_width: u32,
        display_height: u32,
        frame_width: u32,
        frame_height: u32,
    },

    #[error("unsupported preview size {width}x{height}: dimensions must be even and non-zero")]
    InvalidPreviewSize { width: u32, height: u32 },
}

/// Result type alias for huecam operations.
pub type Result<T> = std::result::Result<T, HuecamError>;
