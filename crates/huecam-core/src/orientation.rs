//! Screen orientation bucketing.

use serde::{Deserialize, Serialize};

/// Four-way device orientation.
///
/// The orientation sensor reports a continuous angle; the pipeline only
/// cares which quadrant the device sits in. The degenerate reverse
/// portrait region folds back into portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Unknown,
    Portrait,
    LandscapeLeft,
    LandscapeRight,
}

impl Orientation {
    /// Bucket a sensor angle in degrees, with boundaries at 45, 135, 225
    /// and 315 degrees.
    pub fn from_degrees(degrees: i32) -> Self {
        let deg = degrees.rem_euclid(360);
        if deg < 45 {
            Self::Portrait
        } else if deg < 135 {
            Self::LandscapeRight
        } else if deg < 225 {
            Self::Portrait
        } else if deg < 315 {
            Self::LandscapeLeft
        } else {
            Self::Portrait
        }
    }

    /// Whether the display is rotated a quarter turn against the sensor
    /// scanline order.
    #[inline]
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::LandscapeLeft | Self::LandscapeRight)
    }
}
