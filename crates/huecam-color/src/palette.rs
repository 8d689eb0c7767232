//! Substitute colors for the false-color rendering mode.

use crate::classify::ColorBucket;
use huecam_core::Rgb;

impl ColorBucket {
    /// Fixed, maximally distinct substitute color for this bucket.
    ///
    /// The false-color effect quantizes the whole frame into these
    /// twelve values, discarding the original hue and luminance nuance
    /// so that every bucket is trivially tellable from every other.
    pub const fn false_color(self) -> Rgb {
        match self {
            Self::Black => Rgb::new(0, 0, 0),
            Self::Grey => Rgb::new(128, 128, 128),
            Self::White => Rgb::new(255, 255, 255),
            Self::Red => Rgb::new(255, 0, 0),
            Self::Orange => Rgb::new(255, 128, 0),
            Self::Yellow => Rgb::new(255, 255, 0),
            Self::Green => Rgb::new(0, 255, 0),
            Self::Turquoise => Rgb::new(0, 255, 255),
            Self::Blue => Rgb::new(0, 0, 255),
            Self::Purple => Rgb::new(160, 32, 240),
            Self::Brown => Rgb::new(139, 69, 19),
            Self::Unknown => Rgb::new(255, 0, 255),
        }
    }
}
