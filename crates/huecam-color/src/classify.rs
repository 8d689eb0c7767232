//! Hue-threshold color classification.

use huecam_core::Hsl;
use serde::{Deserialize, Serialize};

/// Named color classification of one sample.
///
/// A closed set of twelve mutually exclusive buckets. The identity is
/// stable: it labels the tap-to-name popup and selects the substitute
/// color in the false-color rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorBucket {
    Black,
    Grey,
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Turquoise,
    Blue,
    Purple,
    Brown,
    Unknown,
}

impl ColorBucket {
    /// Stable display label for the caller to localize.
    pub fn label(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Grey => "grey",
            Self::White => "white",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Turquoise => "turquoise",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Brown => "brown",
            Self::Unknown => "unknown",
        }
    }
}

/// Ascending hue boundary table, upper bound exclusive, evaluated top
/// down. The final entry wraps high reds back around to red.
const HUE_TABLE: [(f32, ColorBucket); 8] = [
    (20.0, ColorBucket::Red),
    (45.0, ColorBucket::Orange),
    (70.0, ColorBucket::Yellow),
    (150.0, ColorBucket::Green),
    (200.0, ColorBucket::Turquoise),
    (265.0, ColorBucket::Blue),
    (330.0, ColorBucket::Purple),
    (360.0, ColorBucket::Red),
];

/// Classify an HSL value into one of the twelve color buckets.
///
/// A pure function of its input: dark and light samples short-circuit to
/// black/white, desaturated samples to grey, everything else buckets by
/// hue with a brown override for weakly saturated reds and oranges.
pub fn classify(hsl: Hsl) -> ColorBucket {
    if hsl.l < 0.2 {
        return ColorBucket::Black;
    }
    if hsl.l > 0.8 {
        return ColorBucket::White;
    }
    if hsl.s < 0.2 {
        return ColorBucket::Grey;
    }

    let mut bucket = ColorBucket::Unknown;
    for &(bound, candidate) in HUE_TABLE.iter() {
        if hsl.h < bound {
            bucket = candidate;
            break;
        }
    }

    match bucket {
        ColorBucket::Red if hsl.s >= 0.2 && hsl.s < 0.35 => ColorBucket::Brown,
        ColorBucket::Orange if hsl.s >= 0.2 && hsl.s < 0.65 => ColorBucket::Brown,
        other => other,
    }
}
