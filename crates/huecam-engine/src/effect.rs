//! Visual effect selection.

use serde::{Deserialize, Serialize};

/// A deterministic recoloring applied uniformly to a region of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Effect {
    /// Straight sensor-to-RGB conversion, no recoloring.
    #[default]
    None,
    /// Approximates how a dichromat perceives the frame.
    Simulate,
    /// Exaggerates the separation between confusable hues.
    IntensifyDifference,
    /// Quantizes the frame into the twelve-bucket substitute palette.
    FalseColors,
    /// Blanks the region; used for the unused half of partial mode.
    Black,
}

/// Immutable per-frame snapshot of the user's effect choice.
///
/// Derived from preferences by the host application and handed to the
/// engine once per frame. With `partial` set the frame splits into two
/// regions, primary and secondary side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EffectSelection {
    pub primary: Effect,
    pub secondary: Effect,
    pub partial: bool,
}

impl EffectSelection {
    /// Apply one effect to the whole frame.
    pub const fn single(effect: Effect) -> Self {
        Self {
            primary: effect,
            secondary: Effect::None,
            partial: false,
        }
    }

    /// Split-screen comparison of two effects.
    pub const fn split(primary: Effect, secondary: Effect) -> Self {
        Self {
            primary,
            secondary,
            partial: true,
        }
    }
}
