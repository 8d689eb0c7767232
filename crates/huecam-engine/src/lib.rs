//! Huecam Engine — per-frame color transform and point color query.
//!
//! The transform engine rewrites one raw camera frame into a displayable
//! RGB565 buffer under the selected visual effect, including the
//! split-screen partial mode. The point query resolves a tapped display
//! coordinate to the classified color of the sample underneath it, using
//! the same conversion and classification path so that tap labels always
//! agree with what false-color mode renders.

pub mod effect;
pub mod query;
pub mod transform;

mod intensify;

pub use effect::{Effect, EffectSelection};
pub use query::ColorRecognizer;
pub use transform::FrameTransform;
