//! Per-frame color transform writing the display buffer.

use crate::effect::{Effect, EffectSelection};
use crate::intensify::intensify;
use huecam_color::{classify, hsl_to_rgb, rgb_to_hsl, yuv_to_rgb, ColorMatrix};
use huecam_core::{DisplayBuffer, HuecamError, Orientation, RawFrame, Result, Rgb};
use tracing::trace;

/// Region of the frame in pixel coordinates, half open on both axes.
#[derive(Debug, Clone, Copy)]
struct Region {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl Region {
    /// Split along the orientation-dependent axis: columns in portrait,
    /// rows in landscape. The first half carries the primary effect.
    fn split(self, orientation: Orientation) -> (Region, Region) {
        if orientation.is_landscape() {
            let mid = self.y1 / 2;
            (Region { y1: mid, ..self }, Region { y0: mid, ..self })
        } else {
            let mid = self.x1 / 2;
            (Region { x1: mid, ..self }, Region { x0: mid, ..self })
        }
    }
}

/// Stateless frame transform engine.
///
/// Holds no cross-frame state and no synchronization; the caller
/// delivers frames strictly one at a time. The raw buffer is borrowed
/// for the duration of the call and goes straight back to the camera
/// source afterwards.
pub struct FrameTransform;

impl FrameTransform {
    /// Rewrite `display` from `raw` under the selected effects.
    ///
    /// Writes exactly width x height pixels, allocating nothing. Fails
    /// without touching the display buffer if its dimensions do not
    /// match the frame, so the previous frame stays presentable.
    pub fn render(
        raw: &RawFrame<'_>,
        selection: &EffectSelection,
        orientation: Orientation,
        display: &mut DisplayBuffer,
    ) -> Result<()> {
        if display.width() != raw.width() || display.height() != raw.height() {
            return Err(HuecamError::DimensionMismatch {
                display_width: display.width(),
                display_height: display.height(),
                frame_width: raw.width(),
                frame_height: raw.height(),
            });
        }

        trace!(
            width = raw.width(),
            height = raw.height(),
            ?selection,
            ?orientation,
            "transform frame"
        );

        let full = Region {
            x0: 0,
            y0: 0,
            x1: raw.width(),
            y1: raw.height(),
        };
        if selection.partial {
            let (first, second) = full.split(orientation);
            render_region(raw, first, selection.primary, display);
            render_region(raw, second, selection.secondary, display);
        } else {
            render_region(raw, full, selection.primary, display);
        }
        Ok(())
    }
}

/// Apply one effect to one region. The effect is dispatched here, once
/// per region, keeping the per-pixel loops free of the effect branch.
fn render_region(raw: &RawFrame<'_>, region: Region, effect: Effect, display: &mut DisplayBuffer) {
    let width = display.width() as usize;
    let pixels = display.pixels_mut();
    match effect {
        Effect::Black => {
            let black = Rgb::BLACK.pack_rgb565();
            for y in region.y0..region.y1 {
                let row = y as usize * width;
                for x in region.x0..region.x1 {
                    pixels[row + x as usize] = black;
                }
            }
        }
        Effect::None => recolor_region(raw, region, pixels, width, |rgb| rgb),
        Effect::Simulate => recolor_region(raw, region, pixels, width, |rgb| {
            ColorMatrix::DEUTERANOPIA.apply(rgb)
        }),
        Effect::IntensifyDifference => recolor_region(raw, region, pixels, width, |rgb| {
            hsl_to_rgb(intensify(rgb_to_hsl(rgb)))
        }),
        Effect::FalseColors => recolor_region(raw, region, pixels, width, |rgb| {
            classify(rgb_to_hsl(rgb)).false_color()
        }),
    }
}

#[inline]
fn recolor_region(
    raw: &RawFrame<'_>,
    region: Region,
    pixels: &mut [u16],
    width: usize,
    recolor: impl Fn(Rgb) -> Rgb,
) {
    for y in region.y0..region.y1 {
        let row = y as usize * width;
        for x in region.x0..region.x1 {
            let rgb = recolor(yuv_to_rgb(raw.sample_at(x, y)));
            pixels[row + x as usize] = rgb.pack_rgb565();
        }
    }
}
