//! Hue expansion away from the red/green confusion midpoint.

use huecam_core::Hsl;

/// Monotone piecewise-linear hue curve. Hues near the 60 degree midpoint
/// of the red/green confusion range are pushed outward; the rest of the
/// circle is left alone. Anchors are (input, output) pairs.
const HUE_ANCHORS: [(f32, f32); 6] = [
    (0.0, 0.0),
    (30.0, 10.0),
    (60.0, 60.0),
    (90.0, 110.0),
    (120.0, 120.0),
    (360.0, 360.0),
];

const SATURATION_GAIN: f32 = 1.4;

/// Remap an HSL value so confusable hues move apart.
///
/// The curve is monotone in hue, so the ordering of hues is preserved
/// even though the mapping is not the identity. Saturation gets a flat
/// boost to keep the expanded hues vivid.
pub(crate) fn intensify(hsl: Hsl) -> Hsl {
    Hsl::new(
        remap_hue(hsl.h.rem_euclid(360.0)),
        (hsl.s * SATURATION_GAIN).min(1.0),
        hsl.l,
    )
}

fn remap_hue(h: f32) -> f32 {
    for pair in HUE_ANCHORS.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if h <= x1 {
            let t = (h - x0) / (x1 - x0);
            return y0 + t * (y1 - y0);
        }
    }
    h
}
