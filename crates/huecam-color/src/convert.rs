//! Sensor sample conversions between YUV, RGB and HSL.

use huecam_core::{Hsl, Rgb, YuvSample};

/// Convert a camera YUV sample to RGB.
///
/// The chroma channels arrive unsigned with 128 representing zero
/// chrominance, so they are re-centered before the conversion matrix is
/// applied. Out-of-range results are clamped, never rejected.
pub fn yuv_to_rgb(sample: YuvSample) -> Rgb {
    let y = sample.y as f32;
    let u = sample.u as f32 - 128.0;
    let v = sample.v as f32 - 128.0;

    let r = y + 1.13983 * v;
    let g = y - 0.39465 * u - 0.58060 * v;
    let b = y + 2.03211 * u;

    Rgb::new(clamp_u8(r), clamp_u8(g), clamp_u8(b))
}

/// Convert RGB to HSL.
///
/// Achromatic input (chroma = 0) yields hue 0 and saturation 0 instead
/// of dividing by zero. Hue is wrapped into [0,360).
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = (rgb.r as i32, rgb.g as i32, rgb.b as i32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = (max - min) as f32;
    let lightness = (max + min) as f32 / 510.0;

    if chroma == 0.0 {
        return Hsl::new(0.0, 0.0, lightness);
    }

    let hue = if max == r {
        60.0 * ((g - b) as f32 / chroma)
    } else if max == g {
        60.0 * ((b - r) as f32 / chroma + 2.0)
    } else {
        60.0 * ((r - g) as f32 / chroma + 4.0)
    };
    let hue = hue.rem_euclid(360.0);

    let saturation = chroma / (255.0 * (1.0 - (2.0 * lightness - 1.0).abs()));
    Hsl::new(hue, saturation, lightness)
}

/// Convert HSL back to RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = hsl.l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(
        clamp_u8(((r + m) * 255.0).round()),
        clamp_u8(((g + m) * 255.0).round()),
        clamp_u8(((b + m) * 255.0).round()),
    )
}

#[inline]
fn clamp_u8(channel: f32) -> u8 {
    channel.clamp(0.0, 255.0) as u8
}
