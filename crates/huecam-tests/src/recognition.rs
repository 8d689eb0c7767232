//! Integration tests for the color recognition chain.
//!
//! Runs sensor samples through conversion and classification end to end
//! and checks the classified names against known scene content.

use huecam_color::{classify, rgb_to_hsl, yuv_to_rgb, ColorBucket};
use huecam_core::YuvSample;

/// Inverse of the pipeline's YUV conversion, for synthesizing samples
/// from display colors.
fn rgb_to_yuv(r: u8, g: u8, b: u8) -> YuvSample {
    let (r, g, b) = (r as f32, g as f32, b as f32);
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let u = (b - y) / 2.03211 + 128.0;
    let v = (r - y) / 1.13983 + 128.0;
    YuvSample::new(
        y.clamp(0.0, 255.0) as u8,
        u.clamp(0.0, 255.0) as u8,
        v.clamp(0.0, 255.0) as u8,
    )
}

fn recognize(sample: YuvSample) -> ColorBucket {
    classify(rgb_to_hsl(yuv_to_rgb(sample)))
}

#[test]
fn mid_grey_round_trip() {
    let sample = YuvSample::new(128, 128, 128);
    let rgb = yuv_to_rgb(sample);
    assert_eq!((rgb.r, rgb.g, rgb.b), (128, 128, 128));

    let hsl = rgb_to_hsl(rgb);
    assert!((hsl.l - 0.502).abs() < 0.001);
    assert_eq!(hsl.s, 0.0);

    assert_eq!(recognize(sample), ColorBucket::Grey);
}

#[test]
fn color_bar_samples_classify_as_expected() {
    let cases = [
        ((255, 255, 255), ColorBucket::White),
        ((255, 255, 0), ColorBucket::Yellow),
        ((0, 255, 255), ColorBucket::Turquoise),
        ((0, 255, 0), ColorBucket::Green),
        ((255, 0, 255), ColorBucket::Purple),
        ((255, 0, 0), ColorBucket::Red),
        ((0, 0, 255), ColorBucket::Blue),
        ((0, 0, 0), ColorBucket::Black),
    ];
    for ((r, g, b), expected) in cases {
        let sample = rgb_to_yuv(r, g, b);
        assert_eq!(
            recognize(sample),
            expected,
            "bar ({r},{g},{b}) via sample {sample:?}"
        );
    }
}

#[test]
fn muddy_red_and_orange_read_as_brown() {
    // Desaturated warm tones: the brown override territory.
    assert_eq!(recognize(rgb_to_yuv(150, 100, 90)), ColorBucket::Brown);
    assert_eq!(recognize(rgb_to_yuv(160, 120, 80)), ColorBucket::Brown);
}

#[test]
fn recognition_is_deterministic_across_calls() {
    let sample = YuvSample::new(97, 63, 201);
    let first = recognize(sample);
    for _ in 0..10 {
        assert_eq!(recognize(sample), first);
    }
}
