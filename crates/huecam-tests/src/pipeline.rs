//! Integration tests for the frame transform pipeline.
//!
//! Exercises cross-crate interactions between huecam-core, huecam-color
//! and huecam-engine.

use huecam_color::{classify, rgb_to_hsl, yuv_to_rgb};
use huecam_core::{DisplayBuffer, HuecamError, Orientation, RawFrame, SensorFormat};
use huecam_engine::{ColorRecognizer, Effect, EffectSelection, FrameTransform};

// ── Helpers ────────────────────────────────────────────────────

/// 4x4 NV21 frame with varied luma and one distinct chroma pair per
/// 2x2 quadrant.
fn quadrant_nv21() -> Vec<u8> {
    let mut data = vec![0u8; SensorFormat::Nv21.frame_size(4, 4)];
    for (i, luma) in data[..16].iter_mut().enumerate() {
        *luma = 80 + (i as u8) * 8;
    }
    data[16..24].copy_from_slice(&[240, 110, 110, 60, 120, 240, 128, 128]);
    data
}

/// Solid-color frame in the requested layout.
fn solid_frame(format: SensorFormat, width: u32, height: u32, y: u8, u: u8, v: u8) -> Vec<u8> {
    let pixels = width as usize * height as usize;
    let mut data = vec![0u8; format.frame_size(width, height)];
    match format {
        SensorFormat::Nv21 => {
            data[..pixels].fill(y);
            for pair in data[pixels..].chunks_mut(2) {
                pair[0] = v;
                pair[1] = u;
            }
        }
        SensorFormat::Yuyv => {
            for group in data.chunks_mut(4) {
                group.copy_from_slice(&[y, u, y, v]);
            }
        }
    }
    data
}

fn render(raw: &RawFrame<'_>, selection: EffectSelection, orientation: Orientation) -> DisplayBuffer {
    let mut display = DisplayBuffer::new(raw.width(), raw.height());
    FrameTransform::render(raw, &selection, orientation, &mut display).unwrap();
    display
}

// ── Whole-frame rendering ──────────────────────────────────────

#[test]
fn none_effect_matches_direct_conversion_per_pixel() {
    let data = quadrant_nv21();
    let raw = RawFrame::new(&data, 4, 4, SensorFormat::Nv21).unwrap();
    let display = render(&raw, EffectSelection::single(Effect::None), Orientation::Portrait);

    for y in 0..4 {
        for x in 0..4 {
            let expected = yuv_to_rgb(raw.sample_at(x, y)).pack_rgb565();
            assert_eq!(display.pixel_at(x, y), expected, "pixel ({x},{y})");
        }
    }
}

#[test]
fn nv21_and_yuyv_render_the_same_scene_identically() {
    let nv21 = solid_frame(SensorFormat::Nv21, 4, 2, 100, 90, 210);
    let yuyv = solid_frame(SensorFormat::Yuyv, 4, 2, 100, 90, 210);
    let raw_nv21 = RawFrame::new(&nv21, 4, 2, SensorFormat::Nv21).unwrap();
    let raw_yuyv = RawFrame::new(&yuyv, 4, 2, SensorFormat::Yuyv).unwrap();

    let a = render(&raw_nv21, EffectSelection::single(Effect::None), Orientation::Portrait);
    let b = render(&raw_yuyv, EffectSelection::single(Effect::None), Orientation::Portrait);
    assert_eq!(a.pixels(), b.pixels());
}

#[test]
fn partial_mode_split_axis_follows_orientation() {
    let data = solid_frame(SensorFormat::Nv21, 4, 4, 100, 128, 228);
    let raw = RawFrame::new(&data, 4, 4, SensorFormat::Nv21).unwrap();
    let selection = EffectSelection::split(Effect::Black, Effect::None);

    let portrait = render(&raw, selection, Orientation::Portrait);
    // Vertical split: whole columns are uniform.
    assert_eq!(portrait.pixel_at(0, 0), 0);
    assert_eq!(portrait.pixel_at(1, 3), 0);
    assert_ne!(portrait.pixel_at(2, 0), 0);

    let landscape = render(&raw, selection, Orientation::LandscapeRight);
    // Horizontal split: whole rows are uniform.
    assert_eq!(landscape.pixel_at(0, 0), 0);
    assert_eq!(landscape.pixel_at(3, 1), 0);
    assert_ne!(landscape.pixel_at(0, 2), 0);
}

#[test]
fn failed_render_preserves_previous_frame() {
    let data = quadrant_nv21();
    let raw = RawFrame::new(&data, 4, 4, SensorFormat::Nv21).unwrap();
    let mut display = DisplayBuffer::new(4, 4);
    FrameTransform::render(
        &raw,
        &EffectSelection::single(Effect::None),
        Orientation::Portrait,
        &mut display,
    )
    .unwrap();
    let before: Vec<u16> = display.pixels().to_vec();

    // A preview-size change the display buffer has not caught up with.
    let bigger = solid_frame(SensorFormat::Nv21, 8, 8, 100, 128, 128);
    let raw_bigger = RawFrame::new(&bigger, 8, 8, SensorFormat::Nv21).unwrap();
    let err = FrameTransform::render(
        &raw_bigger,
        &EffectSelection::single(Effect::None),
        Orientation::Portrait,
        &mut display,
    )
    .unwrap_err();

    assert!(matches!(err, HuecamError::DimensionMismatch { .. }));
    assert_eq!(display.pixels(), before.as_slice());
}

// ── Tap-to-label consistency ───────────────────────────────────

#[test]
fn false_colors_render_agrees_with_point_query() {
    let data = quadrant_nv21();
    let raw = RawFrame::new(&data, 4, 4, SensorFormat::Nv21).unwrap();
    let display = render(
        &raw,
        EffectSelection::single(Effect::FalseColors),
        Orientation::Portrait,
    );
    let recognizer = ColorRecognizer::new(4, 4);

    for y in 0..4 {
        for x in 0..4 {
            let bucket = recognizer.color_at(x as i32, y as i32, &raw, Orientation::Portrait);
            assert_eq!(
                display.pixel_at(x, y),
                bucket.false_color().pack_rgb565(),
                "tap label disagrees with rendering at ({x},{y})"
            );
        }
    }
}

#[test]
fn query_classification_matches_library_chain() {
    let data = quadrant_nv21();
    let raw = RawFrame::new(&data, 4, 4, SensorFormat::Nv21).unwrap();
    let recognizer = ColorRecognizer::new(4, 4);

    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(
                recognizer.color_at(x as i32, y as i32, &raw, Orientation::Portrait),
                classify(rgb_to_hsl(yuv_to_rgb(raw.sample_at(x, y)))),
            );
        }
    }
}
