//! Huecam demo - drives the pipeline the way a host application would.
//!
//! Stands in for the surrounding camera application: synthesizes NV21
//! color-bar frames, runs every effect plus the split-screen partial
//! mode, times each whole-frame transform against the preview budget,
//! and answers point queries across the frame.

use anyhow::Result;
use huecam_core::{preview, DisplayBuffer, Orientation, RawFrame, SensorFormat};
use huecam_engine::{ColorRecognizer, Effect, EffectSelection, FrameTransform};
use std::time::Instant;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

const EFFECTS: [Effect; 5] = [
    Effect::None,
    Effect::Simulate,
    Effect::IntensifyDifference,
    Effect::FalseColors,
    Effect::Black,
];

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("huecam demo starting...");

    let data = nv21_color_bars(WIDTH, HEIGHT);
    let raw = RawFrame::new(&data, WIDTH, HEIGHT, SensorFormat::Nv21)?;
    let mut display = DisplayBuffer::new(WIDTH, HEIGHT);

    for effect in EFFECTS {
        let selection = EffectSelection::single(effect);
        let start = Instant::now();
        FrameTransform::render(&raw, &selection, Orientation::Portrait, &mut display)?;
        let elapsed = start.elapsed();
        info!(?effect, ?elapsed, "rendered frame");
        if elapsed.as_millis() as u64 > preview::FRAME_INTERVAL_MS {
            warn!(
                ?effect,
                budget_ms = preview::FRAME_INTERVAL_MS,
                "transform exceeded the frame interval"
            );
        }
    }

    // Split-screen comparison: quantized palette next to the raw feed.
    let selection = EffectSelection::split(Effect::FalseColors, Effect::None);
    FrameTransform::render(&raw, &selection, Orientation::Portrait, &mut display)?;
    info!("rendered partial-mode frame");

    // Tap the middle of each color bar and report the classified name.
    let recognizer = ColorRecognizer::new(WIDTH, HEIGHT);
    for bar in 0..8 {
        let x = (WIDTH as i32 * (2 * bar + 1)) / 16;
        let y = HEIGHT as i32 / 2;
        let bucket = recognizer.color_at(x, y, &raw, Orientation::Portrait);
        info!(x, y, color = bucket.label(), "point query");
    }

    Ok(())
}

/// Eight full-range vertical color bars in NV21 layout.
fn nv21_color_bars(width: u32, height: u32) -> Vec<u8> {
    const BARS: [(u8, u8, u8); 8] = [
        (255, 255, 255), // White
        (255, 255, 0),   // Yellow
        (0, 255, 255),   // Cyan
        (0, 255, 0),     // Green
        (255, 0, 255),   // Magenta
        (255, 0, 0),     // Red
        (0, 0, 255),     // Blue
        (0, 0, 0),       // Black
    ];

    let (w, h) = (width as usize, height as usize);
    let mut data = vec![0u8; SensorFormat::Nv21.frame_size(width, height)];
    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = BARS[x * 8 / w];
            let (luma, u, v) = rgb_to_yuv(r, g, b);
            data[y * w + x] = luma;
            if y % 2 == 0 && x % 2 == 0 {
                let uv = w * h + (y / 2) * w + x;
                data[uv] = v;
                data[uv + 1] = u;
            }
        }
    }
    data
}

/// Inverse of the pipeline's YUV conversion, for synthesizing frames.
fn rgb_to_yuv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let (r, g, b) = (r as f32, g as f32, b as f32);
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let u = (b - y) / 2.03211 + 128.0;
    let v = (r - y) / 1.13983 + 128.0;
    (
        y.clamp(0.0, 255.0) as u8,
        u.clamp(0.0, 255.0) as u8,
        v.clamp(0.0, 255.0) as u8,
    )
}
