//! Point color query: tap-to-label color recognition.

use huecam_color::{classify, rgb_to_hsl, yuv_to_rgb, ColorBucket};
use huecam_core::{Orientation, RawFrame};
use tracing::trace;

/// Resolves the classified color under a tapped display coordinate.
///
/// The recognizer reads the same raw buffer the transform engine
/// processes, deliberately without synchronization: the query may see
/// the most recent complete frame or the one currently being written,
/// either of which is an acceptable answer for a tap label. It uses the
/// exact conversion and classification path the false-color effect
/// uses, so the label always matches the rendered substitute color.
#[derive(Debug, Clone, Copy)]
pub struct ColorRecognizer {
    display_width: u32,
    display_height: u32,
}

impl ColorRecognizer {
    /// Create a recognizer for the current display geometry. Rebuilt by
    /// the host whenever the view size changes.
    pub fn new(display_width: u32, display_height: u32) -> Self {
        Self {
            display_width: display_width.max(1),
            display_height: display_height.max(1),
        }
    }

    /// Classified color at a display coordinate.
    ///
    /// Out-of-range coordinates clamp to the nearest valid pixel; the
    /// query never fails. O(1): one sample read, one classification.
    pub fn color_at(
        &self,
        screen_x: i32,
        screen_y: i32,
        raw: &RawFrame<'_>,
        orientation: Orientation,
    ) -> ColorBucket {
        let (x, y) = self.map_to_buffer(screen_x, screen_y, raw.width(), raw.height(), orientation);
        let bucket = classify(rgb_to_hsl(yuv_to_rgb(raw.sample_at(x, y))));
        trace!(screen_x, screen_y, x, y, ?bucket, "point query");
        bucket
    }

    /// Map a display coordinate onto raw-buffer coordinates.
    ///
    /// Portrait presents the buffer un-rotated; the landscape
    /// orientations swap the axes and invert one of them.
    fn map_to_buffer(
        &self,
        screen_x: i32,
        screen_y: i32,
        buffer_width: u32,
        buffer_height: u32,
        orientation: Orientation,
    ) -> (u32, u32) {
        let dw = self.display_width;
        let dh = self.display_height;
        let sx = screen_x.clamp(0, dw as i32 - 1) as u32;
        let sy = screen_y.clamp(0, dh as i32 - 1) as u32;

        let (bx, by) = match orientation {
            Orientation::Portrait | Orientation::Unknown => {
                (sx * buffer_width / dw, sy * buffer_height / dh)
            }
            Orientation::LandscapeLeft => {
                (sy * buffer_width / dh, (dw - 1 - sx) * buffer_height / dw)
            }
            Orientation::LandscapeRight => {
                ((dh - 1 - sy) * buffer_width / dh, sx * buffer_height / dw)
            }
        };
        (bx.min(buffer_width - 1), by.min(buffer_height - 1))
    }
}
