//! 3x3 RGB matrices for dichromacy simulation.

use huecam_core::Rgb;

/// 3x3 color transformation matrix, row major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    m: [[f32; 3]; 3],
}

impl ColorMatrix {
    /// Identity matrix (no transformation).
    pub const IDENTITY: Self = Self::new([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Deuteranopia (green-blind) simulation. Collapses the red/green
    /// axis the way the most common dichromacy perceives it.
    pub const DEUTERANOPIA: Self = Self::new([
        [0.625, 0.375, 0.0],
        [0.700, 0.300, 0.0],
        [0.000, 0.300, 0.7],
    ]);

    /// Create a matrix from row-major components.
    pub const fn new(m: [[f32; 3]; 3]) -> Self {
        Self { m }
    }

    /// Apply the matrix to an RGB value, clamping each channel.
    #[inline]
    pub fn apply(&self, rgb: Rgb) -> Rgb {
        let (r, g, b) = (rgb.r as f32, rgb.g as f32, rgb.b as f32);
        Rgb::new(
            clamp_u8(self.m[0][0] * r + self.m[0][1] * g + self.m[0][2] * b),
            clamp_u8(self.m[1][0] * r + self.m[1][1] * g + self.m[1][2] * b),
            clamp_u8(self.m[2][0] * r + self.m[2][1] * g + self.m[2][2] * b),
        )
    }
}

#[inline]
fn clamp_u8(channel: f32) -> u8 {
    channel.clamp(0.0, 255.0) as u8
}
