//! Drawing capability
//!
//! The animation never touches pixels itself. Everything it paints goes
//! through [`Surface`], which the host implements (canvas on the web, a
//! command recorder for headless runs and tests).

pub mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Circle;

/// Opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray level from an intensity in [0, 1] (clamped)
    pub fn gray(intensity: f32) -> Self {
        let v = (intensity.clamp(0.0, 1.0) * 255.0) as u8;
        Self::new(v, v, v)
    }

    /// CSS color string, e.g. `rgb(239, 247, 255)`
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// 2D drawing surface consumed by the animation.
///
/// Masks nest: every `push_exclusion_mask` is matched by one `pop_mask`
/// before the frame ends.
pub trait Surface {
    /// Resize the backing surface (contents may be lost)
    fn resize(&mut self, width: u32, height: u32);

    /// Fill the entire surface (only called with no mask active)
    fn clear(&mut self, color: Rgb);

    /// Restrict subsequent fills to everything outside the circles' discs
    /// (see [`Circle::disc_radius`])
    fn push_exclusion_mask(&mut self, circles: &[Circle]);

    /// Drop the most recently pushed mask
    fn pop_mask(&mut self);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgb);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb, weight: f32);
}
