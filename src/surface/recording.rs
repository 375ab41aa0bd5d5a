//! Headless surface that records draw calls instead of rasterizing them

use glam::Vec2;
use serde::Serialize;

use super::{Rgb, Surface};
use crate::sim::Circle;

/// A single recorded surface call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Resize { width: u32, height: u32 },
    Clear { color: Rgb },
    /// On-screen radius of every excluded disc
    PushMask { disc_radii: Vec<f32> },
    PopMask,
    Rect { origin: Vec2, size: Vec2, color: Rgb },
    Circle { center: Vec2, radius: f32, color: Rgb },
    Line { from: Vec2, to: Vec2, color: Rgb, weight: f32 },
}

/// Records every call in order, tracking mask nesting
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<DrawCommand>,
    mask_depth: usize,
    /// Fills issued while at least one mask was active
    masked_fills: usize,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Current mask nesting depth (0 when balanced)
    pub fn mask_depth(&self) -> usize {
        self.mask_depth
    }

    pub fn masked_fills(&self) -> usize {
        self.masked_fills
    }

    /// Take the recorded commands, leaving the recorder empty
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn record_fill(&mut self, command: DrawCommand) {
        if self.mask_depth > 0 {
            self.masked_fills += 1;
        }
        self.commands.push(command);
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn push_exclusion_mask(&mut self, circles: &[Circle]) {
        self.mask_depth += 1;
        self.commands.push(DrawCommand::PushMask {
            disc_radii: circles.iter().map(Circle::disc_radius).collect(),
        });
    }

    fn pop_mask(&mut self) {
        if self.mask_depth == 0 {
            log::warn!("pop_mask without a matching push");
            return;
        }
        self.mask_depth -= 1;
        self.commands.push(DrawCommand::PopMask);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgb) {
        self.record_fill(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.record_fill(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb, weight: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            weight,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_depth_tracks_nesting() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.push_exclusion_mask(&[]);
        surface.push_exclusion_mask(&[]);
        assert_eq!(surface.mask_depth(), 2);
        surface.fill_rect(Vec2::ZERO, Vec2::ONE, Rgb::new(1, 2, 3));
        surface.pop_mask();
        surface.pop_mask();
        assert_eq!(surface.mask_depth(), 0);
        assert_eq!(surface.masked_fills(), 1);
    }

    #[test]
    fn test_unbalanced_pop_is_ignored() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.pop_mask();
        assert_eq!(surface.mask_depth(), 0);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_resize_updates_dimensions() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.resize(640, 480);
        assert_eq!((surface.width, surface.height), (640, 480));
        assert_eq!(
            surface.drain(),
            vec![DrawCommand::Resize {
                width: 640,
                height: 480
            }]
        );
        assert!(surface.commands.is_empty());
    }
}
