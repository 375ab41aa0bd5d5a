//! Wave Backdrop - a generative animated page background
//!
//! Core modules:
//! - `sim`: Animation state machine (scene data, per-frame update, noise)
//! - `surface`: Drawing capability the animation paints through
//! - `platform`: Host frame pacing
//! - `renderer`: Canvas 2D surface (wasm32 only)

pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;
pub mod surface;

pub use platform::FrameClock;
pub use sim::{AnimationController, AnimationState};
pub use surface::{Rgb, Surface};

use glam::Vec2;

/// Animation constants
pub mod consts {
    use crate::surface::Rgb;

    /// Frames per second requested from the host clock
    pub const FRAME_RATE: u32 = 24;

    /// Color painted by the reveal sweep
    pub const BACKGROUND: Rgb = Rgb::new(255 - 16, 255 - 8, 255);
    /// Base fill of the surface (what the circles show through)
    pub const CIRCLE_COLOR: Rgb = Rgb::new(255 - 64, 255 - 32, 255 - 16);

    /// One reveal circle per this many pixels of surface (density 0.00001)
    pub const PIXELS_PER_CIRCLE: u64 = 100_000;
    /// Sampled circle size band; each circle is drawn with this as its diameter
    pub const CIRCLE_RADIUS_MIN: f32 = 100.0;
    pub const CIRCLE_RADIUS_MAX: f32 = 300.0;

    /// Width of the strip painted per frame, and cursor advance
    pub const SWEEP_SPEED: f32 = 30.0;

    /// Granulation lasts five seconds
    pub const GRANULATING_FRAMES: u32 = FRAME_RATE * 5;
    pub const GRANULATING_DOTS_PER_FRAME: usize = 100;
    pub const GRANULE_DIAMETER_MIN: f32 = 1.0;
    pub const GRANULE_DIAMETER_MAX: f32 = 2.0;

    pub const WAVE_RADIUS: f32 = 150.0;
    /// Horizontal wavefront advance per frame
    pub const WAVE_SPEED: f32 = 10.0;
    pub const SATELLITE_COUNT: usize = 10;
    /// Orbit advance per frame (radians)
    pub const SATELLITE_DELTA_THETA: f32 = 0.1;

    /// Noise input is the stroke start position divided by this
    pub const NOISE_SCALE: f32 = 100.0;
    pub const STROKE_WEIGHT: f32 = 1.0;
}

/// Offset of an orbiting point from its center.
///
/// `theta` swings the point along the direction `phi`; the result is the
/// projection `radius * cos(theta) * (cos(phi), sin(phi))`.
#[inline]
pub fn orbit_offset(radius: f32, theta: f32, phi: f32) -> Vec2 {
    let reach = radius * theta.cos();
    Vec2::new(reach * phi.cos(), reach * phi.sin())
}
