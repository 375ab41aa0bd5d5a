//! Scene data and animation state
//!
//! Everything a single run of the sequence mutates lives in [`Scene`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::consts::*;
use crate::orbit_offset;

/// Current phase of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnimationState {
    /// Freshly reset, waiting for the first frame
    Init,
    /// Reveal sweep painting strips left to right
    DrawingCircles,
    /// Dotting the masked region with noise
    Granulating,
    /// Wavefront crossing the screen
    DrawingWave,
    /// Sequence finished
    End,
}

impl AnimationState {
    /// The only state this one may transition to
    pub fn next(self) -> Option<Self> {
        match self {
            AnimationState::Init => Some(AnimationState::DrawingCircles),
            AnimationState::DrawingCircles => Some(AnimationState::Granulating),
            AnimationState::Granulating => Some(AnimationState::DrawingWave),
            AnimationState::DrawingWave => Some(AnimationState::End),
            AnimationState::End => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == AnimationState::End
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationState::Init => "init",
            AnimationState::DrawingCircles => "drawing-circles",
            AnimationState::Granulating => "granulating",
            AnimationState::DrawingWave => "drawing-wave",
            AnimationState::End => "end",
        }
    }
}

/// A reveal circle, excluded from every masked fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    /// Sampled size in [CIRCLE_RADIUS_MIN, CIRCLE_RADIUS_MAX], drawn as a diameter
    pub radius: f32,
}

impl Circle {
    /// Radius of the disc actually masked on screen
    #[inline]
    pub fn disc_radius(&self) -> f32 {
        self.radius / 2.0
    }
}

/// A point orbiting the wavefront
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    /// Orbit radius, within [WAVE_RADIUS / 2, WAVE_RADIUS]
    pub radius: f32,
    /// Orbit angle, advanced every wave frame
    pub theta: f32,
    /// Direction of the swing
    pub phi: f32,
}

impl Satellite {
    /// Current offset from the wave center
    #[inline]
    pub fn offset(&self) -> Vec2 {
        orbit_offset(self.radius, self.theta, self.phi)
    }
}

/// Uniform sample in [0, extent), or 0 for an empty range
pub(crate) fn sample_below<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

/// Number of reveal circles for a surface: floor(width * height * 0.00001)
pub fn circle_count(width: u32, height: u32) -> usize {
    (u64::from(width) * u64::from(height) / PIXELS_PER_CIRCLE) as usize
}

/// Per-run animation state (randomized on every reset)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub state: AnimationState,
    pub circles: Vec<Circle>,
    /// Left edge of the next reveal strip
    pub sweep_x: f32,
    /// Granulation frames drawn so far
    pub granulate_frames: u32,
    pub wave_center: Vec2,
    /// dy/dx of the wavefront path
    pub wave_slope: f32,
    pub satellites: Vec<Satellite>,
}

impl Scene {
    /// Build a fresh scene sized for a `width` x `height` surface
    pub fn generate<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Self {
        let w = width as f32;
        let h = height as f32;

        let circles = (0..circle_count(width, height))
            .map(|_| Circle {
                center: Vec2::new(sample_below(rng, w), sample_below(rng, h)),
                radius: rng.random_range(CIRCLE_RADIUS_MIN..CIRCLE_RADIUS_MAX),
            })
            .collect();

        let wave_center = Vec2::new(-WAVE_RADIUS, sample_below(rng, h / 8.0));
        // Diagonal path: reaches the bottom edge as it crosses the full width
        let wave_slope = if width > 0 { h / w } else { 0.0 };

        let satellites = (0..SATELLITE_COUNT)
            .map(|i| {
                // Second half orbits a quarter turn ahead of the first
                let band = if i >= SATELLITE_COUNT / 2 { FRAC_PI_2 } else { 0.0 };
                Satellite {
                    radius: rng.random_range(WAVE_RADIUS / 2.0..=WAVE_RADIUS),
                    theta: rng.random_range(0.0..FRAC_PI_2) + band,
                    phi: rng.random_range(0.0..FRAC_PI_2) + FRAC_PI_4,
                }
            })
            .collect();

        Self {
            width: w,
            height: h,
            state: AnimationState::Init,
            circles,
            sweep_x: 0.0,
            granulate_frames: 0,
            wave_center,
            wave_slope,
            satellites,
        }
    }

    /// Move to the next state in the sequence
    pub fn advance_state(&mut self) {
        if let Some(next) = self.state.next() {
            log::info!("Backdrop {} -> {}", self.state.as_str(), next.as_str());
            self.state = next;
        }
    }
}
