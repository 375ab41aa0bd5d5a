//! Animation controller
//!
//! Owns the scene, its RNG and the noise field. Hosts call [`draw`] once per
//! frame and [`resize`] whenever the surface changes size.
//!
//! [`draw`]: AnimationController::draw
//! [`resize`]: AnimationController::resize

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::noise::PerlinNoise;
use super::state::{AnimationState, Scene};
use super::tick::tick;
use crate::consts::CIRCLE_COLOR;
use crate::surface::Surface;

/// Drives one run of the backdrop sequence
#[derive(Debug, Clone)]
pub struct AnimationController {
    scene: Scene,
    rng: Pcg32,
    noise: PerlinNoise,
    /// Frames drawn since the last reset
    frame: u64,
}

impl AnimationController {
    /// Create a controller for a `width` x `height` surface
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        // Noise field is per controller and survives resets
        let noise = PerlinNoise::new(&mut rng);
        let scene = Scene::generate(width, height, &mut rng);
        log::debug!(
            "Backdrop {}x{}: {} circles, seed {}",
            width,
            height,
            scene.circles.len(),
            seed
        );
        Self {
            scene,
            rng,
            noise,
            frame: 0,
        }
    }

    /// Restart the sequence from `Init` with a freshly randomized scene
    pub fn reset(&mut self, width: u32, height: u32) {
        self.scene = Scene::generate(width, height, &mut self.rng);
        self.frame = 0;
        log::debug!(
            "Backdrop reset to {}x{}: {} circles",
            width,
            height,
            self.scene.circles.len()
        );
    }

    /// Draw one frame
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        tick(&mut self.scene, surface, &mut self.rng, &self.noise);
        self.frame += 1;
    }

    /// Resize the surface, repaint the base color and restart
    pub fn resize<S: Surface + ?Sized>(&mut self, surface: &mut S, width: u32, height: u32) {
        surface.resize(width, height);
        surface.clear(CIRCLE_COLOR);
        self.reset(width, height);
    }

    pub fn state(&self) -> AnimationState {
        self.scene.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_finished(&self) -> bool {
        self.scene.state.is_terminal()
    }
}
