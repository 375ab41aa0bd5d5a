//! Animation simulation module
//!
//! The whole visual sequence lives here. It is pure apart from the
//! [`Surface`](crate::surface::Surface) it paints on:
//! - Seeded RNG only
//! - One state transition at most per frame
//! - No platform dependencies

pub mod controller;
pub mod noise;
pub mod state;
pub mod tick;

pub use controller::AnimationController;
pub use noise::PerlinNoise;
pub use state::{AnimationState, Circle, Satellite, Scene};
pub use tick::tick;
