//! 2D coherent noise
//!
//! Lattice value noise with cosine interpolation, summed over several
//! octaves. Output is always in [0, 1).

use rand::Rng;
use std::f32::consts::PI;

const LATTICE_BITS: u32 = 12;
const LATTICE_SIZE: usize = 1 << LATTICE_BITS;
const LATTICE_MASK: usize = LATTICE_SIZE - 1;
/// Row stride of the y axis inside the flat lattice
const Y_WRAP_BITS: u32 = 4;
const Y_WRAP: usize = 1 << Y_WRAP_BITS;

pub const DEFAULT_OCTAVES: u32 = 4;
pub const DEFAULT_FALLOFF: f32 = 0.5;

/// Seeded multi-octave noise field
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    lattice: Box<[f32]>,
    octaves: u32,
    falloff: f32,
}

#[inline]
fn scaled_cosine(t: f32) -> f32 {
    0.5 * (1.0 - (t * PI).cos())
}

impl PerlinNoise {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let lattice = (0..LATTICE_SIZE).map(|_| rng.random::<f32>()).collect();
        Self {
            lattice,
            octaves: DEFAULT_OCTAVES,
            falloff: DEFAULT_FALLOFF,
        }
    }

    #[inline]
    fn at(&self, index: usize) -> f32 {
        self.lattice[index & LATTICE_MASK]
    }

    /// Sample the field at (x, y). Negative coordinates mirror positive ones.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let (x, y) = (x.abs(), y.abs());
        if !x.is_finite() || !y.is_finite() {
            return 0.0;
        }

        let mut xi = x.floor() as usize;
        let mut yi = y.floor() as usize;
        let mut xf = x - x.floor();
        let mut yf = y - y.floor();

        let mut total = 0.0;
        let mut amplitude = 0.5;

        for _ in 0..self.octaves {
            let base = xi.wrapping_add(yi.wrapping_shl(Y_WRAP_BITS));

            let rx = scaled_cosine(xf);
            let ry = scaled_cosine(yf);

            let mut top = self.at(base);
            top += rx * (self.at(base.wrapping_add(1)) - top);
            let mut bottom = self.at(base.wrapping_add(Y_WRAP));
            bottom += rx * (self.at(base.wrapping_add(Y_WRAP + 1)) - bottom);
            top += ry * (bottom - top);

            total += top * amplitude;
            amplitude *= self.falloff;

            xi = xi.wrapping_shl(1);
            xf *= 2.0;
            yi = yi.wrapping_shl(1);
            yf *= 2.0;
            if xf >= 1.0 {
                xi = xi.wrapping_add(1);
                xf -= 1.0;
            }
            if yf >= 1.0 {
                yi = yi.wrapping_add(1);
                yf -= 1.0;
            }
        }

        total
    }
}
