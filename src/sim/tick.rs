//! Per-frame update
//!
//! Advances the scene by exactly one frame, painting onto the surface.

use glam::Vec2;
use rand::Rng;

use super::noise::PerlinNoise;
use super::state::{AnimationState, Scene, sample_below};
use crate::consts::*;
use crate::surface::{Rgb, Surface};

/// Advance the scene by one frame
pub fn tick<S, R>(scene: &mut Scene, surface: &mut S, rng: &mut R, noise: &PerlinNoise)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    match scene.state {
        AnimationState::Init => scene.advance_state(),
        AnimationState::DrawingCircles => sweep_strip(scene, surface),
        AnimationState::Granulating => granulate(scene, surface, rng),
        AnimationState::DrawingWave => draw_wave(scene, surface, noise),
        AnimationState::End => {}
    }
}

/// Paint one background strip outside the circles and move the cursor
fn sweep_strip<S: Surface + ?Sized>(scene: &mut Scene, surface: &mut S) {
    surface.push_exclusion_mask(&scene.circles);
    surface.fill_rect(
        Vec2::new(scene.sweep_x, 0.0),
        Vec2::new(SWEEP_SPEED, scene.height),
        BACKGROUND,
    );
    surface.pop_mask();

    scene.sweep_x += SWEEP_SPEED;
    if scene.sweep_x >= scene.width {
        scene.advance_state();
    }
}

/// Scatter one frame's worth of same-colored dots outside the circles
fn granulate<S, R>(scene: &mut Scene, surface: &mut S, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    // One color per frame, shared by every dot
    let color = Rgb::new(rng.random(), rng.random(), rng.random());

    surface.push_exclusion_mask(&scene.circles);
    for _ in 0..GRANULATING_DOTS_PER_FRAME {
        let center = Vec2::new(
            sample_below(rng, scene.width),
            sample_below(rng, scene.height),
        );
        let diameter = rng.random_range(GRANULE_DIAMETER_MIN..GRANULE_DIAMETER_MAX);
        surface.fill_circle(center, diameter / 2.0, color);
    }
    surface.pop_mask();

    scene.granulate_frames += 1;
    if scene.granulate_frames >= GRANULATING_FRAMES {
        scene.advance_state();
    }
}

/// Move the wavefront one step and draw each satellite's trail segment
fn draw_wave<S: Surface + ?Sized>(scene: &mut Scene, surface: &mut S, noise: &PerlinNoise) {
    let center = scene.wave_center;
    let next_center = center + Vec2::new(WAVE_SPEED, scene.wave_slope * WAVE_SPEED);

    for satellite in &mut scene.satellites {
        let from = center + satellite.offset();
        satellite.theta += SATELLITE_DELTA_THETA;
        let to = next_center + satellite.offset();

        let shade = noise.sample(from.x / NOISE_SCALE, from.y / NOISE_SCALE);
        surface.stroke_line(from, to, Rgb::gray(shade), STROKE_WEIGHT);
    }

    scene.wave_center = next_center;
    if scene.wave_center.x >= scene.width + WAVE_RADIUS {
        scene.advance_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup(width: u32, height: u32) -> (Scene, RecordingSurface, Pcg32, PerlinNoise) {
        let mut rng = Pcg32::seed_from_u64(12345);
        let noise = PerlinNoise::new(&mut rng);
        let scene = Scene::generate(width, height, &mut rng);
        (scene, RecordingSurface::new(width, height), rng, noise)
    }

    #[test]
    fn test_tick_init_is_single_frame() {
        let (mut scene, mut surface, mut rng, noise) = setup(800, 600);
        tick(&mut scene, &mut surface, &mut rng, &noise);
        assert_eq!(scene.state, AnimationState::DrawingCircles);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_sweep_paints_masked_strips() {
        let (mut scene, mut surface, mut rng, noise) = setup(800, 600);
        scene.state = AnimationState::DrawingCircles;

        tick(&mut scene, &mut surface, &mut rng, &noise);
        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::PushMask {
                    disc_radii: scene.circles.iter().map(|c| c.radius / 2.0).collect(),
                },
                DrawCommand::Rect {
                    origin: Vec2::ZERO,
                    size: Vec2::new(SWEEP_SPEED, 600.0),
                    color: BACKGROUND,
                },
                DrawCommand::PopMask,
            ]
        );
        assert_eq!(scene.sweep_x, SWEEP_SPEED);
        assert_eq!(scene.state, AnimationState::DrawingCircles);
    }

    #[test]
    fn test_sweep_frame_count() {
        let (mut scene, mut surface, mut rng, noise) = setup(800, 600);
        scene.state = AnimationState::DrawingCircles;

        let mut frames = 0;
        while scene.state == AnimationState::DrawingCircles {
            tick(&mut scene, &mut surface, &mut rng, &noise);
            frames += 1;
        }
        // ceil(800 / 30)
        assert_eq!(frames, 27);
        assert_eq!(scene.state, AnimationState::Granulating);
        assert_eq!(surface.mask_depth(), 0);
    }

    #[test]
    fn test_granulate_uses_one_color_per_frame() {
        let (mut scene, mut surface, mut rng, noise) = setup(800, 600);
        scene.state = AnimationState::Granulating;

        tick(&mut scene, &mut surface, &mut rng, &noise);
        let colors: Vec<Rgb> = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { color, radius, center } => {
                    assert!((0.5..1.0).contains(radius));
                    assert!((0.0..800.0).contains(&center.x));
                    assert!((0.0..600.0).contains(&center.y));
                    Some(*color)
                }
                _ => None,
            })
            .collect();

        assert_eq!(colors.len(), GRANULATING_DOTS_PER_FRAME);
        assert!(colors.iter().all(|c| *c == colors[0]));
        assert_eq!(surface.masked_fills(), GRANULATING_DOTS_PER_FRAME);
        assert_eq!(scene.granulate_frames, 1);
    }

    #[test]
    fn test_drawn_sizes_are_half_the_sampled_sizes() {
        let (mut scene, mut surface, mut rng, noise) = setup(1920, 1080);
        scene.state = AnimationState::Granulating;
        tick(&mut scene, &mut surface, &mut rng, &noise);

        let DrawCommand::PushMask { disc_radii } = &surface.commands[0] else {
            panic!("expected a mask first, got {:?}", surface.commands[0]);
        };
        assert_eq!(disc_radii.len(), scene.circles.len());
        for (drawn, circle) in disc_radii.iter().zip(&scene.circles) {
            assert_eq!(*drawn, circle.radius / 2.0);
            assert!(*drawn >= CIRCLE_RADIUS_MIN / 2.0 && *drawn <= CIRCLE_RADIUS_MAX / 2.0);
        }

        let max_granule = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { radius, .. } => Some(*radius),
                _ => None,
            })
            .fold(0.0f32, f32::max);
        assert!(max_granule > 0.0 && max_granule <= GRANULE_DIAMETER_MAX / 2.0);
    }

    #[test]
    fn test_granulate_lasts_five_seconds() {
        let (mut scene, mut surface, mut rng, noise) = setup(320, 200);
        scene.state = AnimationState::Granulating;

        for _ in 0..GRANULATING_FRAMES - 1 {
            tick(&mut scene, &mut surface, &mut rng, &noise);
        }
        assert_eq!(scene.state, AnimationState::Granulating);
        tick(&mut scene, &mut surface, &mut rng, &noise);
        assert_eq!(scene.state, AnimationState::DrawingWave);
        assert_eq!(scene.granulate_frames, 120);
    }

    #[test]
    fn test_wave_segments_follow_satellites() {
        let (mut scene, mut surface, mut rng, noise) = setup(800, 600);
        scene.state = AnimationState::DrawingWave;
        let start = scene.wave_center;
        let before = scene.satellites.clone();

        tick(&mut scene, &mut surface, &mut rng, &noise);

        let next = start + Vec2::new(WAVE_SPEED, 0.75 * WAVE_SPEED);
        assert!((scene.wave_center - next).length() < 1e-4);

        let lines: Vec<_> = surface.drain();
        assert_eq!(lines.len(), SATELLITE_COUNT);
        for ((cmd, old), new) in lines.iter().zip(&before).zip(&scene.satellites) {
            assert!((new.theta - old.theta - SATELLITE_DELTA_THETA).abs() < 1e-5);
            assert_eq!(new.radius, old.radius);
            assert_eq!(new.phi, old.phi);

            let DrawCommand::Line { from, to, color, weight } = cmd else {
                panic!("expected a line, got {cmd:?}");
            };
            assert!((*from - (start + old.offset())).length() < 1e-3);
            assert!((*to - (next + new.offset())).length() < 1e-3);
            assert_eq!(color.r, color.g);
            assert_eq!(color.g, color.b);
            assert_eq!(*weight, STROKE_WEIGHT);

            let expected = Rgb::gray(noise.sample(from.x / NOISE_SCALE, from.y / NOISE_SCALE));
            assert_eq!(*color, expected);
        }
    }

    #[test]
    fn test_wave_ends_past_right_edge() {
        let (mut scene, mut surface, mut rng, noise) = setup(800, 600);
        scene.state = AnimationState::DrawingWave;

        let mut frames = 0;
        while scene.state == AnimationState::DrawingWave {
            tick(&mut scene, &mut surface, &mut rng, &noise);
            frames += 1;
        }
        // From -150 to 950 in steps of 10
        assert_eq!(frames, 110);
        assert!(scene.wave_center.x >= 800.0 + WAVE_RADIUS);
    }

    #[test]
    fn test_end_is_a_no_op() {
        let (mut scene, mut surface, mut rng, noise) = setup(800, 600);
        scene.state = AnimationState::End;
        let center = scene.wave_center;
        for _ in 0..10 {
            tick(&mut scene, &mut surface, &mut rng, &noise);
        }
        assert_eq!(scene.state, AnimationState::End);
        assert_eq!(scene.wave_center, center);
        assert!(surface.commands.is_empty());
    }
}
