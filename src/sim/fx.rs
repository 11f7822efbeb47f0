//! Explosion, particle, and screen-shake feedback
//!
//! None of this affects collision or scoring; it exists so the host
//! has something worth rendering when things blow up.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Warm debris palette (0xRRGGBB)
const EXPLOSION_PALETTE: [u32; 5] = [0xfef08a, 0xfdba74, 0xf87171, 0xfb923c, 0xfbbf24];

/// Pick a debris color.
pub fn explosion_color(rng: &mut Pcg32) -> u32 {
    EXPLOSION_PALETTE[rng.random_range(0..EXPLOSION_PALETTE.len())]
}

/// A single debris particle, owned by exactly one [`Explosion`] and
/// positioned relative to its origin
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub offset: Vec2,
    pub radius: f32,
    pub color: u32,
    pub velocity: Vec2,
    pub gravity: f32,
    pub opacity: f32,
}

/// An expanding, fading blast ring with its debris
#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    pub origin: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub opacity: f32,
    pub particles: Vec<Particle>,
}

impl Explosion {
    /// Build an explosion centered at `origin`; debris count and ring
    /// bounds scale with `size`.
    pub fn spawn(origin: Vec2, size: f32, rng: &mut Pcg32) -> Self {
        let count = (size / 5.0) as usize;
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(1.0..4.0);
            particles.push(Particle {
                offset: Vec2::ZERO,
                radius: rng.random_range(1.0..4.0),
                color: explosion_color(rng),
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                gravity: PARTICLE_GRAVITY,
                opacity: 1.0,
            });
        }

        Self {
            origin,
            radius: size / 4.0,
            max_radius: size,
            opacity: 1.0,
            particles,
        }
    }

    /// Advance one step. Returns `false` once fully faded; the caller
    /// removes the explosion (and with it, its particles) that frame.
    pub fn tick(&mut self) -> bool {
        self.radius = (self.radius + EXPLOSION_GROWTH).min(self.max_radius);
        self.opacity -= EXPLOSION_FADE;

        for particle in &mut self.particles {
            particle.offset += particle.velocity;
            particle.velocity.y += particle.gravity;
            particle.opacity = (particle.opacity - PARTICLE_FADE).max(0.0);
        }

        self.opacity > 0.0
    }

    /// Shake strength for an explosion of this footprint.
    pub fn shake_intensity(size: f32) -> f32 {
        (size / 20.0).min(SHAKE_MAX)
    }
}

/// Decaying render-offset hint. Entity positions are never touched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenShake {
    intensity: f32,
}

impl ScreenShake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the stronger of the current and requested intensity,
    /// never past [`SHAKE_MAX`].
    pub fn trigger(&mut self, intensity: f32) {
        self.intensity = self.intensity.max(intensity.min(SHAKE_MAX));
    }

    /// Produce this frame's offset and decay. Below [`SHAKE_FLOOR`]
    /// the intensity snaps to rest so it never lingers sub-pixel.
    pub fn tick(&mut self, rng: &mut Pcg32) -> Vec2 {
        if self.intensity <= 0.0 {
            return Vec2::ZERO;
        }

        let half = self.intensity / 2.0;
        let offset = Vec2::new(
            rng.random_range(-half..half),
            rng.random_range(-half..half),
        );

        self.intensity *= SHAKE_DECAY;
        if self.intensity < SHAKE_FLOOR {
            self.intensity = 0.0;
        }

        offset
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn is_active(&self) -> bool {
        self.intensity > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_explosion_particle_count_scales_with_size() {
        let mut rng = rng();
        let small = Explosion::spawn(Vec2::ZERO, 20.0, &mut rng);
        let large = Explosion::spawn(Vec2::ZERO, 100.0, &mut rng);
        assert_eq!(small.particles.len(), 4);
        assert_eq!(large.particles.len(), 20);
        assert!(small.particles.iter().all(|p| p.opacity == 1.0));
    }

    #[test]
    fn test_explosion_fades_out_on_schedule() {
        let mut rng = rng();
        let mut explosion = Explosion::spawn(Vec2::ZERO, 60.0, &mut rng);

        // Opacity drops 0.03/tick from 1.0: alive through tick 33,
        // dead on tick 34
        for tick in 1..=33 {
            assert!(explosion.tick(), "faded early at tick {tick}");
            let expected = 1.0 - 0.03 * tick as f32;
            assert!((explosion.opacity - expected).abs() < 1e-4);
        }
        assert!(!explosion.tick());
    }

    #[test]
    fn test_explosion_radius_clamped_at_max() {
        let mut rng = rng();
        let mut explosion = Explosion::spawn(Vec2::ZERO, 20.0, &mut rng);
        assert_eq!(explosion.radius, 5.0);

        for _ in 0..20 {
            explosion.tick();
        }
        assert_eq!(explosion.radius, explosion.max_radius);
    }

    #[test]
    fn test_particles_fall_under_gravity() {
        let mut rng = rng();
        let mut explosion = Explosion::spawn(Vec2::ZERO, 30.0, &mut rng);
        let initial_vy: Vec<f32> = explosion.particles.iter().map(|p| p.velocity.y).collect();

        explosion.tick();
        for (particle, vy0) in explosion.particles.iter().zip(initial_vy) {
            assert!((particle.velocity.y - (vy0 + PARTICLE_GRAVITY)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_shake_trigger_keeps_stronger_value() {
        let mut shake = ScreenShake::new();
        shake.trigger(6.0);
        shake.trigger(3.0);
        assert_eq!(shake.intensity(), 6.0);

        shake.trigger(50.0);
        assert_eq!(shake.intensity(), SHAKE_MAX);
    }

    #[test]
    fn test_shake_decay_sequence() {
        let mut shake = ScreenShake::new();
        shake.trigger(10.0);
        let mut rng = rng();

        let offset = shake.tick(&mut rng);
        assert!(offset.x.abs() <= 5.0 && offset.y.abs() <= 5.0);
        assert!((shake.intensity() - 9.0).abs() < 1e-5);

        // 10 * 0.9^k drops below 0.1 at k = 44, where it snaps to rest
        for _ in 0..43 {
            shake.tick(&mut rng);
        }
        assert_eq!(shake.intensity(), 0.0);
        assert_eq!(shake.tick(&mut rng), Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_shake_decays_to_rest(intensity in 0.0f32..20.0) {
            let mut shake = ScreenShake::new();
            shake.trigger(intensity);
            prop_assert!(shake.intensity() <= SHAKE_MAX);

            let mut rng = Pcg32::seed_from_u64(11);
            let mut prev = shake.intensity();
            for _ in 0..200 {
                shake.tick(&mut rng);
                prop_assert!(shake.intensity() >= 0.0);
                prop_assert!(shake.intensity() <= prev);
                prev = shake.intensity();
            }
            prop_assert_eq!(shake.intensity(), 0.0);
        }

        #[test]
        fn prop_shake_offset_bounded(intensity in 0.2f32..10.0) {
            let mut shake = ScreenShake::new();
            shake.trigger(intensity);
            let mut rng = Pcg32::seed_from_u64(13);

            let offset = shake.tick(&mut rng);
            prop_assert!(offset.x.abs() <= intensity / 2.0);
            prop_assert!(offset.y.abs() <= intensity / 2.0);
        }
    }
}
