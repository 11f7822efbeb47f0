//! Timer-gated enemy spawning and starfield seeding
//!
//! The spawner is the only producer of hostiles. All construction
//! parameters come from the world RNG, bounded so geometry never goes
//! non-positive.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Enemy, EnemyKind, Star};
use crate::consts::*;

/// Accumulates frame time and yields one enemy per elapsed interval
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spawner {
    timer_ms: f32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed elapsed time; returns a fresh enemy once the spawn
    /// interval has passed, resetting the timer.
    pub fn try_spawn(&mut self, elapsed_ms: f32, rng: &mut Pcg32) -> Option<Enemy> {
        self.timer_ms += elapsed_ms;
        if self.timer_ms <= SPAWN_INTERVAL_MS {
            return None;
        }
        self.timer_ms = 0.0;

        let enemy = roll_enemy(rng);
        log::debug!(
            "spawned {:?} v{} size {:.0} at x {:.0}",
            enemy.kind,
            enemy.variant,
            enemy.size,
            enemy.pos.x
        );
        Some(enemy)
    }

    pub fn reset(&mut self) {
        self.timer_ms = 0.0;
    }
}

/// Roll a hostile: mostly meteors, occasionally a tougher planet.
fn roll_enemy(rng: &mut Pcg32) -> Enemy {
    let kind = if rng.random::<f32>() > 0.8 {
        EnemyKind::Planet
    } else {
        EnemyKind::Meteor
    };

    let (size, speed, health, variants) = match kind {
        EnemyKind::Meteor => (
            rng.random_range(40.0..70.0f32),
            rng.random_range(1.0..3.0f32),
            1u8,
            3u8,
        ),
        EnemyKind::Planet => (
            rng.random_range(70.0..110.0f32),
            rng.random_range(0.5..1.3f32),
            3u8,
            4u8,
        ),
    };

    Enemy {
        // Fully above the visible area, horizontally inside the field
        pos: Vec2::new(rng.random_range(0.0..FIELD_WIDTH - size), -size),
        size,
        speed,
        health,
        rotation: rng.random_range(0.0..TAU),
        rotation_speed: rng.random_range(-0.025..0.025),
        kind,
        variant: rng.random_range(1..=variants),
    }
}

/// Seed the decorative starfield across the whole playfield.
pub fn seed_stars(rng: &mut Pcg32) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random_range(0.0..FIELD_WIDTH),
                rng.random_range(0.0..FIELD_HEIGHT),
            ),
            radius: rng.random_range(0.5..2.0),
            opacity: rng.random_range(0.2..1.0),
            speed: rng.random_range(0.1..0.6),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_spawn_timer_gating() {
        let mut spawner = Spawner::new();
        let mut rng = rng();

        // 74 frames of 16ms = 1184ms, still inside the interval
        for _ in 0..74 {
            assert!(spawner.try_spawn(16.0, &mut rng).is_none());
        }
        // 1200ms exactly does not fire; the next frame does
        assert!(spawner.try_spawn(16.0, &mut rng).is_none());
        assert!(spawner.try_spawn(16.0, &mut rng).is_some());

        // Timer reset: the following frame is quiet again
        assert!(spawner.try_spawn(16.0, &mut rng).is_none());
    }

    #[test]
    fn test_spawn_parameter_bounds() {
        let mut rng = rng();
        for _ in 0..500 {
            let enemy = roll_enemy(&mut rng);
            match enemy.kind {
                EnemyKind::Meteor => {
                    assert!((40.0..70.0).contains(&enemy.size));
                    assert!((1.0..3.0).contains(&enemy.speed));
                    assert_eq!(enemy.health, 1);
                    assert!((1..=3).contains(&enemy.variant));
                }
                EnemyKind::Planet => {
                    assert!((70.0..110.0).contains(&enemy.size));
                    assert!((0.5..1.3).contains(&enemy.speed));
                    assert_eq!(enemy.health, 3);
                    assert!((1..=4).contains(&enemy.variant));
                }
            }
            assert!(enemy.pos.x >= 0.0);
            assert!(enemy.pos.x < FIELD_WIDTH - enemy.size);
            assert_eq!(enemy.pos.y, -enemy.size);
            assert!((0.0..TAU).contains(&enemy.rotation));
            assert!((-0.025..0.025).contains(&enemy.rotation_speed));
        }
    }

    #[test]
    fn test_meteors_dominate_spawns() {
        let mut rng = rng();
        let planets = (0..1000)
            .filter(|_| roll_enemy(&mut rng).kind == EnemyKind::Planet)
            .count();
        // ~20% planets; allow a generous band around it
        assert!((100..320).contains(&planets), "planet count {planets}");
    }

    #[test]
    fn test_starfield_seeding() {
        let mut rng = rng();
        let stars = seed_stars(&mut rng);
        assert_eq!(stars.len(), STAR_COUNT);
        for star in &stars {
            assert!((0.0..FIELD_WIDTH).contains(&star.pos.x));
            assert!((0.0..FIELD_HEIGHT).contains(&star.pos.y));
            assert!(star.radius >= 0.5 && star.radius < 2.0);
            assert!(star.opacity >= 0.2 && star.opacity < 1.0);
            assert!(star.speed >= 0.1 && star.speed < 0.6);
        }
    }
}
