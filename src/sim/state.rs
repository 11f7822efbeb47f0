//! Entity store and session state
//!
//! Everything the simulation mutates lives in [`World`]; the host owns
//! it and drives it through [`super::tick::step`]. All randomness is
//! drawn from the world's seeded RNG, so a seed replays a session.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::fx::{Explosion, ScreenShake};
use super::spawn::{Spawner, seed_stars};
use crate::consts::*;

/// Session phase. The only transition out of `Playing` is the
/// player-enemy collision; the only way back is [`World::restart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Hostile entity families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Meteor,
    Planet,
}

impl EnemyKind {
    /// Score awarded when an enemy of this kind is destroyed.
    pub fn points(self) -> u64 {
        match self {
            EnemyKind::Meteor => METEOR_POINTS,
            EnemyKind::Planet => PLANET_POINTS,
        }
    }
}

/// Notifications a step hands back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    EnemyDestroyed { kind: EnemyKind, points: u64 },
    GameOver { score: u64 },
}

/// The player ship
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Tilt while steering, zero at rest
    pub rotation: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(
                FIELD_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
                FIELD_HEIGHT - PLAYER_BOTTOM_MARGIN,
            ),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            rotation: 0.0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Where bullets leave the ship.
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.width / 2.0 - BULLET_WIDTH / 2.0, self.pos.y)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A projectile travelling straight up
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Bullet {
    pub fn at_muzzle(player: &Player) -> Self {
        Self {
            pos: player.muzzle(),
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
            speed: BULLET_SPEED,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A descending hostile
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    /// Square footprint edge length
    pub size: f32,
    /// Downward distance per step
    pub speed: f32,
    pub health: u8,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub kind: EnemyKind,
    /// Cosmetic shape variant, 1-based
    pub variant: u8,
}

impl Enemy {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// Decorative background star, drifting down and wrapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub speed: f32,
}

/// The complete entity store for one session
#[derive(Debug, Clone)]
pub struct World {
    pub seed: u64,
    pub phase: GamePhase,
    /// Monotonic; mutated only inside `step`, frozen on game over
    pub score: u64,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub explosions: Vec<Explosion>,
    pub stars: Vec<Star>,
    pub spawner: Spawner,
    pub shake: ScreenShake,
    /// Accumulates while the fire key is held
    pub fire_timer_ms: f32,
    pub(crate) rng: Pcg32,
}

impl World {
    /// Build a fresh session: player centered at the bottom, empty
    /// projectile and hostile stores, a full starfield, score zero.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = seed_stars(&mut rng);
        log::debug!("new session, seed {seed}");

        Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            player: Player::new(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            explosions: Vec::new(),
            stars,
            spawner: Spawner::new(),
            shake: ScreenShake::new(),
            fire_timer_ms: 0.0,
            rng,
        }
    }

    /// Host restart command: reinitialize every collection, timer, and
    /// the score, and return to `Playing`. The RNG stream continues,
    /// so a session of N rounds replays from the seed alone.
    pub fn restart(&mut self) {
        log::info!("restarting session (seed {})", self.seed);
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.player = Player::new();
        self.bullets.clear();
        self.enemies.clear();
        self.explosions.clear();
        self.stars = seed_stars(&mut self.rng);
        self.spawner.reset();
        self.shake = ScreenShake::new();
        self.fire_timer_ms = 0.0;
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
