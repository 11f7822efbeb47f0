//! Starfall - a vertical-scrolling arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, effects)
//! - `settings`: Effect and accessibility preferences (JSON file)
//! - `highscores`: In-memory session leaderboard
//!
//! The crate draws nothing and reads no input devices. The host feeds
//! logical key state and frame deltas into [`sim::step`], and consumes
//! draw parameters (via [`sim::present`]) and step events out. A fixed
//! seed replays a session exactly.

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (origin top-left, +y down)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Frame delta clamp (ms) - a stalled frame must not tunnel
    /// entities through collision boxes
    pub const MAX_FRAME_DELTA_MS: f32 = 100.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Distance from the bottom edge to the player's top edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 80.0;
    /// Horizontal distance covered per step while steering
    pub const PLAYER_STEP: f32 = 6.0;
    /// Tilt angle (radians) while steering
    pub const PLAYER_TILT: f32 = 0.1;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 8.0;
    pub const BULLET_HEIGHT: f32 = 20.0;
    pub const BULLET_SPEED: f32 = 10.0;
    /// Minimum time between shots while the fire key is held
    pub const FIRE_INTERVAL_MS: f32 = 200.0;

    /// Time between enemy spawns
    pub const SPAWN_INTERVAL_MS: f32 = 1200.0;

    /// Fraction of each box that stays solid for collision testing
    pub const HITBOX_MARGIN: f32 = 0.7;

    /// Explosion tuning
    pub const EXPLOSION_GROWTH: f32 = 2.0;
    pub const EXPLOSION_FADE: f32 = 0.03;
    pub const PARTICLE_FADE: f32 = 0.02;
    pub const PARTICLE_GRAVITY: f32 = 0.05;
    /// Footprint of the small flash where a bullet lands
    pub const HIT_EXPLOSION_SIZE: f32 = 20.0;
    /// Destruction explosion footprint relative to the enemy size
    pub const DESTROY_EXPLOSION_SCALE: f32 = 1.5;
    /// Player explosion footprint relative to the player width
    pub const PLAYER_EXPLOSION_SCALE: f32 = 2.0;

    /// Screen shake
    pub const SHAKE_MAX: f32 = 10.0;
    pub const SHAKE_DECAY: f32 = 0.9;
    pub const SHAKE_FLOOR: f32 = 0.1;

    /// Decorative background stars
    pub const STAR_COUNT: usize = 100;

    /// Score values per destroyed enemy
    pub const METEOR_POINTS: u64 = 10;
    pub const PLANET_POINTS: u64 = 30;
}
