//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Single writer per step (the host owns the `World`)
//! - No rendering or platform dependencies

pub mod collision;
pub mod draw;
pub mod fx;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, overlaps};
pub use draw::{DrawTarget, Sprite, present};
pub use fx::{Explosion, Particle, ScreenShake};
pub use input::{Action, InputState};
pub use spawn::Spawner;
pub use state::{Bullet, Enemy, EnemyKind, GameEvent, GamePhase, Player, Star, World};
pub use tick::{StepResult, step};
