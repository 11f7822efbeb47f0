//! Draw-capability boundary
//!
//! The simulation never draws; it describes. [`present`] walks the
//! post-step store in paint order and hands one [`Sprite`] per entity
//! to the host's [`DrawTarget`]. Stars and explosion particles are
//! plain circles the host reads straight off the [`World`], and the
//! latest step's shake offset is applied by the host as a whole-surface
//! translation.

use glam::Vec2;

use super::state::{EnemyKind, World};

/// Geometry and style parameters for one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Top-left corner in playfield coordinates
    pub pos: Vec2,
    pub size: Vec2,
    pub rotation: Option<f32>,
    /// Cosmetic shape variant, where the entity kind has them
    pub variant: Option<u8>,
    /// 0xRRGGBB tint, where the entity kind has one
    pub color_hint: Option<u32>,
}

/// One operation per drawable entity kind, implemented by the host
pub trait DrawTarget {
    fn player_ship(&mut self, sprite: &Sprite);
    fn asteroid(&mut self, sprite: &Sprite);
    fn planet(&mut self, sprite: &Sprite);
    fn bullet(&mut self, sprite: &Sprite);
    fn explosion(&mut self, sprite: &Sprite);
}

/// Emit the whole frame in paint order: player, bullets, enemies,
/// explosions.
pub fn present<D: DrawTarget>(world: &World, target: &mut D) {
    let player = &world.player;
    target.player_ship(&Sprite {
        pos: player.pos,
        size: Vec2::new(player.width, player.height),
        rotation: Some(player.rotation),
        variant: None,
        color_hint: None,
    });

    for bullet in &world.bullets {
        target.bullet(&Sprite {
            pos: bullet.pos,
            size: Vec2::new(bullet.width, bullet.height),
            rotation: None,
            variant: None,
            color_hint: None,
        });
    }

    for enemy in &world.enemies {
        let sprite = Sprite {
            pos: enemy.pos,
            size: Vec2::splat(enemy.size),
            // Planets read as spheres; spinning them looks wrong
            rotation: match enemy.kind {
                EnemyKind::Meteor => Some(enemy.rotation),
                EnemyKind::Planet => None,
            },
            variant: Some(enemy.variant),
            color_hint: None,
        };
        match enemy.kind {
            EnemyKind::Meteor => target.asteroid(&sprite),
            EnemyKind::Planet => target.planet(&sprite),
        }
    }

    for explosion in &world.explosions {
        target.explosion(&Sprite {
            pos: explosion.origin - Vec2::splat(explosion.radius),
            size: Vec2::splat(explosion.radius * 2.0),
            rotation: None,
            variant: None,
            color_hint: None,
        });
    }
}
