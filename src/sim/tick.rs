//! Per-frame simulation step
//!
//! Advances the whole entity store in a fixed order: player steering,
//! firing, bullet flight, spawning, enemy resolution, effect aging,
//! shake, starfield. Mutable collections are walked in reverse index
//! order so in-place removal never skips or duplicates an element.

use glam::Vec2;

use super::collision::overlaps;
use super::fx::Explosion;
use super::input::{Action, InputState};
use super::state::{Bullet, GameEvent, GamePhase, World};
use crate::consts::*;

/// What one step hands back to the host
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepResult {
    pub events: Vec<GameEvent>,
    /// Render-offset hint for this frame; never applied to entities
    pub shake_offset: Vec2,
}

/// Advance the world by one frame of `elapsed_ms` wall time.
///
/// Entity motion is per-step; elapsed time only feeds the fire and
/// spawn timers and the starfield drift, clamped so a stalled frame
/// cannot tunnel entities through each other. Once the phase is
/// `GameOver` this is a no-op until the host calls [`World::restart`].
pub fn step(world: &mut World, input: &InputState, elapsed_ms: f32) -> StepResult {
    let mut result = StepResult::default();
    if world.phase == GamePhase::GameOver {
        return result;
    }

    let dt = elapsed_ms.clamp(0.0, MAX_FRAME_DELTA_MS);

    steer_player(world, input);
    fire_bullets(world, input, dt);
    advance_bullets(world);

    if let Some(enemy) = world.spawner.try_spawn(dt, &mut world.rng) {
        world.enemies.push(enemy);
    }

    let ended = resolve_enemies(world, &mut result.events);
    if ended {
        // The collision froze the session; the explosion spawned above
        // starts aging next frame, if the host keeps stepping at all.
        return result;
    }

    advance_explosions(world);
    result.shake_offset = world.shake.tick(&mut world.rng);
    drift_stars(world, dt);

    result
}

/// Fixed step left/right with a small tilt, clamped to the field.
fn steer_player(world: &mut World, input: &InputState) {
    let player = &mut world.player;
    if input.is_pressed(Action::MoveLeft) && player.pos.x > 0.0 {
        player.pos.x -= PLAYER_STEP;
        player.rotation = -PLAYER_TILT;
    } else if input.is_pressed(Action::MoveRight) && player.pos.x < FIELD_WIDTH - player.width {
        player.pos.x += PLAYER_STEP;
        player.rotation = PLAYER_TILT;
    } else {
        player.rotation = 0.0;
    }
    player.pos.x = player.pos.x.clamp(0.0, FIELD_WIDTH - player.width);
}

/// Holding fire emits a bullet each time the interval elapses.
fn fire_bullets(world: &mut World, input: &InputState, dt: f32) {
    if !input.is_pressed(Action::Fire) {
        return;
    }
    world.fire_timer_ms += dt;
    if world.fire_timer_ms > FIRE_INTERVAL_MS {
        world.bullets.push(Bullet::at_muzzle(&world.player));
        world.fire_timer_ms = 0.0;
    }
}

/// Bullets fly straight up; gone once the bottom edge clears the top.
fn advance_bullets(world: &mut World) {
    let mut i = world.bullets.len();
    while i > 0 {
        i -= 1;
        let bullet = &mut world.bullets[i];
        bullet.pos.y -= bullet.speed;
        if bullet.pos.y + bullet.height < 0.0 {
            world.bullets.remove(i);
        }
    }
}

/// Integrate and resolve every enemy. Returns `true` if the player was
/// hit, which ends the session and halts the rest of the frame.
///
/// Each enemy gets exactly one collision response per frame: bottom
/// exit, player overlap, or at most one consumed bullet.
fn resolve_enemies(world: &mut World, events: &mut Vec<GameEvent>) -> bool {
    let player_box = world.player.aabb();

    let mut i = world.enemies.len();
    while i > 0 {
        i -= 1;

        let off_bottom = {
            let enemy = &mut world.enemies[i];
            enemy.pos.y += enemy.speed;
            enemy.rotation += enemy.rotation_speed;
            enemy.pos.y > FIELD_HEIGHT
        };
        if off_bottom {
            world.enemies.remove(i);
            continue;
        }

        if overlaps(&world.enemies[i].aabb(), &player_box) {
            let origin = world.player.center();
            let size = world.player.width * PLAYER_EXPLOSION_SCALE;
            spawn_explosion(world, origin, size);
            world.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver { score: world.score });
            log::info!("game over, final score {}", world.score);
            return true;
        }

        // Newest bullet first; the first overlap wins and the rest of
        // the bullets stay available to other enemies this frame.
        let enemy_box = world.enemies[i].aabb();
        let mut j = world.bullets.len();
        while j > 0 {
            j -= 1;
            if !overlaps(&world.bullets[j].aabb(), &enemy_box) {
                continue;
            }

            let bullet = world.bullets.remove(j);
            spawn_explosion(world, bullet.center(), HIT_EXPLOSION_SIZE);

            let destroyed = {
                let enemy = &mut world.enemies[i];
                enemy.health = enemy.health.saturating_sub(1);
                enemy.health == 0
            };
            if destroyed {
                let enemy = world.enemies.remove(i);
                spawn_explosion(world, enemy.center(), enemy.size * DESTROY_EXPLOSION_SCALE);
                let points = enemy.kind.points();
                world.score += points;
                events.push(GameEvent::EnemyDestroyed {
                    kind: enemy.kind,
                    points,
                });
                log::debug!("destroyed {:?} (+{points})", enemy.kind);
            }
            break;
        }
    }

    false
}

/// Every explosion triggers shake scaled to its footprint.
fn spawn_explosion(world: &mut World, origin: Vec2, size: f32) {
    world.shake.trigger(Explosion::shake_intensity(size));
    world
        .explosions
        .push(Explosion::spawn(origin, size, &mut world.rng));
}

/// Age explosions and drop the fully faded ones with their particles.
fn advance_explosions(world: &mut World) {
    let mut i = world.explosions.len();
    while i > 0 {
        i -= 1;
        if !world.explosions[i].tick() {
            world.explosions.remove(i);
        }
    }
}

/// Stars drift with elapsed time and wrap to a fresh column at the top.
fn drift_stars(world: &mut World, dt: f32) {
    use rand::Rng;

    let World { stars, rng, .. } = world;
    for star in stars.iter_mut() {
        star.pos.y += star.speed * dt / 16.0;
        if star.pos.y > FIELD_HEIGHT {
            star.pos.y = 0.0;
            star.pos.x = rng.random_range(0.0..FIELD_WIDTH);
        }
    }
}
