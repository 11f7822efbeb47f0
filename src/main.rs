//! Starfall entry point
//!
//! Headless demo: a fixed-tick frame driver runs the simulation with a
//! small autopilot at the stick, restarts across a few rounds, and
//! prints the session leaderboard. Usage:
//!
//! ```text
//! starfall [seed] [rounds]
//! ```

use glam::Vec2;

use starfall::consts::*;
use starfall::sim::{
    Action, DrawTarget, GameEvent, GamePhase, InputState, Sprite, World, present, step,
};
use starfall::{HighScores, Settings};

/// Demo frame cadence (~60 Hz)
const FRAME_MS: f32 = 16.0;
/// Hard stop per round, in case the autopilot turns out to be good
const MAX_ROUND_STEPS: u32 = 30_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    let rounds: u32 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(3);

    let settings = Settings::load();
    let mut scores = HighScores::new();
    let mut world = World::new(seed);
    log::info!("starfall demo: seed {seed}, {rounds} round(s)");

    for round in 1..=rounds {
        let steps = run_round(&mut world, &settings);
        let secs = steps as f32 * FRAME_MS / 1000.0;
        println!("round {round}: score {} after {secs:.1}s", world.score);

        let mut tally = SpriteTally::default();
        present(&world, &mut tally);
        log::debug!(
            "final frame: {} enemies, {} explosions on screen",
            tally.enemies,
            tally.explosions
        );

        scores.add_score(world.score, seed);
        world.restart();
    }

    if let Some(best) = scores.top_score() {
        println!("session best: {best}");
    }
}

/// Drive one round to GameOver (or the step cap) and return the number
/// of steps taken.
fn run_round(world: &mut World, settings: &Settings) -> u32 {
    let mut input = InputState::new();
    let mut steps = 0;

    while world.phase == GamePhase::Playing && steps < MAX_ROUND_STEPS {
        autopilot(world, &mut input);
        let result = step(world, &input, FRAME_MS);

        for event in &result.events {
            if let GameEvent::GameOver { score } = event {
                log::info!("round ended at {score}");
            }
        }
        if settings.effective_screen_shake() && result.shake_offset != Vec2::ZERO {
            log::trace!("shake offset {:?}", result.shake_offset);
        }
        steps += 1;
    }

    steps
}

/// Attract-mode pilot: line up under the lowest enemy and hold fire,
/// but sidestep once it gets close enough to be a threat.
fn autopilot(world: &World, input: &mut InputState) {
    input.clear();
    input.set(Action::Fire, true);

    let player_center = world.player.pos.x + world.player.width / 2.0;
    let Some(threat) = world
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    else {
        return;
    };

    let target = threat.pos.x + threat.size / 2.0;
    let closing_in = threat.pos.y + threat.size > world.player.pos.y - 120.0;

    if closing_in {
        if target > player_center {
            input.set(Action::MoveLeft, true);
        } else {
            input.set(Action::MoveRight, true);
        }
    } else if (target - player_center).abs() > PLAYER_STEP {
        if target < player_center {
            input.set(Action::MoveLeft, true);
        } else {
            input.set(Action::MoveRight, true);
        }
    }
}

/// Draw target that just counts what a renderer would be handed.
#[derive(Default)]
struct SpriteTally {
    enemies: u32,
    explosions: u32,
}

impl DrawTarget for SpriteTally {
    fn player_ship(&mut self, _sprite: &Sprite) {}
    fn asteroid(&mut self, _sprite: &Sprite) {
        self.enemies += 1;
    }
    fn planet(&mut self, _sprite: &Sprite) {
        self.enemies += 1;
    }
    fn bullet(&mut self, _sprite: &Sprite) {}
    fn explosion(&mut self, _sprite: &Sprite) {
        self.explosions += 1;
    }
}
