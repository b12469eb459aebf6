//! Input sources
//!
//! A source is polled once at the start of every tick. Held controls are
//! reported every tick they are down; `fire`, `confirm` and `quit` are
//! reported only on the tick they happen.

use std::collections::VecDeque;

use crate::sim::{GamePhase, GameState, TickInput};
use crate::vector_to_heading;

/// Produces the controls for the next tick
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> TickInput;
}

/// Replays a fixed sequence of inputs, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }

    /// Queue `input` for the next `ticks` ticks
    pub fn hold(mut self, input: TickInput, ticks: usize) -> Self {
        self.queue.extend(std::iter::repeat_n(input, ticks));
        self
    }

    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> TickInput {
        self.queue.pop_front().unwrap_or_default()
    }
}

/// Ticks between autopilot shots
const FIRE_INTERVAL: u32 = 8;
/// Heading error (degrees) within which the autopilot turns no further
const AIM_DEADZONE: f32 = 2.5;
/// Heading error (degrees) within which the autopilot shoots
const FIRE_CONE: f32 = 10.0;
/// Cruise speed the autopilot holds
const CRUISE_SPEED: f32 = 1.5;

/// Demo player: turns toward the nearest asteroid and shoots when lined up.
///
/// On game over it waits a moment, then restarts until it has played
/// `games` sessions, after which it quits.
#[derive(Debug, Clone)]
pub struct Autopilot {
    games_left: u32,
    fire_cooldown: u32,
    game_over_ticks: u32,
    restart_delay: u32,
}

impl Autopilot {
    pub fn new(games: u32, restart_delay: u32) -> Self {
        Self {
            games_left: games.max(1),
            fire_cooldown: 0,
            game_over_ticks: 0,
            restart_delay,
        }
    }

    fn game_over(&mut self) -> TickInput {
        self.game_over_ticks += 1;
        if self.game_over_ticks < self.restart_delay {
            return TickInput::default();
        }
        self.game_over_ticks = 0;
        self.games_left = self.games_left.saturating_sub(1);
        if self.games_left == 0 {
            TickInput {
                quit: true,
                ..Default::default()
            }
        } else {
            TickInput {
                confirm: true,
                ..Default::default()
            }
        }
    }

    fn fly(&mut self, state: &GameState) -> TickInput {
        let ship = &state.ship;
        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);

        let Some(target) = state.asteroids.iter().min_by(|a, b| {
            a.pos
                .distance_squared(ship.pos)
                .total_cmp(&b.pos.distance_squared(ship.pos))
        }) else {
            return TickInput {
                throttle_down: true,
                ..Default::default()
            };
        };

        let desired = vector_to_heading(target.pos - ship.pos);
        let mut error = (desired - ship.angle).rem_euclid(360.0);
        if error > 180.0 {
            error -= 360.0;
        }

        let fire = error.abs() < FIRE_CONE && self.fire_cooldown == 0;
        if fire {
            self.fire_cooldown = FIRE_INTERVAL;
        }

        TickInput {
            rotate_left: error < -AIM_DEADZONE,
            rotate_right: error > AIM_DEADZONE,
            throttle_up: ship.speed < CRUISE_SPEED,
            throttle_down: ship.speed > CRUISE_SPEED,
            fire,
            ..Default::default()
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        match state.phase {
            GamePhase::GameOver => self.game_over(),
            GamePhase::Playing | GamePhase::Exploding => {
                self.game_over_ticks = 0;
                self.fly(state)
            }
        }
    }
}
