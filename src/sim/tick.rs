//! Fixed timestep simulation tick
//!
//! Advances the session one frame and drives the phase state machine.

use std::ops::ControlFlow;

use super::collision::{missile_asteroid_hits, ship_asteroid_hit};
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState, Throttle, Turn};
use crate::consts::SCORE_PER_ASTEROID;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held controls
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub throttle_up: bool,
    pub throttle_down: bool,
    /// One-shot: launch a missile
    pub fire: bool,
    /// One-shot, game over only: start a new session
    pub confirm: bool,
    /// One-shot, game over only: leave the game
    pub quit: bool,
}

impl TickInput {
    pub fn turn(&self) -> Turn {
        match (self.rotate_left, self.rotate_right) {
            (true, false) => Turn::Left,
            (false, true) => Turn::Right,
            _ => Turn::Straight,
        }
    }

    pub fn throttle(&self) -> Throttle {
        match (self.throttle_up, self.throttle_down) {
            (true, false) => Throttle::Up,
            (false, true) => Throttle::Down,
            _ => Throttle::Hold,
        }
    }
}

/// Advance the session by one tick.
///
/// Returns `Break` when the player quits from the game over screen.
pub fn tick(state: &mut GameState, input: &TickInput) -> ControlFlow<()> {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        if input.quit {
            log::info!("Quit with final score {}", state.score);
            return ControlFlow::Break(());
        }
        if input.confirm {
            state.restart();
        }
        return ControlFlow::Continue(());
    }

    state.time_ticks += 1;
    let bounds = state.bounds();

    // Controls. Firing still works while the ship is exploding.
    if !state.ship.is_exploding() {
        state.ship.rotate(input.turn());
        state.ship.apply_throttle(input.throttle());
    }
    if input.fire {
        state.fire();
    }

    state.ship.advance(bounds);

    for missile in state.missiles.iter_mut() {
        missile.advance();
    }
    state.missiles.retain(|m| m.in_bounds(bounds));

    resolve_missile_hits(state);

    for asteroid in state.asteroids.iter_mut() {
        asteroid.advance(bounds);
    }

    let crashed = ship_asteroid_hit(&state.ship, &state.asteroids).is_some();
    update_phase(state, crashed);

    ControlFlow::Continue(())
}

/// Remove struck missiles and asteroids, score them and split the parents
fn resolve_missile_hits(state: &mut GameState) {
    let hits = missile_asteroid_hits(&state.missiles, &state.asteroids);
    if hits.is_empty() {
        return;
    }

    let mut missile_idx: Vec<usize> = hits.iter().map(|h| h.missile).collect();
    let mut asteroid_idx: Vec<usize> = hits.iter().map(|h| h.asteroid).collect();
    missile_idx.sort_unstable();
    asteroid_idx.sort_unstable();

    for &i in missile_idx.iter().rev() {
        state.missiles.remove(i);
    }

    let bounds = state.bounds();
    let mut children = Vec::new();
    for &i in asteroid_idx.iter().rev() {
        let parent = state.asteroids.remove(i);
        let pieces = spawn::split(&parent, bounds, &mut state.rng);
        state.score += SCORE_PER_ASTEROID;
        log::debug!(
            "Asteroid size {} destroyed at ({:.0}, {:.0}), {} pieces",
            parent.size,
            parent.pos.x,
            parent.pos.y,
            pieces.len()
        );
        state.events.push(GameEvent::AsteroidDestroyed {
            pos: parent.pos,
            size: parent.size,
            children: pieces.len(),
        });
        children.extend(pieces);
    }
    state.asteroids.extend(children);
}

/// The phase transition function
fn update_phase(state: &mut GameState, crashed: bool) {
    state.phase = match state.phase {
        GamePhase::Playing if crashed => {
            let count = state.config.explosion_particles;
            state.ship.start_explosion(state.time_ticks, count, &mut state.rng);
            state.events.push(GameEvent::ShipDestroyed { pos: state.ship.pos });
            log::info!("Ship destroyed, {} lives left before respawn", state.lives);
            GamePhase::Exploding
        }
        GamePhase::Exploding if dwell_elapsed(state) => {
            state.lives = state.lives.saturating_sub(1);
            if state.lives > 0 {
                let center = state.config.center();
                state.ship.respawn(center);
                let cleared = spawn::clear_zone(
                    &mut state.asteroids,
                    state.ship.pos,
                    state.config.respawn_clear_radius,
                );
                state.events.push(GameEvent::ShipRespawned { cleared });
                log::info!("Ship respawned ({} lives, {cleared} asteroids cleared)", state.lives);
                GamePhase::Playing
            } else {
                state.events.push(GameEvent::GameOver { score: state.score });
                log::info!("Game over, final score {}", state.score);
                GamePhase::GameOver
            }
        }
        phase => phase,
    };
}

fn dwell_elapsed(state: &GameState) -> bool {
    state
        .ship
        .explosion_elapsed(state.time_ticks)
        .is_some_and(|elapsed| elapsed >= state.config.dwell_ticks())
}
