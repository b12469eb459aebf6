//! Simulation module
//!
//! All gameplay logic lives here:
//! - One tick per frame, no wall-clock time
//! - Randomness only from the session's injected RNG
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, MissileHit, missile_asteroid_hits, ship_asteroid_hit};
pub use spawn::{clear_zone, initial_population, split};
pub use state::{
    Asteroid, AsteroidSpawn, Explosion, GameEvent, GamePhase, GameState, Missile, Particle, Ship,
    Throttle, Turn, OUTLINE_POINTS, SHIP_OUTLINE,
};
pub use tick::{TickInput, tick};
