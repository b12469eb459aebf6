//! Rock Split - an Asteroids-style arcade simulation core
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, splitting, session state machine)
//! - `renderer`: Draw list generation and the renderer boundary
//! - `platform`: Input sources and frame pacing
//! - `settings`: Runtime configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::GameConfig;

use glam::Vec2;

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Simulation ticks per second (one tick per rendered frame)
    pub const TICK_RATE: u32 = 60;

    /// Lives at session start
    pub const STARTING_LIVES: u8 = 3;
    /// Seconds the ship stays exploded before respawn or game over
    pub const EXPLOSION_DWELL_SECS: f32 = 2.0;
    /// Particles spawned when the ship explodes
    pub const EXPLOSION_PARTICLES: usize = 20;

    /// Ship handling
    pub const SHIP_TURN_DEGREES: f32 = 5.0;
    pub const SHIP_THROTTLE_STEP: f32 = 0.1;
    pub const SHIP_MAX_SPEED: f32 = 5.0;

    /// Missile speed (units per tick)
    pub const MISSILE_SPEED: f32 = 10.0;

    /// Asteroid field
    pub const INITIAL_ASTEROIDS: usize = 5;
    pub const ASTEROID_MIN_SPAWN_SIZE: u32 = 20;
    pub const ASTEROID_MAX_SPAWN_SIZE: u32 = 50; // exclusive
    pub const ASTEROID_MIN_SIZE: u32 = 1;
    /// Asteroids at or below this size are destroyed without splitting
    pub const SPLIT_MIN_SIZE: u32 = 10;
    pub const SPLIT_CHILDREN: usize = 3;
    pub const SPLIT_JITTER: f32 = 20.0;

    /// Points per asteroid destroyed
    pub const SCORE_PER_ASTEROID: u64 = 10;

    /// Asteroids this close to the respawn point are cleared
    pub const RESPAWN_CLEAR_RADIUS: f32 = 100.0;

    /// Particle lifetime (doubles as the fading colour channel)
    pub const PARTICLE_LIFETIME: i32 = 255;
    pub const PARTICLE_DECAY: i32 = 3;
}

/// Unit direction for a heading in degrees (0 = up, clockwise positive).
///
/// Screen space has y pointing down, so "up" is negative y.
#[inline]
pub fn heading_to_vector(angle_degrees: f32) -> Vec2 {
    let rad = angle_degrees.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

/// Heading in degrees [0, 360) pointing along `dir`
#[inline]
pub fn vector_to_heading(dir: Vec2) -> f32 {
    dir.x.atan2(-dir.y).to_degrees().rem_euclid(360.0)
}

/// Wrap a coordinate into [0, max)
#[inline]
pub fn wrap(value: f32, max: f32) -> f32 {
    let wrapped = value.rem_euclid(max);
    // rem_euclid can round up to `max` for tiny negative inputs
    if wrapped >= max { 0.0 } else { wrapped }
}

/// Wrap a position onto the screen torus
#[inline]
pub fn wrap_position(pos: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(wrap(pos.x, bounds.x), wrap(pos.y, bounds.y))
}

/// Rotate local-space points by `angle_degrees` (clockwise on screen) and
/// translate them to `origin`
pub fn rotate_points<const N: usize>(
    points: &[Vec2; N],
    angle_degrees: f32,
    origin: Vec2,
) -> [Vec2; N] {
    let rotation = Vec2::from_angle(angle_degrees.to_radians());
    (*points).map(|p| origin + rotation.rotate(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_heading_to_vector_cardinals() {
        assert!(approx(heading_to_vector(0.0), Vec2::new(0.0, -1.0)));
        assert!(approx(heading_to_vector(90.0), Vec2::new(1.0, 0.0)));
        assert!(approx(heading_to_vector(180.0), Vec2::new(0.0, 1.0)));
        assert!(approx(heading_to_vector(270.0), Vec2::new(-1.0, 0.0)));
        // Unbounded angles wrap through trig periodicity
        assert!(approx(heading_to_vector(-90.0), heading_to_vector(270.0)));
        assert!(approx(heading_to_vector(720.0), heading_to_vector(0.0)));
    }

    #[test]
    fn test_vector_to_heading_inverts_heading_to_vector() {
        for angle in [0.0, 45.0, 90.0, 135.0, 200.0, 359.0] {
            let back = vector_to_heading(heading_to_vector(angle));
            assert!((back - angle).abs() < 1e-3, "{angle} -> {back}");
        }
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(10.0, 800.0), 10.0);
        assert_eq!(wrap(800.0, 800.0), 0.0);
        assert_eq!(wrap(805.0, 800.0), 5.0);
        assert_eq!(wrap(-5.0, 800.0), 795.0);
        assert!(wrap(-1e-9, 800.0) < 800.0);
    }

    #[test]
    fn test_rotate_points_matches_heading() {
        // The nose of a ship pointing up must follow heading_to_vector
        let nose = [Vec2::new(0.0, -10.0)];
        for angle in [0.0, 30.0, 90.0, 250.0] {
            let [rotated] = rotate_points(&nose, angle, Vec2::new(100.0, 100.0));
            let expected = Vec2::new(100.0, 100.0) + heading_to_vector(angle) * 10.0;
            assert!(approx(rotated, expected), "angle {angle}");
        }
    }
}
