//! Runtime game configuration
//!
//! Every field defaults to the matching constant in [`crate::consts`]. A JSON
//! file only needs the keys it wants to override.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Screen size and tuning knobs handed to the session at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub width: f32,
    pub height: f32,
    /// Ticks per second; also the frame rate of the outer loop
    pub tick_rate: u32,

    // === Session ===
    pub starting_lives: u8,
    pub explosion_dwell_secs: f32,
    pub explosion_particles: usize,
    pub initial_asteroids: usize,
    pub respawn_clear_radius: f32,

    // === Handling ===
    pub missile_speed: f32,
    pub ship_max_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,

            starting_lives: STARTING_LIVES,
            explosion_dwell_secs: EXPLOSION_DWELL_SECS,
            explosion_particles: EXPLOSION_PARTICLES,
            initial_asteroids: INITIAL_ASTEROIDS,
            respawn_clear_radius: RESPAWN_CLEAR_RADIUS,

            missile_speed: MISSILE_SPEED,
            ship_max_speed: SHIP_MAX_SPEED,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |field: &'static str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        };
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("explosion_dwell_secs", self.explosion_dwell_secs)?;
        positive("missile_speed", self.missile_speed)?;
        positive("ship_max_speed", self.ship_max_speed)?;

        if !self.respawn_clear_radius.is_finite() || self.respawn_clear_radius < 0.0 {
            return Err(ConfigError::Invalid {
                field: "respawn_clear_radius",
                reason: "must be zero or a positive finite number",
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_rate",
                reason: "must be at least 1",
            });
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid {
                field: "starting_lives",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Screen size as a vector
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Screen centre (ship spawn point)
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds() / 2.0
    }

    /// Explosion dwell time in ticks
    pub fn dwell_ticks(&self) -> u64 {
        (self.explosion_dwell_secs * self.tick_rate as f32).round().max(1.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bounds(), Vec2::new(800.0, 600.0));
        assert_eq!(config.center(), Vec2::new(400.0, 300.0));
        assert_eq!(config.dwell_ticks(), 120);
    }

    #[test]
    fn test_partial_json_overrides_only_given_keys() {
        let config = GameConfig::from_json(r#"{ "starting_lives": 5, "width": 1024 }"#).unwrap();
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.width, 1024.0);
        assert_eq!(config.height, SCREEN_HEIGHT);
        assert_eq!(config.missile_speed, MISSILE_SPEED);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameConfig::from_json(r#"{ "starting_lives": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "starting_lives", .. }));

        let err = GameConfig::from_json(r#"{ "height": -10 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "height", .. }));

        let err = GameConfig::from_json(r#"{ "tick_rate": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "tick_rate", .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid config JSON"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
