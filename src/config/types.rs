//! Configuration types for localplay
//!
//! This module contains configuration structures and related types
//! used throughout the application.

use log::LevelFilter;

use super::constants::*;

/// Configuration for the application
///
/// Built once at startup from CLI arguments and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the local player server
    pub port: u16,
    /// Playback speed multiplier applied by the player page
    pub playback_speed: f64,
    /// Log level
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            playback_speed: DEFAULT_PLAYBACK_SPEED,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the playback speed multiplier
    pub fn with_playback_speed(mut self, speed: f64) -> Self {
        self.playback_speed = speed;
        self
    }

    /// Sets the log level
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.playback_speed, DEFAULT_PLAYBACK_SPEED);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_port(8080)
            .with_playback_speed(1.5)
            .with_log_level(LevelFilter::Debug);

        assert_eq!(config.port, 8080);
        assert_eq!(config.playback_speed, 1.5);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_PORT, 9876);
        assert_eq!(DEFAULT_PLAYBACK_SPEED, 1.0);
        assert_eq!(LOG_LEVEL_ENV_VAR, "LOCALPLAY_LOG");
    }
}
