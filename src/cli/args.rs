//! CLI argument parsing for localplay
//!
//! This module contains the CLI argument definitions and parsing logic
//! using the clap crate.

use crate::config::{Config, DEFAULT_PLAYBACK_SPEED, DEFAULT_PORT};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Play a local media file in your browser
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The media file to play
    pub file: PathBuf,

    /// Playback speed multiplier
    #[arg(short, long, default_value_t = DEFAULT_PLAYBACK_SPEED)]
    pub speed: f64,

    /// The port to be used to host and serve the player
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level
    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Build a Config from CLI arguments
    pub fn build_config(&self) -> Config {
        Config::new()
            .with_port(self.port)
            .with_playback_speed(self.speed)
            .with_log_level(self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["localplay", "song.mp3"]);
        assert_eq!(cli.file, PathBuf::from("song.mp3"));
        assert_eq!(cli.speed, DEFAULT_PLAYBACK_SPEED);
        assert_eq!(cli.port, DEFAULT_PORT);
    }

    #[test]
    fn test_flags_build_config() {
        let cli = Cli::parse_from(["localplay", "song.mp3", "-s", "1.5", "-p", "8080"]);
        let config = cli.build_config();
        assert_eq!(config.playback_speed, 1.5);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_file_argument_is_required() {
        assert!(Cli::try_parse_from(["localplay"]).is_err());
    }
}
