//! CLI for localplay
//!
//! This module wires the parsed arguments into the player: it builds the
//! run configuration, initializes logging, validates the media file, and
//! runs the server until interrupted.

mod args;

pub use args::Cli;

use crate::{
    config::{Config, LOG_LEVEL_ENV_VAR},
    error::Result,
    media::{MediaStreamingServer, ServedResource},
};
use log::info;

/// Runs the player for the parsed CLI arguments
pub async fn run(cli: &Cli) -> Result<()> {
    let config = cli.build_config();
    setup_log(&config);

    let resource = ServedResource::new(&cli.file)?;
    info!(
        "Playing '{}' @ {}x",
        resource.display_name(),
        config.playback_speed
    );

    let server = MediaStreamingServer::new(resource, &config)?;
    server.run().await
}

/// Setup logging configuration
fn setup_log(config: &Config) {
    use log::LevelFilter;
    use simple_logger::SimpleLogger;
    use std::env;

    let log_level = if let Ok(localplay_log) = env::var(LOG_LEVEL_ENV_VAR) {
        match localplay_log.as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => config.log_level,
        }
    } else {
        config.log_level
    };

    SimpleLogger::new()
        .with_level(log_level)
        .init()
        .unwrap_or_else(|_| eprintln!("Warning: Logger already initialized"));
}
