//! localplay
//!
//! Play a local media file in your browser: localplay starts a small HTTP
//! server on localhost, serves a player page for a single media file, and
//! opens your default browser pointed at it. The media route supports HTTP
//! byte-range requests so the browser can seek.

pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod player;
pub mod utils;

// Re-export main types for library consumers
pub use cli::Cli;
pub use config::Config;
pub use error::{Error, Result};
pub use media::{ByteRange, MediaStreamingServer, RangeOutcome, ServedResource, resolve_range};
