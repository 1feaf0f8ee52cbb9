//! Configuration constants for localplay
//!
//! This module contains all hardcoded constants used throughout the application,
//! organized by functionality and following Rust naming conventions.

// =============================================================================
// Network and Streaming Constants
// =============================================================================

/// Default port for the local player server
pub const DEFAULT_PORT: u16 = 9876;

/// Route serving the media bytes to the player page
pub const AUDIO_ROUTE: &str = "/audio";

/// Server header value stamped on every HTTP response
pub const USER_AGENT: &str = concat!("localplay/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Playback Constants
// =============================================================================

/// Default playback speed multiplier
pub const DEFAULT_PLAYBACK_SPEED: f64 = 1.0;

// =============================================================================
// Media Type Constants
// =============================================================================

/// Mapping from lowercase file extension to HTTP content type
pub const MIME_TYPES: &[(&str, &str)] = &[
    ("mp3", "audio/mpeg"),
    ("m4a", "audio/mp4"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("flac", "audio/flac"),
    ("aac", "audio/aac"),
    ("wma", "audio/x-ms-wma"),
    ("opus", "audio/opus"),
    ("webm", "audio/webm"),
    ("mp4", "video/mp4"),
    ("mkv", "video/x-matroska"),
    ("mov", "video/quicktime"),
];

/// Content type served when the file extension is not in [`MIME_TYPES`]
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

// =============================================================================
// Logging Constants
// =============================================================================

/// Environment variable name for custom log level
pub const LOG_LEVEL_ENV_VAR: &str = "LOCALPLAY_LOG";

// =============================================================================
// Error and Status Messages
// =============================================================================

/// Body returned for requests outside the three known routes
pub const NOT_FOUND_BODY: &str = "Not found";
