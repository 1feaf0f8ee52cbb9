//! Media handling and streaming for localplay
//!
//! This module provides the media functionality of the player:
//! - The served media resource and its content type
//! - HTTP byte-range parsing and resolution
//! - The local HTTP server driving the browser player

pub mod range;
pub mod resource;
pub mod streaming;

// Re-export main types and functions
pub use range::{ByteRange, RangeOutcome, resolve_range};
pub use resource::ServedResource;
pub use streaming::MediaStreamingServer;
