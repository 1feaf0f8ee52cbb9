//! Configuration module for localplay
//!
//! This module provides configuration constants, default values, and configuration types
//! for the localplay media player.

mod constants;
mod types;

// Re-export all constants and types
pub use constants::*;
pub use types::*;
