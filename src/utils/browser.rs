//! Browser launching utilities for localplay
//!
//! This module opens the system default browser at the player URL.
//! Launching is best-effort: the server keeps running either way.

use log::{debug, warn};

/// Opens the system default browser at the given URL
///
/// # Arguments
/// * `url` - The URL to open
pub fn open_in_browser(url: &str) {
    match open::that(url) {
        Ok(()) => debug!("Opened default browser at {url}"),
        Err(err) => warn!("Failed to open browser at {url}: {err}"),
    }
}
