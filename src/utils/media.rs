//! Media file utilities for localplay
//!
//! This module provides functions for working with media files,
//! including content-type lookup and display naming.

use crate::config::{FALLBACK_MIME_TYPE, MIME_TYPES};
use std::path::Path;

/// Looks up the HTTP content type for a media file
///
/// The lookup is case-insensitive on the file extension. Files with no
/// extension or an extension outside the table get the generic fallback.
///
/// # Arguments
/// * `path` - Path to the media file
///
/// # Returns
/// Returns the content type string to serve the file with
pub fn mime_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    MIME_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .unwrap_or(FALLBACK_MIME_TYPE)
}

/// Derives the display name of a media file
///
/// # Arguments
/// * `path` - Path to the media file
///
/// # Returns
/// Returns the final path component, falling back to the full path display
pub fn file_display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
