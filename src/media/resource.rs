//! Served media resource for localplay
//!
//! This module models the single file the player exposes for the lifetime
//! of the process: its canonical path, display name, and content type.

use crate::{
    error::{Error, Result},
    utils::{file_display_name, mime_type_for_path},
};
use std::path::{Path, PathBuf};

/// The media file served by the player for the duration of the run
///
/// The path and content type are fixed at startup; the byte size is read
/// from the filesystem per request.
#[derive(Debug, Clone)]
pub struct ServedResource {
    file_path: PathBuf,
    display_name: String,
    mime_type: &'static str,
}

impl std::fmt::Display for ServedResource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "'{}' ({})",
            self.file_path.display(),
            self.mime_type,
        )
    }
}

impl ServedResource {
    /// Creates a served resource from a file path
    ///
    /// The path must exist; it is resolved to an absolute path and the
    /// content type is derived once from its extension.
    pub fn new(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::MediaFileNotFound {
                path: path.display().to_string(),
                context: "Media file does not exist or is not accessible".to_string(),
            });
        }

        let file_path = path
            .canonicalize()
            .map_err(|err| Error::MediaFileNotFound {
                path: path.display().to_string(),
                context: format!("Failed to resolve path: {err}"),
            })?;

        let display_name = file_display_name(&file_path);
        let mime_type = mime_type_for_path(&file_path);

        Ok(Self {
            file_path,
            display_name,
            mime_type,
        })
    }

    /// Gets the resolved file path
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Gets the display name shown in the player page
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Gets the HTTP content type the file is served with
    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// Reads the current byte size of the file from the filesystem
    pub async fn byte_size(&self) -> std::io::Result<u64> {
        let metadata = tokio::fs::metadata(&self.file_path).await?;
        Ok(metadata.len())
    }
}
