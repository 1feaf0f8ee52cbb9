use std::fmt;

/// Errors that can happen inside localplay
///
/// All variants are fatal startup conditions; per-request conditions
/// (malformed range headers, unknown routes) are resolved inside the
/// request/response cycle and never surface here.
#[derive(Debug)]
pub enum Error {
    /// Media file does not exist or is not accessible
    MediaFileNotFound {
        /// Path to the missing file
        path: String,
        /// Additional context about the file access attempt
        context: String,
    },
    /// Failed to bind the player server to its listening address
    ServerBindFailed {
        /// The address that could not be bound
        address: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
    /// The player server failed while serving requests
    ServerError {
        /// The underlying I/O error
        source: std::io::Error,
        /// Additional context about the failure
        context: String,
    },
    /// Template rendering encountered an error
    TemplateRenderError {
        /// The name of the template that failed to render
        template_name: String,
        /// The underlying template error
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MediaFileNotFound { path, context } => {
                write!(f, "Media file '{path}' not found: {context}")
            }
            Error::ServerBindFailed { address, source } => {
                write!(f, "Failed to bind server to '{address}': {source}")
            }
            Error::ServerError { source, context } => {
                write!(f, "Player server error: {source} ({context})")
            }
            Error::TemplateRenderError {
                template_name,
                source,
            } => {
                write!(f, "Failed to render template '{template_name}': {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ServerBindFailed { source, .. } => Some(source),
            Error::ServerError { source, .. } => Some(source),
            Error::TemplateRenderError { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_media_file_not_found_display() {
        let error = Error::MediaFileNotFound {
            path: "/tmp/missing.mp3".to_string(),
            context: "test context".to_string(),
        };
        assert!(error.to_string().contains("Media file"));
        assert!(error.to_string().contains("/tmp/missing.mp3"));
        assert!(error.to_string().contains("test context"));
    }

    #[test]
    fn test_server_bind_failed_display() {
        let error = Error::ServerBindFailed {
            address: "127.0.0.1:9876".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        };
        assert!(error.to_string().contains("Failed to bind server"));
        assert!(error.to_string().contains("127.0.0.1:9876"));
    }

    #[test]
    fn test_template_render_error_display() {
        let error = Error::TemplateRenderError {
            template_name: "player.html".to_string(),
            source: "boom".into(),
        };
        assert!(error.to_string().contains("player.html"));
        assert!(error.to_string().contains("boom"));
    }

    #[test]
    fn test_error_source() {
        let error = Error::ServerBindFailed {
            address: "127.0.0.1:9876".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        };
        assert!(StdError::source(&error).is_some());

        let error = Error::MediaFileNotFound {
            path: "x".to_string(),
            context: "y".to_string(),
        };
        assert!(StdError::source(&error).is_none());
    }
}
