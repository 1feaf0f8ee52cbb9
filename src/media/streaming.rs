//! Media streaming server for localplay
//!
//! This module serves the browser player over HTTP: the player page at the
//! root, the media bytes (with partial-content support) at the audio route,
//! and a plain 404 for everything else.

use crate::{
    config::{AUDIO_ROUTE, Config, NOT_FOUND_BODY, USER_AGENT},
    error::{Error, Result},
    media::{
        range::{ByteRange, RangeOutcome, resolve_range, unsatisfiable_content_range},
        resource::ServedResource,
    },
    player::render_player_page,
    utils::open_in_browser,
};
use axum::{
    Router,
    body::Body,
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use http::{HeaderMap, HeaderValue, StatusCode, header};
use log::{debug, info, warn};
use std::{io::SeekFrom, net::SocketAddr, sync::Arc};
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;
use tower_http::set_header::SetResponseHeaderLayer;

/// Shared request state: the served file plus the pre-rendered player page
#[derive(Debug)]
struct AppState {
    resource: ServedResource,
    player_page: String,
}

/// The local player server
///
/// Serves exactly three routes on the configured port and shuts down
/// when the process receives an interrupt signal.
#[derive(Debug)]
pub struct MediaStreamingServer {
    resource: ServedResource,
    server_addr: SocketAddr,
    player_page: String,
}

impl std::fmt::Display for MediaStreamingServer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} @ http://{}", self.resource, self.server_addr)
    }
}

impl MediaStreamingServer {
    /// Creates a new player server for the given resource
    ///
    /// The player page is rendered here, once; rendering failure is fatal.
    pub fn new(resource: ServedResource, config: &Config) -> Result<Self> {
        let server_addr = SocketAddr::from(([127, 0, 0, 1], config.port));
        let player_page = render_player_page(&resource, config)?;

        debug!("Player server address: {server_addr}");

        Ok(Self {
            resource,
            server_addr,
            player_page,
        })
    }

    /// Gets the address the server listens on
    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Gets the URL of the player page
    pub fn root_url(&self) -> String {
        format!("http://{}", self.server_addr)
    }

    /// Builds the player routes
    fn router(&self) -> Router {
        let state = Arc::new(AppState {
            resource: self.resource.clone(),
            player_page: self.player_page.clone(),
        });

        Router::new()
            .route("/", get(player_page))
            .route(AUDIO_ROUTE, get(serve_audio))
            .fallback(not_found)
            .layer(SetResponseHeaderLayer::overriding(
                header::SERVER,
                HeaderValue::from_static(USER_AGENT),
            ))
            .with_state(state)
    }

    /// Starts the player server and opens the browser at the player page
    ///
    /// Runs until the process receives an interrupt signal, then stops
    /// accepting connections and returns.
    pub async fn run(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.server_addr)
            .await
            .map_err(|source| Error::ServerBindFailed {
                address: self.server_addr.to_string(),
                source,
            })?;

        let url = self.root_url();
        info!("Player available at {url}");
        info!("Press Ctrl+C to stop");
        open_in_browser(&url);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|source| Error::ServerError {
                source,
                context: "Player server stopped unexpectedly".to_string(),
            })
    }
}

/// Waits for an interrupt signal (Ctrl+C, or SIGTERM on unix)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .unwrap_or_else(|err| eprintln!("Failed to install Ctrl+C handler: {err}"));
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => eprintln!("Failed to install signal handler: {err}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}

/// Serves the pre-rendered player page
async fn player_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.player_page.clone())
}

/// Serves the media bytes, honoring single byte-range requests
async fn serve_audio(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let resource = &state.resource;

    let size = match resource.byte_size().await {
        Ok(size) => size,
        Err(err) => return io_failure_response(&err),
    };

    let range_header = headers
        .get(header::RANGE)
        .and_then(|value| value.to_str().ok());

    match resolve_range(range_header, size) {
        RangeOutcome::Full => full_response(resource, size).await,
        RangeOutcome::Partial(range) => {
            debug!(
                "Serving bytes {}-{} of {} ({} bytes)",
                range.start,
                range.end,
                resource.display_name(),
                range.len()
            );
            partial_response(resource, range, size).await
        }
        RangeOutcome::Unsatisfiable => {
            debug!("Unsatisfiable range '{}' for size {size}", range_header.unwrap_or(""));
            (
                StatusCode::RANGE_NOT_SATISFIABLE,
                [(header::CONTENT_RANGE, unsatisfiable_content_range(size))],
            )
                .into_response()
        }
    }
}

/// Responds with the whole file
async fn full_response(resource: &ServedResource, size: u64) -> Response {
    let file = match tokio::fs::File::open(resource.path()).await {
        Ok(file) => file,
        Err(err) => return io_failure_response(&err),
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, resource.mime_type().to_string()),
            (header::CONTENT_LENGTH, size.to_string()),
            (header::ACCEPT_RANGES, "bytes".to_string()),
        ],
        Body::from_stream(ReaderStream::new(file)),
    )
        .into_response()
}

/// Responds with the requested slice of the file
async fn partial_response(resource: &ServedResource, range: ByteRange, size: u64) -> Response {
    let mut file = match tokio::fs::File::open(resource.path()).await {
        Ok(file) => file,
        Err(err) => return io_failure_response(&err),
    };

    if let Err(err) = file.seek(SeekFrom::Start(range.start)).await {
        return io_failure_response(&err);
    }

    (
        StatusCode::PARTIAL_CONTENT,
        [
            (header::CONTENT_TYPE, resource.mime_type().to_string()),
            (header::CONTENT_RANGE, range.content_range(size)),
            (header::CONTENT_LENGTH, range.len().to_string()),
            (header::ACCEPT_RANGES, "bytes".to_string()),
        ],
        Body::from_stream(ReaderStream::new(file.take(range.len()))),
    )
        .into_response()
}

/// Responds to requests outside the known routes
async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}

/// Maps a filesystem failure on an in-flight request to a bare 500
fn io_failure_response(err: &std::io::Error) -> Response {
    warn!("I/O failure while serving media: {err}");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
