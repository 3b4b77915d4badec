pub mod pages;
mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::components::CardDisplay;
use crate::config::Config;
use crate::screen::ScreenHandle;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub screen: ScreenHandle,
    pub config: Arc<Config>,
}

impl AppState {
    #[must_use]
    pub fn new(screen: ScreenHandle, config: Config) -> Self {
        Self {
            screen,
            config: Arc::new(config),
        }
    }

    /// Card settings taken from the configuration.
    #[must_use]
    pub fn card_display(&self) -> CardDisplay<'_> {
        CardDisplay {
            preview_chars: self.config.body_preview_chars,
            placeholder_image: &self.config.placeholder_image_url,
        }
    }
}

/// Start the web server.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn serve(config: Config, screen: ScreenHandle) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let app = create_app(AppState::new(screen, config));

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    let static_dir = find_static_dir();
    info!(static_dir = ?static_dir, "Serving static files");

    Router::new()
        .merge(routes::router())
        .nest_service("/static", ServeDir::new(&static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Find the static files directory.
///
/// Checks in order:
/// 1. ./static (development)
/// 2. /usr/share/modelos-redacao/static (installed)
/// 3. Falls back to ./static
fn find_static_dir() -> PathBuf {
    let candidates = [
        PathBuf::from("./static"),
        PathBuf::from("/usr/share/modelos-redacao/static"),
    ];

    for path in &candidates {
        if path.is_dir() {
            return path.clone();
        }
    }

    PathBuf::from("./static")
}
