//! HTTP transport for the toroidal Game of Life engine.
//!
//! The service is stateless: every `POST /game` carries a complete board and
//! receives the next generation. The only state shared between handlers is
//! the immutable [`AppState`] fixed at startup.
//!
//! | Route | Method | Response |
//! |-------|--------|----------|
//! | `/game` | `POST` | `200` next generation, `400` bad board, `413` body too large |
//! | `/healthz` | `GET` | `200` `{"status":"ok","board_dim":N}` |
//!
//! Any other path answers `404`; any other method on a known path `405`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use conway::prelude::BoardConfig;
use tokio::net::TcpListener;
use tracing::{error, info};

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

/// Per-instance state handed to every handler.
#[derive(Clone, Copy, Debug)]
pub struct AppState {
    /// Shape every incoming board must have.
    pub board: BoardConfig,
}

/// Build the application router for `config`.
///
/// Does not validate `config`; [`serve`] does.
pub fn router(config: &ServerConfig) -> Router {
    let state = AppState {
        board: config.board(),
    };
    Router::new()
        .route("/game", post(routes::advance_board))
        .route("/healthz", get(routes::healthz))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(state)
}

/// Validate `config`, bind, and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate().context("invalid configuration")?;

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    let addr = listener.local_addr().context("listener has no local address")?;
    info!(%addr, board_dim = config.board_dim, "conway-server listening");

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated abnormally")?;

    info!("conway-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested, draining connections"),
        Err(err) => {
            // Without a signal handler the server runs until killed.
            error!(%err, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
