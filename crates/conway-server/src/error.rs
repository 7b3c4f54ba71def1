//! Client-facing errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use conway::prelude::BoardError;
use thiserror::Error;
use tracing::warn;

/// Why a request to advance a board was refused.
///
/// Both variants are the caller's fault and map to `400 Bad Request` with a
/// plain-text reason. Oversized bodies never reach the handler; the body
/// limit answers them with `413`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Not valid JSON, wrong element types, or not a square non-empty grid.
    #[error("malformed board: {0}")]
    MalformedBoard(#[from] serde_json::Error),
    /// A square grid of a size this instance does not serve.
    ///
    /// Built only from [`BoardConfig::admit`](conway::prelude::BoardConfig::admit)
    /// failures.
    #[error("unsupported board size: {0}")]
    DimensionMismatch(#[source] BoardError),
}

impl ApiError {
    /// Status code sent to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBoard(_) | Self::DimensionMismatch(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self, "rejected board");
        (status, self.to_string()).into_response()
    }
}
