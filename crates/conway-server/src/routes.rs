//! Request handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use conway::prelude::{advance, Board};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// `POST /game`: decode a board, admit it, and answer with its successor.
pub async fn advance_board(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Board>, ApiError> {
    let board: Board = serde_json::from_slice(&body)?;
    let board = state
        .board
        .admit(board)
        .map_err(ApiError::DimensionMismatch)?;
    let next = advance(&board);
    debug!(
        dim = board.dim(),
        before = board.population(),
        after = next.population(),
        "advanced board"
    );
    Ok(Json(next))
}

/// Body of `GET /healthz`.
#[derive(Debug, Serialize)]
pub struct Health {
    /// Always `"ok"` while the process is serving.
    pub status: &'static str,
    /// Side length of the boards this instance accepts.
    pub board_dim: u32,
}

/// `GET /healthz`: liveness plus the served board size.
pub async fn healthz(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        board_dim: state.board.dim,
    })
}
