use crate::{game::GridGenerator, AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Largest side length accepted for a generated board
pub const MAX_BOARD_SIDE: usize = 12;

#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BoardResponse {
    pub grid: Vec<Vec<String>>,
}

/// Generate a random board
pub async fn generate_board(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<BoardResponse>, StatusCode> {
    let size = state.config.game.board_size;
    let rows = query.rows.unwrap_or(size);
    let cols = query.cols.unwrap_or(size);

    let in_range = |side: usize| (1..=MAX_BOARD_SIDE).contains(&side);
    if !in_range(rows) || !in_range(cols) {
        tracing::warn!("Rejected board size {}x{}", rows, cols);
        return Err(StatusCode::BAD_REQUEST);
    }

    let grid = GridGenerator::generate(rows, cols);
    Ok(Json(BoardResponse {
        grid: grid.to_rows(),
    }))
}
