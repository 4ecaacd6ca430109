use crate::{
    game::{Grid, PathValidator, SolveOptions, Solver, MIN_WORD_LENGTH},
    models::Position,
    routes::board::MAX_BOARD_SIDE,
    AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::Arc, time::Instant};

#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    pub grid: Vec<Vec<String>>,
    /// Candidate words; the loaded dictionary is used when omitted
    #[serde(default)]
    pub words: Option<Vec<String>>,
    #[serde(default)]
    pub include_paths: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SolveResponse {
    pub words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<HashMap<String, Vec<Position>>>,
    /// False when the solve budget ran out before every word was tried
    pub complete: bool,
    pub elapsed_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub grid: Vec<Vec<String>>,
    pub word: String,
    pub positions: Vec<Position>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    /// Text actually spelled by the submitted positions
    pub word: String,
}

/// Build a board from request rows, refusing anything larger than the
/// boards this service generates
fn parse_grid(rows: &[Vec<String>]) -> Result<Grid, StatusCode> {
    let too_large =
        rows.len() > MAX_BOARD_SIDE || rows.iter().any(|row| row.len() > MAX_BOARD_SIDE);
    if too_large {
        tracing::warn!(
            "Rejected board: larger than {}x{}",
            MAX_BOARD_SIDE,
            MAX_BOARD_SIDE
        );
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    Grid::new(rows).map_err(|e| {
        tracing::warn!("Rejected board: {}", e);
        StatusCode::UNPROCESSABLE_ENTITY
    })
}

/// Find every candidate word that can be traced on the submitted board
pub async fn solve_board(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, StatusCode> {
    let grid = parse_grid(&payload.grid)?;
    let started = Instant::now();

    let options = SolveOptions {
        deadline: state.config.solve_timeout().map(|budget| started + budget),
        collect_paths: payload.include_paths,
    };
    let dictionary = state.dictionary.clone();
    let custom_words = payload.words;

    let solution = tokio::task::spawn_blocking(move || {
        let words = custom_words.as_deref().unwrap_or(dictionary.words());
        Solver::with_options(&grid, options).solve(words)
    })
    .await
    .map_err(|e| {
        tracing::error!("Solver task failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::info!(
        "Solved board: {} words in {} ms (complete: {})",
        solution.words.len(),
        elapsed_ms,
        solution.complete
    );

    Ok(Json(SolveResponse {
        words: solution.words,
        paths: solution.paths,
        complete: solution.complete,
        elapsed_ms,
    }))
}

/// Check a submitted path against a board and a word
pub async fn verify_path(
    Json(payload): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, StatusCode> {
    let grid = parse_grid(&payload.grid)?;

    let long_enough = payload.word.chars().count() >= MIN_WORD_LENGTH;
    let valid = long_enough && PathValidator::spells(&grid, &payload.positions, &payload.word);

    Ok(Json(VerifyResponse {
        valid,
        word: PathValidator::extract_word(&grid, &payload.positions),
    }))
}
