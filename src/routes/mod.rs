pub mod board;
pub mod health;
pub mod solve;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/solve", post(solve::solve_board))
        .route("/verify", post(solve::verify_path))
        .route("/board", get(board::generate_board))
}
