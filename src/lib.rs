pub mod config;
pub mod dictionary;
pub mod game;
pub mod models;
pub mod routes;
pub mod utils;

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, dictionary::Dictionary};

pub use game::{find_all_solutions, Grid, GridError, Solver};

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub dictionary: Arc<Dictionary>,
}

impl AppState {
    pub fn new(config: Config, dictionary: Dictionary) -> Self {
        Self {
            config,
            dictionary: Arc::new(dictionary),
        }
    }
}

/// Build the HTTP application with middleware attached
pub fn create_app(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
