use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::provider::GeminiClient;

pub mod handlers;

use handlers::{generate, health};

#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/learning-path", post(generate))
        .route("/api/health", get(health))
}
