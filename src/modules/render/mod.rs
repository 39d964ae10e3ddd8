use axum::Router;
use axum::routing::any;
use crate::state::AppState;

pub mod captions;
pub mod compositor;
pub mod dto;
pub mod error;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

#[cfg(test)]
pub mod testing;

/// The render handler answers on its own path and, like an edge function,
/// on every path nothing else claims.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/render-video", any(handler::render_video))
        .fallback(handler::render_video)
}
