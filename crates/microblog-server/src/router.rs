use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all microblog endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(handler::register))
        .route("/posts", post(handler::create_post).get(handler::get_posts))
        .route("/posts/:id/like", post(handler::like_post))
        .route("/health", get(handler::health))
        .route("/info", get(handler::info))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
