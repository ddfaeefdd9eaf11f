use crate::{
    AppState, create_bookmark, health, index, show_bookmark, show_create_form, show_edit_form,
    update_bookmark,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        // Bookmark endpoints, each accepting an optional trailing slash on submit
        .route("/bookmarks", post(create_bookmark))
        .route("/bookmarks/", post(create_bookmark))
        .route("/bookmarks/new", get(show_create_form))
        .route(
            "/bookmarks/{bookmark_id}",
            get(show_bookmark).post(update_bookmark),
        )
        .route("/bookmarks/{bookmark_id}/", post(update_bookmark))
        .route("/bookmarks/{bookmark_id}/edit", get(show_edit_form))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
