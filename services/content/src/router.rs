use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use digest_core::health::{healthz, readyz};
use digest_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{login, signup},
    content::{create_content, delete_content, get_content, list_contents},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/signup", post(signup))
        .route("/login", post(login))
        // Contents
        .route("/contents", post(create_content))
        .route("/contents", get(list_contents))
        .route("/contents/{content_id}", get(get_content))
        .route("/contents/{content_id}", delete(delete_content))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
