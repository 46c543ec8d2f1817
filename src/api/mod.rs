mod handlers;
pub mod render;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::store::TodoStore;

/// Build the to-do board router.
///
/// One route carries the whole app: GET renders the board, POST applies a
/// mutation and redirects back. `/health` exists for the orchestrator's
/// liveness probe.
pub fn create_router(store: TodoStore) -> Router {
    Router::new()
        .route("/", get(handlers::board).post(handlers::apply_action))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Build the standalone greeting router from the earlier pipeline
/// iterations. The displayed version string comes from `APP_VERSION`.
pub fn create_hello_router(version: String) -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(version)
}
