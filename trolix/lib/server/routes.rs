//! Route definitions for the HTTP server.
//!
//! This module sets up the routing for the REST API endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::{handlers, state::ServerState};
use crate::config::API_PREFIX;

//-------------------------------------------------------------------------------------------------
// Functions
//-------------------------------------------------------------------------------------------------

/// Creates a new router with all API endpoints configured
///
/// Every route is mounted under [`API_PREFIX`] and any origin may call it.
///
/// ## Arguments
/// * `state` - The shared server state
///
/// # Returns
/// A configured Router instance
pub fn create_router(state: ServerState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/os-templates", get(handlers::os_templates_handler))
        .route(
            "/sandboxes",
            get(handlers::list_sandboxes_handler).post(handlers::create_sandbox_handler),
        )
        .route("/sandboxes/{id}", delete(handlers::delete_sandbox_handler))
        .route("/sandboxes/{id}/start", post(handlers::start_sandbox_handler))
        .route("/sandboxes/{id}/stop", post(handlers::stop_sandbox_handler))
        .route("/sandboxes/{id}/save", post(handlers::save_sandbox_handler))
        .route("/terminal/execute", post(handlers::execute_handler))
        .route("/terminal/{id}/history", get(handlers::history_handler))
        .with_state(state);

    Router::new()
        .nest(API_PREFIX, api)
        .layer(CorsLayer::permissive())
}
