//! API module
//!
//! HTTP endpoints, response envelope, request validation and middleware.

pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
pub mod validation;

use axum::Router;

pub use routes::create_router;
pub use state::AppState;

/// API router with request logging, ready to serve
pub fn build_router(state: AppState) -> Router {
    create_router()
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .with_state(state)
}
