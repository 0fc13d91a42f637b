//! HTTP API application wiring (axum router + service wiring).
//!
//! - `services.rs`: infrastructure wiring (event store/bus, projection, dispatcher)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let services = Arc::new(services::build_services());

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/plants", routes::plants::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
