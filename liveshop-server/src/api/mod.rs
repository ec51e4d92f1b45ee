//! API routing module
//!
//! # Structure
//!
//! - [`envelope`] - uniform success/failure response envelope
//! - [`inventories`] - inventory endpoints
//! - [`shows`] - show endpoints
//! - [`item_orders`] - order placement and the sold-items report
//!
//! Unmatched routes fall through to the resource-not-found envelope.

pub mod envelope;

pub mod inventories;
pub mod item_orders;
pub mod shows;

use std::any::Any;

use axum::{Router, http::StatusCode, response::Response, routing::get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::services;

/// Assemble the application router with CORS, request tracing and the
/// panic-to-500 safety net.
pub fn app_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(greeting))
        .merge(inventories::router())
        .merge(shows::router())
        .merge(item_orders::router())
        .fallback(resource_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

async fn greeting() -> &'static str {
    "Live Shop API!!!"
}

async fn resource_not_found() -> Response {
    envelope::failed(services::resource_not_found(), StatusCode::NOT_FOUND, None)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail, "Request handler panicked");
    envelope::failed(
        services::application_error(),
        StatusCode::INTERNAL_SERVER_ERROR,
        None,
    )
}
