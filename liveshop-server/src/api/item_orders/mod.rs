//! Item Order API Module
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /show/{showId}/buy_item/{itemId} | POST | place an order during a live show |
//! | /show/{showId}/sold_items | GET | aggregated sold-quantity report |
//! | /show/{showId}/sold_items/{itemId} | GET | report for a single item |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/show/{showId}/buy_item/{itemId}", post(handler::place_order))
        .route("/show/{showId}/sold_items", get(handler::show_orders))
        .route(
            "/show/{showId}/sold_items/{itemId}",
            get(handler::show_orders_for_item),
        )
}
