//! Inventory API Module
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /inventory | POST | create/update one or more inventory items |
//! | /inventory/{itemId} | GET | fetch one item by business key |
//! | /inventories | GET | list all items |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/inventory", post(handler::add))
        .route("/inventory/{itemId}", get(handler::get_inventory))
        .route("/inventories", get(handler::list))
}
