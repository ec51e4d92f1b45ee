//! Show API Module
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /show | POST | create/update one or more live shows |
//! | /shows | GET | list all shows |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/show", post(handler::add))
        .route("/shows", get(handler::list))
}
