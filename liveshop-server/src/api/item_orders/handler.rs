//! Item Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use serde_json::{Map, Value, json};

use crate::api::envelope;
use crate::core::ServerState;
use crate::services::{ItemOrderService, application_error, is_empty_value};

/// POST /show/{showId}/buy_item/{itemId} - place an order
pub async fn place_order(
    State(state): State<ServerState>,
    Path((show_id, item_id)): Path<(String, String)>,
    body: Option<Json<Value>>,
) -> Response {
    let quantity = body
        .and_then(|Json(body)| body.get("quantity").cloned())
        .filter(|q| !is_empty_value(q))
        .unwrap_or(Value::Null);

    let post_data = json!({
        "quantity": quantity,
        "showId": parse_id(&show_id),
        "itemId": parse_id(&item_id),
    });

    let service = ItemOrderService::new(state.db.clone());
    let response = service.place_order(&post_data).await;

    if response.success {
        let data = response
            .data
            .filter(|d| !is_empty_value(d))
            .unwrap_or(post_data);
        return envelope::success(data, StatusCode::CREATED, None);
    }

    let status = if response.is_app_error() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::BAD_REQUEST
    };
    let errors = response
        .data
        .filter(|d| !is_empty_value(d))
        .unwrap_or_else(application_error);
    envelope::failed(errors, status, None)
}

/// GET /show/{showId}/sold_items - aggregated report for the whole show
pub async fn show_orders(
    State(state): State<ServerState>,
    Path(show_id): Path<String>,
) -> Response {
    fetch_show_orders(state, &show_id, None).await
}

/// GET /show/{showId}/sold_items/{itemId} - aggregate for a single item
pub async fn show_orders_for_item(
    State(state): State<ServerState>,
    Path((show_id, item_id)): Path<(String, String)>,
) -> Response {
    fetch_show_orders(state, &show_id, numeric_id(&item_id)).await
}

async fn fetch_show_orders(state: ServerState, show_id: &str, item_id: Option<i64>) -> Response {
    let service = ItemOrderService::new(state.db.clone());
    let response = service.get_show_orders(numeric_id(show_id), item_id).await;

    if response.success {
        let data = response.data.unwrap_or(Value::Null);
        // totalRecords only accompanies the list shape, never the single
        // aggregate object.
        let meta = data.as_array().map(|records| {
            let mut meta = Map::new();
            meta.insert("totalRecords".into(), json!(records.len()));
            meta
        });
        let data = if is_empty_value(&data) { json!([]) } else { data };
        return envelope::success(data, StatusCode::OK, meta);
    }

    let status = if response.is_app_error() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::NOT_FOUND
    };
    let errors = response
        .data
        .filter(|d| !is_empty_value(d))
        .unwrap_or_else(application_error);
    envelope::failed(errors, status, None)
}

fn parse_id(raw: &str) -> Value {
    raw.parse::<i64>().map(Value::from).unwrap_or(Value::Null)
}

/// Zero is a falsy id and counts as not supplied.
fn numeric_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id != 0)
}
