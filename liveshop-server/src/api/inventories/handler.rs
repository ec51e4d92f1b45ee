//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use serde_json::{Map, Value, json};

use crate::api::envelope;
use crate::core::ServerState;
use crate::services::{
    APPLICATION_ERROR_MESSAGE, InventoryService, application_error, is_empty_value,
};

/// POST /inventory - create or update inventory items
pub async fn add(
    State(state): State<ServerState>,
    payload: Option<Json<Value>>,
) -> Response {
    let post_data = payload.map(|Json(body)| body).unwrap_or_else(|| json!([]));

    let service = InventoryService::new(state.db.clone());
    let response = service.add_update(&post_data).await;

    if response.success {
        let data = response
            .data
            .filter(|d| !is_empty_value(d))
            .unwrap_or(post_data);
        return envelope::success(data, StatusCode::CREATED, None);
    }

    let status = if response.server_error {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::BAD_REQUEST
    };
    let errors = response
        .data
        .filter(|d| !is_empty_value(d))
        .unwrap_or_else(application_error);
    let mut meta = Map::new();
    meta.insert("server_error".into(), json!(APPLICATION_ERROR_MESSAGE));
    envelope::failed(errors, status, Some(meta))
}

/// GET /inventory/{itemId} - fetch one item by business key
pub async fn get_inventory(
    State(state): State<ServerState>,
    Path(item_id): Path<String>,
) -> Response {
    let service = InventoryService::new(state.db.clone());
    let response = service.get_inventory(Some(&item_id)).await;

    if response.success {
        return envelope::success(
            response.data.unwrap_or(Value::Null),
            StatusCode::OK,
            None,
        );
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

/// GET /inventories - list all items
pub async fn list(
    State(state): State<ServerState>,
    constraints: Option<Json<Value>>,
) -> Response {
    let search_constraints = constraints.map(|Json(body)| body);

    let service = InventoryService::new(state.db.clone());
    let response = service
        .list_inventories(search_constraints.as_ref())
        .await;

    if response.success {
        let data = response.data.unwrap_or_else(|| json!([]));
        let total = data.as_array().map(Vec::len).unwrap_or(0);
        let mut meta = Map::new();
        meta.insert("totalRecords".into(), json!(total));
        return envelope::success(data, StatusCode::OK, Some(meta));
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
