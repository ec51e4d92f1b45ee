//! Show API Handlers

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Response,
};
use serde_json::{Map, Value, json};

use crate::api::envelope;
use crate::core::ServerState;
use crate::services::{
    APPLICATION_ERROR_MESSAGE, ShowService, application_error, is_empty_value,
};

/// POST /show - create or update live shows
pub async fn add(
    State(state): State<ServerState>,
    payload: Option<Json<Value>>,
) -> Response {
    let post_data = payload.map(|Json(body)| body).unwrap_or_else(|| json!([]));

    let service = ShowService::new(state.db.clone());
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

/// GET /shows - list all shows
pub async fn list(
    State(state): State<ServerState>,
    constraints: Option<Json<Value>>,
) -> Response {
    let search_constraints = constraints.map(|Json(body)| body);

    let service = ShowService::new(state.db.clone());
    let response = service.list_shows(search_constraints.as_ref()).await;

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
