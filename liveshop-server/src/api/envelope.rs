//! Uniform response envelope
//!
//! Every endpoint answers with `{success, data|errors, ...meta}`. Success
//! envelopes always carry a `data` key (null when the payload is empty);
//! failure envelopes always carry `errors` (null when empty). Metadata such
//! as `totalRecords` or the batch `server_error` marker is spliced in
//! alongside.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value, json};

use crate::services::is_empty_value;

/// Standard success envelope.
pub fn success(data: Value, status: StatusCode, meta: Option<Map<String, Value>>) -> Response {
    let mut body = Map::new();
    body.insert("success".into(), json!(true));
    if let Some(meta) = meta {
        for (key, value) in meta {
            body.insert(key, value);
        }
    }
    body.insert("data".into(), null_if_empty(data));
    (status, Json(Value::Object(body))).into_response()
}

/// Standard failure envelope.
pub fn failed(errors: Value, status: StatusCode, meta: Option<Map<String, Value>>) -> Response {
    let mut body = Map::new();
    body.insert("success".into(), json!(false));
    if let Some(meta) = meta {
        for (key, value) in meta {
            body.insert(key, value);
        }
    }
    body.insert("errors".into(), null_if_empty(errors));
    (status, Json(Value::Object(body))).into_response()
}

fn null_if_empty(value: Value) -> Value {
    if is_empty_value(&value) {
        Value::Null
    } else {
        value
    }
}
