//! Domain services
//!
//! Validation, business rules and orchestration across the repositories.
//! Services are constructed per request with an injected store handle and
//! report outcomes through [`ServiceResponse`]: on failure `data` carries a
//! keyed error map (per-field messages, `{message: ...}` business-rule
//! errors, or the `{app: ...}` backend marker the HTTP layer turns into a
//! 500).

pub mod inventories;
pub mod item_orders;
pub mod shows;

pub use inventories::InventoryService;
pub use item_orders::ItemOrderService;
pub use shows::ShowService;

use serde_json::{Value, json};

/// Generic user-facing message for backend failures.
pub const APPLICATION_ERROR_MESSAGE: &str =
    "We couldn't process your request at the moment, please try again.";

/// `{app: ...}` — unexpected backend failure, surfaced as HTTP 500.
pub fn application_error() -> Value {
    json!({ "app": APPLICATION_ERROR_MESSAGE })
}

/// `{resource: ...}` — unmatched route.
pub fn resource_not_found() -> Value {
    json!({ "resource": "Requested resource does not exist or has been moved." })
}

/// `{inventory: ...}` — lookup by a business key found nothing.
pub fn inventory_not_found() -> Value {
    json!({ "inventory": "No inventory found with the supplied parameter" })
}

/// Emptiness as the API envelope has always defined it: null, empty or
/// whitespace-only strings, zero, `false`, and empty arrays/objects all
/// count as empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(b) => !b,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Uniform service outcome: success with data, or failure whose `data`
/// holds the error map. `server_error` marks partial batch failures that
/// the controller must surface as HTTP 500.
#[derive(Debug, Clone)]
pub struct ServiceResponse {
    pub success: bool,
    pub data: Option<Value>,
    pub server_error: bool,
}

impl ServiceResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: (!data.is_null()).then_some(data),
            server_error: false,
        }
    }

    pub fn failed(errors: Value) -> Self {
        Self {
            success: false,
            data: Some(errors),
            server_error: false,
        }
    }

    pub fn failed_server(errors: Value) -> Self {
        Self {
            success: false,
            data: Some(errors),
            server_error: true,
        }
    }

    /// Whether the failure carries the `{app: ...}` backend marker.
    pub fn is_app_error(&self) -> bool {
        self.data
            .as_ref()
            .and_then(Value::as_object)
            .is_some_and(|errors| errors.contains_key("app"))
    }
}
