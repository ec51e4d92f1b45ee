//! Inventory Service
//!
//! Batch create/update of inventory items (upsert by the `itemId` business
//! key), listing, and single-item lookup.

use serde_json::{Map, Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::{InventoryRepository, RepoError};
use crate::utils::validation::{FieldSpec, Schema};

use super::{
    APPLICATION_ERROR_MESSAGE, ServiceResponse, application_error, inventory_not_found,
};

pub struct InventoryService {
    repo: InventoryRepository,
}

impl InventoryService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: InventoryRepository::new(db),
        }
    }

    fn schema() -> Schema {
        Schema::new(
            "Payload",
            vec![
                FieldSpec::integer("itemId", "Item ID"),
                FieldSpec::integer("quantity", "Item Quantity"),
                FieldSpec::number("amount", "Item Amount", 2),
                FieldSpec::text("itemName", "Item Name", r"^[A-Za-z \-0-9]+$"),
            ],
        )
    }

    /// Create or update inventory items from the posted payload.
    ///
    /// Validation failures short-circuit before any storage is touched.
    /// After that, each item is processed independently: a store failure is
    /// recorded in that item's outcome and flips the overall call to a
    /// server error, but does not stop the remaining items.
    pub async fn add_update(&self, post_data: &Value) -> ServiceResponse {
        let Some(items) = post_data.as_array() else {
            return ServiceResponse::failed(json!({"api_request": "Invalid payload provided!"}));
        };

        let errors = Self::schema().validate_items(items);
        if !errors.is_empty() {
            return ServiceResponse::failed(Value::Object(errors));
        }

        let mut outcomes: Vec<Value> = Vec::with_capacity(items.len());
        let mut at_least_one_error = false;

        for item in items {
            let Some(item_id) = truthy_id(item.get("itemId")) else {
                continue;
            };

            // A failed lookup falls through to the insert path, matching the
            // upsert's read-then-write contract.
            let existing = self.repo.find_by_item_id(item_id).await.ok().flatten();

            let mut fields = Map::new();
            for name in ["itemName", "quantity", "amount"] {
                fields.insert(name.into(), item.get(name).cloned().unwrap_or(Value::Null));
            }

            let outcome = match existing.as_ref().and_then(|doc| doc.get("id")).and_then(Value::as_str) {
                Some(id) => match self.repo.update_by_id(id, fields).await {
                    Ok(Some(updated)) => {
                        let merged = merge_documents(existing.unwrap_or_default(), updated);
                        success_outcome(item_id, merged)
                    }
                    Ok(None) => failed_outcome(item_id, None),
                    Err(e) => {
                        at_least_one_error = true;
                        failed_outcome(item_id, Some(&e))
                    }
                },
                None => {
                    fields.insert("itemId".into(), json!(item_id));
                    match self.repo.insert(fields).await {
                        Ok(created) => success_outcome(item_id, created),
                        Err(e) => {
                            at_least_one_error = true;
                            failed_outcome(item_id, Some(&e))
                        }
                    }
                }
            };
            outcomes.push(outcome);
        }

        if at_least_one_error {
            ServiceResponse::failed_server(Value::Array(outcomes))
        } else {
            ServiceResponse::ok(Value::Array(outcomes))
        }
    }

    /// List inventory items matching the optional equality constraints.
    pub async fn list_inventories(&self, search_constraints: Option<&Value>) -> ServiceResponse {
        let constraints = search_constraints
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        match self.repo.find(&constraints).await {
            Ok(records) => ServiceResponse::ok(Value::Array(records)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to list inventories");
                ServiceResponse::failed(application_error())
            }
        }
    }

    /// Fetch a single inventory item by its business key.
    pub async fn get_inventory(&self, item_id: Option<&str>) -> ServiceResponse {
        let Some(raw) = item_id.map(str::trim).filter(|v| !v.is_empty()) else {
            return ServiceResponse::failed(
                json!({"inventory": "Please provide an itemID to get an inventory. "}),
            );
        };

        let Ok(item_id) = raw.parse::<i64>() else {
            // Not a number; no record can match it.
            return ServiceResponse::failed(inventory_not_found());
        };

        match self.repo.find_by_item_id(item_id).await {
            Ok(Some(record)) => ServiceResponse::ok(record),
            Ok(None) => ServiceResponse::failed(inventory_not_found()),
            Err(e) => {
                tracing::error!(error = %e, item_id, "Inventory lookup failed");
                ServiceResponse::failed(application_error())
            }
        }
    }
}

/// Business keys are "truthy" numbers: present, numeric and non-zero.
pub(crate) fn truthy_id(value: Option<&Value>) -> Option<i64> {
    let id = match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?,
        _ => return None,
    };
    (id != 0).then_some(id)
}

fn success_outcome(item_id: i64, data: Value) -> Value {
    json!({ "itemId": item_id, "success": true, "data": data })
}

fn failed_outcome(item_id: i64, error: Option<&RepoError>) -> Value {
    json!({ "itemId": item_id, "success": false, "error": process_error_message(error) })
}

/// Generic retry message; store errors keep their `Ref:` suffix, a
/// long-standing debugging aid the API contract preserves.
pub(crate) fn process_error_message(error: Option<&RepoError>) -> String {
    match error {
        Some(e) => format!("{APPLICATION_ERROR_MESSAGE} Ref: {e}"),
        None => format!("{APPLICATION_ERROR_MESSAGE} "),
    }
}

/// Overlay `updated` on top of `existing`, field by field.
fn merge_documents(existing: Value, updated: Value) -> Value {
    let (Value::Object(mut base), Value::Object(overlay)) = (existing, updated.clone()) else {
        return updated;
    };
    for (key, value) in overlay {
        base.insert(key, value);
    }
    Value::Object(base)
}
