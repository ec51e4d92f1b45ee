//! Show Service
//!
//! Mirrors the inventory service's batch upsert/list shape for live shows,
//! keyed by `showId`.

use serde_json::{Map, Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::ShowRepository;
use crate::utils::validation::{FieldSpec, Schema};

use super::{ServiceResponse, application_error};
use super::inventories::{process_error_message, truthy_id};

const SHOW_DATE_PATTERN: &str =
    r"^(?:(0[1-9]|1[012])[/.](0[1-9]|[12][0-9]|3[01])[/.](19|20)[0-9]{2})$";

pub struct ShowService {
    repo: ShowRepository,
}

impl ShowService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: ShowRepository::new(db),
        }
    }

    fn schema() -> Schema {
        Schema::new(
            "Payload",
            vec![
                FieldSpec::integer("showId", "Show ID"),
                FieldSpec::text("showDate", "Show Date (MM/DD/YYYY)", SHOW_DATE_PATTERN)
                    .pattern_message("must be valid. Date must be in the format MM/DD/YYYY"),
                FieldSpec::text("showName", "Show Name", r"^[A-Za-z \-0-9]+$"),
                FieldSpec::text("showStatus", "Show Status", r"^[A-Za-z 0-9]+$")
                    .one_of(&["Active", "Inactive"]),
            ],
        )
    }

    /// Create or update shows from the posted payload, upserting by `showId`.
    pub async fn add_update(&self, post_data: &Value) -> ServiceResponse {
        let Some(shows) = post_data.as_array() else {
            return ServiceResponse::failed(json!({"api_request": "Invalid payload provided!"}));
        };

        let errors = Self::schema().validate_items(shows);
        if !errors.is_empty() {
            return ServiceResponse::failed(Value::Object(errors));
        }

        let mut outcomes: Vec<Value> = Vec::with_capacity(shows.len());
        let mut at_least_one_error = false;

        for show in shows {
            let Some(show_id) = truthy_id(show.get("showId")) else {
                continue;
            };

            let existing = self.repo.find_by_show_id(show_id).await.ok().flatten();

            let mut fields = Map::new();
            for name in ["showName", "showDate", "showStatus"] {
                fields.insert(name.into(), show.get(name).cloned().unwrap_or(Value::Null));
            }

            let outcome = match existing.as_ref().and_then(|doc| doc.get("id")).and_then(Value::as_str) {
                Some(id) => match self.repo.update_by_id(id, fields).await {
                    Ok(Some(updated)) => {
                        json!({ "showId": show_id, "success": true, "data": updated })
                    }
                    Ok(None) => json!({
                        "showId": show_id,
                        "success": false,
                        "error": process_error_message(None),
                    }),
                    Err(e) => {
                        at_least_one_error = true;
                        json!({
                            "showId": show_id,
                            "success": false,
                            "error": process_error_message(Some(&e)),
                        })
                    }
                },
                None => {
                    fields.insert("showId".into(), json!(show_id));
                    match self.repo.insert(fields).await {
                        Ok(created) => {
                            json!({ "showId": show_id, "success": true, "data": created })
                        }
                        Err(e) => {
                            at_least_one_error = true;
                            json!({
                                "showId": show_id,
                                "success": false,
                                "error": process_error_message(Some(&e)),
                            })
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

    /// List shows matching the optional equality constraints.
    pub async fn list_shows(&self, search_constraints: Option<&Value>) -> ServiceResponse {
        let constraints = search_constraints
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        match self.repo.find(&constraints).await {
            Ok(records) => ServiceResponse::ok(Value::Array(records)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to list shows");
                ServiceResponse::failed(application_error())
            }
        }
    }
}
