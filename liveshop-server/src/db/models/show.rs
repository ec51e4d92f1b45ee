//! Show Model

use serde::{Deserialize, Serialize};

/// A live show. Orders may only be placed while `showStatus` is `Active`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub show_id: i64,
    pub show_name: String,
    pub show_date: String,
    #[serde(default)]
    pub show_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_timestamp: Option<i64>,
}

impl Show {
    /// Case-insensitive, whitespace-tolerant active check.
    pub fn is_active(&self) -> bool {
        self.show_status
            .as_deref()
            .is_some_and(|status| status.trim().eq_ignore_ascii_case("ACTIVE"))
    }
}
