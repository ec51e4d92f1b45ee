//! Item Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An order placed against an inventory item during a live show.
/// Append-only; `orderNumber` is assigned as highest-existing + 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub order_number: i64,
    pub show_id: i64,
    pub item_id: i64,
    pub quantity: i64,
    pub order_status: String,
    /// Item price snapshotted at order time; null when the item had none.
    pub order_amount: Option<Decimal>,
    pub date_ordered: String,
    pub date_ordered_timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_timestamp: Option<i64>,
}

/// One row of the sold-items report: order quantities rolled up per item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoldItem {
    #[serde(rename = "itemId")]
    pub item_id: i64,
    #[serde(rename = "itemName")]
    pub item_name: Option<String>,
    pub quantity_sold: i64,
}
