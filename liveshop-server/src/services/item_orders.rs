//! Item Order Service
//!
//! The order-placement workflow and the sold-items report.
//!
//! Order placement is a sequence of checks and writes with no transaction
//! around it: the inventory decrement persists even if the later order
//! insert fails, and two concurrent placements can read the same stock or
//! compute the same order number. That matches the system's documented
//! single-request consistency model; see DESIGN.md before "fixing" it.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{InventoryItem, ItemOrder, Show, SoldItem};
use crate::db::repository::{InventoryRepository, ItemOrderRepository, ShowRepository};
use crate::utils::time;

use super::{ServiceResponse, application_error, is_empty_value};

const ORDER_STATUS_COMPLETED: &str = "Completed";

pub struct ItemOrderService {
    orders: ItemOrderRepository,
    shows: ShowRepository,
    inventories: InventoryRepository,
}

impl ItemOrderService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            orders: ItemOrderRepository::new(db.clone()),
            shows: ShowRepository::new(db.clone()),
            inventories: InventoryRepository::new(db),
        }
    }

    /// Place an order for an inventory item during a live show.
    ///
    /// `post_data` is a single object carrying `showId`, `itemId` and an
    /// optional `quantity`. The workflow:
    /// 1. shape and field checks,
    /// 2. show exists and is Active,
    /// 3. item exists with sufficient stock,
    /// 4. decrement stock (floored at 0),
    /// 5. assign the next order number (highest existing + 1),
    /// 6. insert the completed order with the item's price snapshotted.
    pub async fn place_order(&self, post_data: &Value) -> ServiceResponse {
        if !post_data.is_object() {
            return ServiceResponse::failed(json!({"api_request": "Invalid payload provided!"}));
        }

        let show_id = required_number(post_data.get("showId"));
        let item_id = required_number(post_data.get("itemId"));
        let (Some(show_id), Some(item_id)) = (show_id, item_id) else {
            return ServiceResponse::failed(json!({
                "api_request":
                    "Invalid request to order item. The showId and itemId are required parameters"
            }));
        };

        let quantity = post_data.get("quantity").filter(|q| !is_empty_value(q));
        if let Some(q) = quantity
            && !q.is_number()
        {
            return ServiceResponse::failed(json!({
                "api_request":
                    "Invalid request to order item. The provided order quantity must be a number"
            }));
        }
        // Absent or zero quantity means one unit; fractional values truncate
        // and nothing below a single unit can be ordered.
        let order_qty = quantity
            .and_then(Value::as_f64)
            .map(|q| (q.trunc() as i64).max(1))
            .unwrap_or(1);

        let existing_show = self
            .shows
            .find_by_show_id(show_id)
            .await
            .ok()
            .flatten()
            .and_then(|doc| serde_json::from_value::<Show>(doc).ok());
        let Some(show) = existing_show else {
            return ServiceResponse::failed(json!({
                "message": "Invalid request to order item. No show was found for the provided showId"
            }));
        };
        if !show.is_active() {
            return ServiceResponse::failed(json!({
                "message": "Invalid request to order item. The requested show is no longer ACTIVE."
            }));
        }

        let existing_item = self
            .inventories
            .find_by_item_id(item_id)
            .await
            .ok()
            .flatten()
            .and_then(|doc| serde_json::from_value::<InventoryItem>(doc).ok());
        let Some(item) = existing_item else {
            return ServiceResponse::failed(json!({
                "message": "Invalid request to order item. No inventory item was found for the provided itemId"
            }));
        };

        if item.quantity == 0 || item.quantity < order_qty {
            return ServiceResponse::failed(json!({
                "message": "Invalid request to order item. There is insufficient inventory to order the requested item"
            }));
        }

        // Persist the decrement up front. If the order insert below fails the
        // stock stays reduced; there is no compensation step.
        let new_stock_qty = (item.quantity - order_qty).max(0);
        if let Some(item_record_id) = &item.id {
            let mut stock_patch = Map::new();
            stock_patch.insert("quantity".into(), json!(new_stock_qty));
            if let Err(e) = self
                .inventories
                .update_by_id(item_record_id, stock_patch)
                .await
            {
                tracing::error!(error = %e, item_id, "Inventory decrement failed");
            }
        }

        let highest_order_number = match self.orders.latest_order().await {
            Ok(latest) => latest
                .as_ref()
                .and_then(|order| order.get("orderNumber"))
                .and_then(Value::as_i64)
                .unwrap_or(0),
            Err(e) => {
                tracing::error!(error = %e, "Order number lookup failed");
                return ServiceResponse::failed(application_error());
            }
        };

        let order = ItemOrder {
            id: None,
            order_number: highest_order_number + 1,
            show_id,
            item_id,
            quantity: order_qty,
            order_status: ORDER_STATUS_COMPLETED.into(),
            order_amount: item.amount,
            date_ordered: time::formatted_date(),
            date_ordered_timestamp: time::timestamp(),
            created: None,
            created_timestamp: None,
            updated: None,
            updated_timestamp: None,
        };
        let document = match serde_json::to_value(&order) {
            Ok(Value::Object(fields)) => fields,
            _ => return ServiceResponse::failed(application_error()),
        };

        match self.orders.insert(document).await {
            Ok(created) => ServiceResponse::ok(created),
            Err(e) => ServiceResponse::failed(json!({
                "message": format!(
                    "We couldn't process your order at the moment, please try again. Ref: {e}"
                )
            })),
        }
    }

    /// Aggregated sold-quantity report for a show.
    ///
    /// Rolls raw order rows up into `{itemId, itemName, quantity_sold}`.
    /// When `item_id` is supplied the single aggregate object is returned
    /// instead of a list — a shape asymmetry existing clients rely on.
    pub async fn get_show_orders(
        &self,
        show_id: Option<i64>,
        item_id: Option<i64>,
    ) -> ServiceResponse {
        let Some(show_id) = show_id else {
            return ServiceResponse::failed(
                json!({"inventory": "Please provide a showId to get show orders."}),
            );
        };

        let mut constraints = Map::new();
        constraints.insert("showId".into(), json!(show_id));
        if let Some(item_id) = item_id {
            constraints.insert("itemId".into(), json!(item_id));
        }

        let show_orders = match self.orders.find(&constraints).await {
            Ok(orders) => orders,
            Err(e) => {
                tracing::error!(error = %e, show_id, "Failed to fetch show orders");
                return ServiceResponse::failed(application_error());
            }
        };

        // Item names come from a full inventory fetch reindexed by itemId; a
        // failed fetch just leaves the names null.
        let item_names: BTreeMap<i64, String> = self
            .inventories
            .find(&Map::new())
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|doc| {
                let id = doc.get("itemId")?.as_i64()?;
                let name = doc.get("itemName")?.as_str()?.to_string();
                Some((id, name))
            })
            .collect();

        let mut sold_by_item: BTreeMap<i64, SoldItem> = BTreeMap::new();
        for order in &show_orders {
            let Some(order_item_id) = order.get("itemId").and_then(Value::as_i64).filter(|id| *id != 0)
            else {
                continue;
            };
            let quantity = order
                .get("quantity")
                .and_then(Value::as_i64)
                .filter(|q| *q != 0)
                .unwrap_or(1);

            sold_by_item
                .entry(order_item_id)
                .and_modify(|sold| sold.quantity_sold += quantity)
                .or_insert_with(|| SoldItem {
                    item_id: order_item_id,
                    item_name: item_names.get(&order_item_id).cloned(),
                    quantity_sold: quantity,
                });
        }

        if sold_by_item.is_empty() {
            return ServiceResponse::ok(json!({}));
        }

        let mut aggregates: Vec<SoldItem> = sold_by_item.into_values().collect();
        let data = if item_id.is_some() {
            json!(aggregates.remove(0))
        } else {
            json!(aggregates)
        };
        ServiceResponse::ok(data)
    }
}

/// Required numeric parameter: present, numeric and non-zero.
fn required_number(value: Option<&Value>) -> Option<i64> {
    let number = value?.as_number()?;
    let id = number
        .as_i64()
        .or_else(|| number.as_f64().map(|f| f.trunc() as i64))?;
    (id != 0).then_some(id)
}
