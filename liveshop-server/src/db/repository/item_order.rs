//! Item Order Repository
//!
//! Orders are append-only: no update path exists on purpose.

use serde_json::{Map, Value};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{Collection, FindOptions, RepoResult};

const ITEM_ORDER_TABLE: &str = "item_order";

#[derive(Clone)]
pub struct ItemOrderRepository {
    collection: Collection,
}

impl ItemOrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            collection: Collection::new(db, ITEM_ORDER_TABLE),
        }
    }

    pub async fn find(&self, constraints: &Map<String, Value>) -> RepoResult<Vec<Value>> {
        self.collection.find(constraints, FindOptions::default()).await
    }

    /// The order holding the current highest `orderNumber`, if any exists.
    pub async fn latest_order(&self) -> RepoResult<Option<Value>> {
        let orders = self
            .collection
            .find(
                &Map::new(),
                FindOptions::sorted_desc("orderNumber").with_limit(1),
            )
            .await?;
        Ok(orders.into_iter().next())
    }

    pub async fn insert(&self, document: Map<String, Value>) -> RepoResult<Value> {
        self.collection.insert_one(document).await
    }

    pub async fn delete_by_id(&self, id: &str) -> RepoResult<bool> {
        self.collection.delete_one(id).await
    }
}
