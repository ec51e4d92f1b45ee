//! Inventory Repository

use serde_json::{Map, Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{Collection, FindOptions, RepoResult};

const INVENTORY_TABLE: &str = "inventory";

/// Collection binding for inventory items, keyed externally by `itemId`.
#[derive(Clone)]
pub struct InventoryRepository {
    collection: Collection,
}

impl InventoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            collection: Collection::new(db, INVENTORY_TABLE),
        }
    }

    /// Look up one item by its business key.
    pub async fn find_by_item_id(&self, item_id: i64) -> RepoResult<Option<Value>> {
        let constraints = constraints_for(item_id);
        self.collection.find_one(&constraints).await
    }

    pub async fn find(&self, constraints: &Map<String, Value>) -> RepoResult<Vec<Value>> {
        self.collection.find(constraints, FindOptions::default()).await
    }

    pub async fn insert(&self, document: Map<String, Value>) -> RepoResult<Value> {
        self.collection.insert_one(document).await
    }

    pub async fn update_by_id(
        &self,
        id: &str,
        patch: Map<String, Value>,
    ) -> RepoResult<Option<Value>> {
        self.collection.update_one(id, patch).await
    }

    pub async fn delete_by_id(&self, id: &str) -> RepoResult<bool> {
        self.collection.delete_one(id).await
    }
}

fn constraints_for(item_id: i64) -> Map<String, Value> {
    let mut constraints = Map::new();
    constraints.insert("itemId".into(), json!(item_id));
    constraints
}
