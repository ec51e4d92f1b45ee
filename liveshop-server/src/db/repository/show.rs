//! Show Repository

use serde_json::{Map, Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{Collection, FindOptions, RepoResult};

const SHOW_TABLE: &str = "show";

/// Collection binding for live shows, keyed externally by `showId`.
#[derive(Clone)]
pub struct ShowRepository {
    collection: Collection,
}

impl ShowRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            collection: Collection::new(db, SHOW_TABLE),
        }
    }

    /// Look up one show by its business key.
    pub async fn find_by_show_id(&self, show_id: i64) -> RepoResult<Option<Value>> {
        let mut constraints = Map::new();
        constraints.insert("showId".into(), json!(show_id));
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
