//! Repository Module
//!
//! Generic CRUD over named SurrealDB collections plus thin per-entity
//! repositories. Documents move through this layer as plain JSON objects:
//! every query projects the internal record id to an external string `id`
//! (`record::id(id)`), so callers never touch the store's own id type.

pub mod inventory;
pub mod item_order;
pub mod show;

pub use inventory::InventoryRepository;
pub use item_order::ItemOrderRepository;
pub use show::ShowRepository;

use serde_json::{Map, Value};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::utils::time;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Sort direction for [`FindOptions`]
#[derive(Debug, Clone, Copy)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Options for [`Collection::find`]
#[derive(Default)]
pub struct FindOptions {
    pub sort: Option<(&'static str, SortOrder)>,
    pub limit: Option<usize>,
}

impl FindOptions {
    pub fn sorted_desc(field: &'static str) -> Self {
        Self {
            sort: Some((field, SortOrder::Desc)),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Unless the caller asks otherwise, finds cap out at 100 records.
const DEFAULT_FIND_LIMIT: usize = 100;

/// Generic CRUD gateway over one named collection.
///
/// Constraint keys and sort fields are internal identifiers chosen at the
/// call site, never client input; they are still checked before being
/// interpolated into a statement.
#[derive(Clone)]
pub struct Collection {
    db: Surreal<Db>,
    table: &'static str,
}

impl Collection {
    pub fn new(db: Surreal<Db>, table: &'static str) -> Self {
        Self { db, table }
    }

    /// Find all documents matching the equality constraints.
    pub async fn find(
        &self,
        constraints: &Map<String, Value>,
        options: FindOptions,
    ) -> RepoResult<Vec<Value>> {
        let mut statement = String::from("SELECT *, record::id(id) AS id FROM type::table($tb)");
        let mut params = Map::new();
        params.insert("tb".into(), Value::String(self.table.into()));

        if !constraints.is_empty() {
            let mut clauses = Vec::new();
            for (position, (field, value)) in constraints.iter().enumerate() {
                check_identifier(field)?;
                let param = format!("c{position}");
                clauses.push(format!("{field} = ${param}"));
                params.insert(param, value.clone());
            }
            statement.push_str(" WHERE ");
            statement.push_str(&clauses.join(" AND "));
        }

        if let Some((field, order)) = options.sort {
            check_identifier(field)?;
            let direction = match order {
                SortOrder::Asc => "ASC",
                SortOrder::Desc => "DESC",
            };
            statement.push_str(&format!(" ORDER BY {field} {direction}"));
        }

        let limit = options.limit.unwrap_or(DEFAULT_FIND_LIMIT);
        statement.push_str(&format!(" LIMIT {limit}"));

        let records: Vec<Value> = self
            .db
            .query(statement)
            .bind(params)
            .await?
            .take(0)?;
        Ok(records)
    }

    /// Find a single document matching the equality constraints.
    pub async fn find_one(
        &self,
        constraints: &Map<String, Value>,
    ) -> RepoResult<Option<Value>> {
        let records = self
            .find(constraints, FindOptions::default().with_limit(1))
            .await?;
        Ok(records.into_iter().next())
    }

    /// Insert one document, stamping `created` / `updated` fields when the
    /// caller did not provide them. Returns the stored document.
    pub async fn insert_one(&self, mut document: Map<String, Value>) -> RepoResult<Value> {
        let now_formatted = time::formatted_date();
        let now_stamp = time::timestamp();
        if !document.contains_key("created") {
            document.insert("created".into(), Value::String(now_formatted.clone()));
            document.insert("createdTimestamp".into(), Value::from(now_stamp));
        }
        if !document.contains_key("updated") {
            document.insert("updated".into(), Value::String(now_formatted));
            document.insert("updatedTimestamp".into(), Value::from(now_stamp));
        }

        let mut params = Map::new();
        params.insert("tb".into(), Value::String(self.table.into()));
        params.insert("doc".into(), Value::Object(document));

        let mut created: Vec<Value> = self
            .db
            .query("CREATE type::table($tb) CONTENT $doc RETURN *, record::id(id) AS id")
            .bind(params)
            .await?
            .take(0)?;
        created
            .pop()
            .ok_or_else(|| RepoError::Database(format!("Failed to create {} record", self.table)))
    }

    /// Merge `patch` into the document with the given external id, always
    /// refreshing the `updated` stamps. Returns the full updated document,
    /// or `None` when no such record exists.
    pub async fn update_one(
        &self,
        id: &str,
        mut patch: Map<String, Value>,
    ) -> RepoResult<Option<Value>> {
        patch.insert("updated".into(), Value::String(time::formatted_date()));
        patch.insert("updatedTimestamp".into(), Value::from(time::timestamp()));

        let mut params = Map::new();
        params.insert("tb".into(), Value::String(self.table.into()));
        params.insert("id".into(), Value::String(id.into()));
        params.insert("patch".into(), Value::Object(patch));

        let mut updated: Vec<Value> = self
            .db
            .query("UPDATE type::thing($tb, $id) MERGE $patch RETURN *, record::id(id) AS id")
            .bind(params)
            .await?
            .take(0)?;
        Ok(updated.pop())
    }

    /// Delete the document with the given external id.
    pub async fn delete_one(&self, id: &str) -> RepoResult<bool> {
        let mut params = Map::new();
        params.insert("tb".into(), Value::String(self.table.into()));
        params.insert("id".into(), Value::String(id.into()));

        self.db
            .query("DELETE type::thing($tb, $id)")
            .bind(params)
            .await?
            .check()?;
        Ok(true)
    }
}

fn check_identifier(field: &str) -> RepoResult<()> {
    let valid = !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(RepoError::Database(format!("Invalid field name: {field}")))
    }
}
