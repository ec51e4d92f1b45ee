//! Domain document models
//!
//! Typed views over the stored JSON documents. The upsert paths work on raw
//! documents (merge semantics), so these types are used where the business
//! rules read or build whole records: the order-placement workflow and the
//! sold-items report.

pub mod inventory;
pub mod item_order;
pub mod show;

pub use inventory::InventoryItem;
pub use item_order::{ItemOrder, SoldItem};
pub use show::Show;
