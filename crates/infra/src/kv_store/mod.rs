//! Local key-value store boundary.
//!
//! The journal keeps its whole collection under a single key, so the store only
//! needs whole-value reads, replacements and removals.

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

pub use in_memory::InMemoryKeyValueStore;
pub use r#trait::{KeyValueStore, StoreError};
pub use sqlite::SqliteKeyValueStore;
