//! Infrastructure layer: local storage, the entry repository, configuration.

pub mod config;
pub mod kv_store;
pub mod repository;

pub use config::{ConfigError, StorageConfig};
pub use kv_store::{InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore, StoreError};
pub use repository::{DEFAULT_STORAGE_KEY, EntryRepository};
