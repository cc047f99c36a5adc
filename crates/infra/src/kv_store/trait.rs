use std::sync::Arc;

use thiserror::Error;

/// Key-value store operation error.
///
/// These are **infrastructure errors**; the entry repository translates them into
/// `JournalError::PersistenceReadFailed` / `PersistenceWriteFailed`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("read failed: {0}")]
    Read(String),

    #[error("write failed: {0}")]
    Write(String),
}

/// Async string-to-string store (the on-device persistence primitive).
///
/// Implementations must make `set` all-or-nothing: after a failed `set`, a later
/// `get` returns the previous value. `remove` on a missing key succeeds.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Delete `key` and its value.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[async_trait::async_trait]
impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key).await
    }
}
