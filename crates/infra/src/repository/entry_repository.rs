use tokio::sync::Mutex;

use traveljournal_core::{JournalError, JournalResult};
use traveljournal_entries::TravelEntry;

use crate::kv_store::KeyValueStore;

/// Storage key the journal collection lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "travel_entries";

/// Sole owner of the persisted entry collection.
///
/// The whole collection is stored as one JSON array under a single key. Every
/// mutation is a read-modify-write of that array, serialized through an internal
/// writer lock so concurrent callers sharing this repository cannot lose updates.
///
/// ## Failure policy
///
/// - Reads recover: unreadable or corrupt storage is logged and treated as empty
///   (`list`). `try_list` exposes the underlying `PersistenceReadFailed` instead.
/// - Mutations never build on a failed read. If the store cannot be read, the
///   mutation is abandoned with `PersistenceWriteFailed`. Only a stored value that
///   does not parse is replaced.
/// - Writes propagate: a rejected write surfaces as `PersistenceWriteFailed` and
///   the stored value is left exactly as it was.
#[derive(Debug)]
pub struct EntryRepository<S> {
    store: S,
    key: String,
    write_lock: Mutex<()>,
}

impl<S> EntryRepository<S> {
    /// Repository over `store` using [`DEFAULT_STORAGE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> EntryRepository<S>
where
    S: KeyValueStore,
{
    /// Load the collection without recovery.
    ///
    /// Distinguishes "nothing stored yet" (`Ok(vec![])`) from unreadable or corrupt
    /// storage (`Err(PersistenceReadFailed)`).
    pub async fn try_list(&self) -> JournalResult<Vec<TravelEntry>> {
        let raw = self
            .store
            .get(&self.key)
            .await
            .map_err(|e| JournalError::read_failed(e.to_string()))?;

        match raw {
            None => Ok(Vec::new()),
            Some(raw) => Self::decode(&raw).map_err(JournalError::read_failed),
        }
    }

    /// Load the collection in insertion order, treating read faults as empty.
    pub async fn list(&self) -> Vec<TravelEntry> {
        match self.try_list().await {
            Ok(entries) => {
                tracing::debug!(key = %self.key, count = entries.len(), "loaded entries");
                entries
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "recovering from unreadable entry storage with an empty list");
                Vec::new()
            }
        }
    }

    /// Look up a single entry by id.
    pub async fn get(&self, id: &str) -> Option<TravelEntry> {
        self.list()
            .await
            .into_iter()
            .find(|e| e.entry_id().as_str() == id)
    }

    pub async fn len(&self) -> usize {
        self.list().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.list().await.is_empty()
    }

    /// Append `entry` after all existing entries.
    pub async fn append(&self, entry: TravelEntry) -> JournalResult<()> {
        entry.validate()?;

        let _guard = self.write_lock.lock().await;

        let mut entries = self.load_for_write().await?;
        if entries.iter().any(|e| e.entry_id() == entry.entry_id()) {
            return Err(JournalError::duplicate_id(entry.entry_id().as_str()));
        }

        let id = entry.entry_id().clone();
        entries.push(entry);
        self.write(&entries).await?;

        tracing::info!(key = %self.key, entry_id = %id, count = entries.len(), "entry appended");
        Ok(())
    }

    /// Remove the entry with `id`.
    ///
    /// Returns whether an entry was removed. An absent id succeeds with `false`
    /// and performs no write.
    pub async fn remove_by_id(&self, id: &str) -> JournalResult<bool> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load_for_write().await?;
        let before = entries.len();
        entries.retain(|e| e.entry_id().as_str() != id);

        if entries.len() == before {
            tracing::debug!(key = %self.key, entry_id = %id, "remove_by_id: no matching entry");
            return Ok(false);
        }

        self.write(&entries).await?;
        tracing::info!(key = %self.key, entry_id = %id, count = entries.len(), "entry removed");
        Ok(true)
    }

    /// Drop the entire persisted collection.
    pub async fn clear(&self) -> JournalResult<()> {
        let _guard = self.write_lock.lock().await;

        self.store.remove(&self.key).await.map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "failed to clear entries");
            JournalError::write_failed(e.to_string())
        })?;

        tracing::info!(key = %self.key, "entries cleared");
        Ok(())
    }

    /// Current collection as the base of a mutation. Caller must hold `write_lock`.
    ///
    /// A store read failure aborts the mutation; overwriting would discard entries
    /// that are still stored. A value that does not parse is replaced.
    async fn load_for_write(&self) -> JournalResult<Vec<TravelEntry>> {
        let raw = self.store.get(&self.key).await.map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "cannot read entries before writing");
            JournalError::write_failed(format!("entries could not be read, nothing was changed: {e}"))
        })?;

        match raw {
            None => Ok(Vec::new()),
            Some(raw) => match Self::decode(&raw) {
                Ok(entries) => Ok(entries),
                Err(err) => {
                    tracing::warn!(key = %self.key, error = %err, "replacing corrupt entry storage");
                    Ok(Vec::new())
                }
            },
        }
    }

    fn decode(raw: &str) -> Result<Vec<TravelEntry>, String> {
        serde_json::from_str(raw).map_err(|e| format!("stored collection is not valid: {e}"))
    }

    /// Replace the stored collection. Caller must hold `write_lock`.
    async fn write(&self, entries: &[TravelEntry]) -> JournalResult<()> {
        let payload = serde_json::to_string(entries).map_err(|e| {
            JournalError::write_failed(format!("failed to serialize entries: {e}"))
        })?;

        self.store.set(&self.key, payload).await.map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "failed to persist entries");
            JournalError::write_failed(e.to_string())
        })
    }
}
