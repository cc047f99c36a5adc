//! Journal entry persistence.

pub mod entry_repository;

pub use entry_repository::{DEFAULT_STORAGE_KEY, EntryRepository};
