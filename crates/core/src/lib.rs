//! `traveljournal-core`: identifiers, errors and the entity traits shared by the journal.
//!
//! Nothing here touches storage or a device.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{JournalError, JournalResult};
pub use id::EntryId;
pub use value_object::ValueObject;
