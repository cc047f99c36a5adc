//! Journal entry model and the factory that builds new entries.

pub mod entry;
pub mod factory;

pub use entry::{Coordinates, TravelEntry};
pub use factory::EntryFactory;
