//! `traveljournal-app`: the capture-and-save flow and the command-line front end.
//!
//! The flow wires the gateways to the entry repository in the order one user
//! action requires: permissions, capture, position, address, persist, notify.

pub mod cli;
pub mod flow;

pub use flow::{CaptureFlow, EntryDraft, FlowError, Gateways};
