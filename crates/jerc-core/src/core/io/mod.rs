//! Hand-off formats for the event-record collaborator.
//!
//! The engine does not read or write files; [`columns`] only describes how per-jet results
//! map onto named, positional output columns.

pub mod columns;
