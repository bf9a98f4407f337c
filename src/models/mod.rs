//! Data models for zsh command history.
//!
//! - [`HistoryEntry`] - One logical record of the history file
//! - [`EntryMetadata`] - Timestamp and duration from an extended-format line
//! - [`ParsedCommand`] - A command line split into command name and arguments
//! - [`CommandCount`] / [`HistoryStats`] - Aggregates produced by the reports
//!
//! All models are immutable values built once during a parse pass.

pub mod history;
pub mod report;

pub use history::{EntryMetadata, HistoryEntry, ParsedCommand};
pub use report::{CommandCount, HistoryStats};
