//! Recency and frequency views over a parsed history
//!
//! These functions only read the entry sequence produced by the parsers. Rendering to
//! stdout happens in the `cli` module.

pub mod ranking;
pub mod recent;
pub mod stats;
pub mod timestamps;

pub use ranking::{rank_commands, top_commands};
pub use recent::{format_entry_line, last_entries};
pub use stats::summarize;
pub use timestamps::{format_duration, format_timestamp, format_timestamp_in};
