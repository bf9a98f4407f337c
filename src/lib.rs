//! Zsh History Explorer - Parse and analyze zsh command history
//!
//! This library parses the history file zsh keeps in `~/.zsh_history` into structured
//! entries and splits every command line into a command name and its arguments. It
//! supports:
//!
//! - The extended history format (`: <epoch>:<duration>;<command>`) and plain lines
//! - Multi-line commands continued with a trailing backslash
//! - Shell-style tokenization honoring single quotes, double quotes and escapes
//! - Recency and frequency views over the parsed entries
//!
//! # Example
//!
//! ```no_run
//! use zsh_history_explorer::{parse_history_file, top_commands};
//! use std::path::PathBuf;
//!
//! let history = PathBuf::from("/Users/alice/.zsh_history");
//! let entries = parse_history_file(&history)?;
//! for ranked in top_commands(&entries, 5) {
//!     println!("{:>5} {}", ranked.count, ranked.command);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod models;
pub mod parsers;
pub mod reports;
pub mod utils;

// Re-export commonly used types
pub use models::{CommandCount, EntryMetadata, HistoryEntry, HistoryStats, ParsedCommand};
pub use parsers::{parse_command, parse_history, parse_history_file, split};
pub use reports::{last_entries, rank_commands, summarize, top_commands};
pub use utils::get_history_path;
