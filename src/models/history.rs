use chrono::{DateTime, Utc};
use serde::Serialize;

/// A command line split into its command name and arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    /// The command text exactly as it appeared in the history
    pub raw: String,
    /// Empty only when the raw text had no tokens at all
    pub command: String,
    pub arguments: Vec<String>,
}

impl ParsedCommand {
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }
}

/// Metadata carried by an extended-format line (`: <ts>:<duration>;<command>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryMetadata {
    pub timestamp: DateTime<Utc>,
    /// Elapsed seconds as recorded by the shell
    pub duration: i64,
}

/// One logical record of the history file
///
/// Timestamp and duration come from the same metadata line, so they are stored
/// together and are either both present or both absent. Plain lines have no metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub metadata: Option<EntryMetadata>,
    pub parsed: ParsedCommand,
}

impl HistoryEntry {
    pub fn plain(parsed: ParsedCommand) -> Self {
        Self { metadata: None, parsed }
    }

    pub fn extended(metadata: EntryMetadata, parsed: ParsedCommand) -> Self {
        Self { metadata: Some(metadata), parsed }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.metadata.map(|m| m.timestamp)
    }

    pub fn duration(&self) -> Option<i64> {
        self.metadata.map(|m| m.duration)
    }

    pub fn is_extended(&self) -> bool {
        self.metadata.is_some()
    }
}
