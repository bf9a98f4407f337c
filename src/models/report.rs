use chrono::{DateTime, Utc};
use serde::Serialize;

/// How many times a command name appears in the history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandCount {
    pub command: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryStats {
    pub total_entries: usize,
    pub extended_entries: usize,
    pub plain_entries: usize,
    pub unique_commands: usize,
    pub earliest: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
    /// Sum of recorded durations in seconds
    pub total_duration: i64,
}
