use std::collections::HashSet;

use crate::models::{HistoryEntry, HistoryStats};

/// Aggregate statistics over a parsed history
pub fn summarize(entries: &[HistoryEntry]) -> HistoryStats {
    let mut stats = HistoryStats { total_entries: entries.len(), ..HistoryStats::default() };
    let mut commands = HashSet::new();

    for entry in entries {
        if !entry.parsed.command.is_empty() {
            commands.insert(entry.parsed.command.as_str());
        }

        let Some(metadata) = entry.metadata else {
            stats.plain_entries += 1;
            continue;
        };

        stats.extended_entries += 1;
        stats.total_duration = stats.total_duration.saturating_add(metadata.duration);
        let ts = metadata.timestamp;
        stats.earliest = Some(stats.earliest.map_or(ts, |t| t.min(ts)));
        stats.latest = Some(stats.latest.map_or(ts, |t| t.max(ts)));
    }

    stats.unique_commands = commands.len();
    stats
}
