use std::collections::HashMap;

use crate::models::{CommandCount, HistoryEntry};

/// Rank command names by how often they were run
///
/// Entries with an empty command name are ignored. The ranking is sorted by count
/// (highest first); commands with equal counts keep the order in which they first
/// appear in the history.
pub fn rank_commands(entries: &[HistoryEntry]) -> Vec<CommandCount> {
    let mut ranking: Vec<CommandCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let command = entry.parsed.command.as_str();
        if command.is_empty() {
            continue;
        }

        match positions.get(command) {
            Some(&pos) => ranking[pos].count += 1,
            None => {
                positions.insert(command, ranking.len());
                ranking.push(CommandCount { command: command.to_string(), count: 1 });
            }
        }
    }

    // Stable sort keeps first-appearance order among ties
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}

/// The `k` most frequently used commands
pub fn top_commands(entries: &[HistoryEntry], k: usize) -> Vec<CommandCount> {
    let mut ranking = rank_commands(entries);
    ranking.truncate(k);
    ranking
}
