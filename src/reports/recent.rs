use crate::models::HistoryEntry;
use crate::reports::timestamps::format_timestamp;

/// The last `n` entries, in file order
pub fn last_entries(entries: &[HistoryEntry], n: usize) -> &[HistoryEntry] {
    &entries[entries.len().saturating_sub(n)..]
}

/// Render one row of the recency view
///
/// `[2023-11-14 22:13:20] cmd="echo" args=["hi"]`, without the bracketed timestamp for
/// plain entries. Command and arguments are debug-quoted so control characters are
/// escaped rather than written to the terminal.
pub fn format_entry_line(entry: &HistoryEntry) -> String {
    format_entry_line_with(entry, |ts| format_timestamp(&ts))
}

pub(crate) fn format_entry_line_with<F>(entry: &HistoryEntry, format_ts: F) -> String
where
    F: Fn(chrono::DateTime<chrono::Utc>) -> String,
{
    let prefix = entry.timestamp().map(|ts| format!("[{}] ", format_ts(ts))).unwrap_or_default();
    format!("{}cmd={:?} args={:?}", prefix, entry.parsed.command, entry.parsed.arguments)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::parsers::history::parse_logical_line;
    use crate::reports::timestamps::format_timestamp_in;

    fn entries(lines: &[&str]) -> Vec<HistoryEntry> {
        lines.iter().filter_map(|l| parse_logical_line(l)).collect()
    }

    #[test]
    fn test_last_entries_keeps_file_order() {
        let history = entries(&["a", "b", "c", "d"]);
        let last: Vec<&str> =
            last_entries(&history, 2).iter().map(|e| e.parsed.raw.as_str()).collect();
        assert_eq!(last, vec!["c", "d"]);
    }

    #[test]
    fn test_last_entries_more_than_available() {
        let history = entries(&["a", "b"]);
        assert_eq!(last_entries(&history, 10).len(), 2);
        assert!(last_entries(&history, 0).is_empty());
        assert!(last_entries(&[], 3).is_empty());
    }

    #[test]
    fn test_format_extended_entry_line() {
        let entry = parse_logical_line(": 1700000000:5;echo hi").unwrap();
        let line =
            format_entry_line_with(&entry, |ts: DateTime<Utc>| format_timestamp_in(&ts, &Utc));
        assert_eq!(line, r#"[2023-11-14 22:13:20] cmd="echo" args=["hi"]"#);
    }

    #[test]
    fn test_format_plain_entry_line() {
        let entry = parse_logical_line("git commit -m 'first commit'").unwrap();
        assert_eq!(format_entry_line(&entry), r#"cmd="git" args=["commit", "-m", "first commit"]"#);
    }

    #[test]
    fn test_format_entry_line_escapes_control_characters() {
        let entry = parse_logical_line("echo \\\nhello\x1b[31m").unwrap();
        let line = format_entry_line(&entry);
        assert!(!line.contains('\x1b'));
        assert!(line.contains(r"\u{1b}"));
    }
}
