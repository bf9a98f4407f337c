use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::DateTime;
use tracing::{debug, info};

use crate::models::{EntryMetadata, HistoryEntry};
use crate::parsers::command::parse_command;

const EXTENDED_PREFIX: &str = ": ";
const CONTINUATION_MARKER: char = '\\';

/// Parse a zsh history file and return its entries in file order
///
/// Any failure to open or read the file aborts the parse. Malformed content never does.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use zsh_history_explorer::parse_history_file;
///
/// let entries = parse_history_file(Path::new("/home/alice/.zsh_history"))?;
/// println!("Parsed {} entries", entries.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parse_history_file(path: &Path) -> Result<Vec<HistoryEntry>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open history file: {}", path.display()))?;

    let entries = parse_history(BufReader::new(file))
        .with_context(|| format!("Failed to read history file: {}", path.display()))?;

    info!(path = %path.display(), entries = entries.len(), "Parsed history file");
    Ok(entries)
}

/// Parse history records from any buffered reader
///
/// Physical lines ending in a backslash are joined with the following line, separated
/// by a newline, before the logical line is interpreted. Content still pending at end
/// of input is flushed as a final record.
pub fn parse_history<R: BufRead>(mut reader: R) -> Result<Vec<HistoryEntry>> {
    let mut entries = Vec::new();
    let mut pending = String::new();
    let mut buf = Vec::new();
    let mut line_num = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read line {}", line_num + 1))?;
        if read == 0 {
            break;
        }
        line_num += 1;

        let line = decode_line(&buf);

        if let Some(segment) = line.strip_suffix(CONTINUATION_MARKER) {
            debug!(line = line_num, "Joining continued line");
            pending.push_str(segment);
            pending.push('\n');
            continue;
        }

        let entry = if pending.is_empty() {
            parse_logical_line(&line)
        } else {
            pending.push_str(&line);
            let entry = parse_logical_line(&pending);
            pending.clear();
            entry
        };

        entries.extend(entry);
    }

    if !pending.is_empty() {
        debug!(line = line_num, "History ended inside a continued line");
        entries.extend(parse_logical_line(&pending));
    }

    Ok(entries)
}

/// Interpret one complete logical line
///
/// Extended-format lines yield an entry with metadata. Anything else is a plain command,
/// and empty plain lines yield nothing.
pub fn parse_logical_line(line: &str) -> Option<HistoryEntry> {
    if let Some((metadata, command)) = parse_extended(line) {
        return Some(HistoryEntry::extended(metadata, parse_command(command)));
    }

    if line.starts_with(EXTENDED_PREFIX) {
        debug!(line, "Malformed extended metadata, treating as plain command");
    }

    if line.is_empty() {
        return None;
    }

    Some(HistoryEntry::plain(parse_command(line)))
}

/// Parse the `: <timestamp>:<duration>;<command>` shape
///
/// Returns the metadata and the untouched command text, or `None` when the line does not
/// match: wrong prefix, no `;`, no `:` in the metadata, non-integer fields, or an epoch
/// that cannot be represented.
pub fn parse_extended(line: &str) -> Option<(EntryMetadata, &str)> {
    let rest = line.strip_prefix(EXTENDED_PREFIX)?;
    let (meta, command) = rest.split_once(';')?;
    let (timestamp, duration) = meta.split_once(':')?;

    let timestamp = timestamp.trim().parse::<i64>().ok()?;
    let duration = duration.trim().parse::<i64>().ok()?;
    let timestamp = DateTime::from_timestamp(timestamp, 0)?;

    Some((EntryMetadata { timestamp, duration }, command))
}

/// Strip the line terminator and decode, tolerating non-UTF-8 bytes
fn decode_line(buf: &[u8]) -> String {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
