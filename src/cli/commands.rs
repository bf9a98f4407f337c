use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::models::HistoryEntry;
use crate::parsers::parse_history_file;
use crate::reports::{
    format_duration, format_entry_line, format_timestamp, last_entries, summarize, top_commands,
};
use crate::utils::{get_history_path, sanitize_for_terminal};

const DEFAULT_COUNT: usize = 10;

#[derive(Parser)]
#[command(name = "zsh-history-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Explore zsh command history", long_about = None)]
pub struct Cli {
    /// History file to read (defaults to ~/.zsh_history)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the most recent entries
    Last {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
        count: usize,
    },
    /// Show the most frequently used commands
    Top {
        /// Number of commands to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
        count: usize,
    },
    /// Show statistics about the history
    Stats,
    /// Write every entry as one JSON object per line
    Export,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let path = match cli.file {
        Some(path) => path,
        None => get_history_path()?,
    };
    let entries = parse_history_file(&path)
        .with_context(|| format!("Error parsing history at {}", path.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        None => {
            writeln!(out, "Parsed {} history entries", entries.len())?;
            writeln!(out)?;
            writeln!(out, "=== Last {} Entries ===", DEFAULT_COUNT)?;
            show_last(&mut out, &entries, DEFAULT_COUNT)?;
            writeln!(out)?;
            writeln!(out, "=== Top {} Commands ===", DEFAULT_COUNT)?;
            show_top(&mut out, &entries, DEFAULT_COUNT)?;
        }
        Some(Commands::Last { count }) => show_last(&mut out, &entries, count)?,
        Some(Commands::Top { count }) => show_top(&mut out, &entries, count)?,
        Some(Commands::Stats) => show_stats(&mut out, &entries, &path)?,
        Some(Commands::Export) => export(&mut out, &entries)?,
    }

    out.flush()?;
    Ok(())
}

fn show_last<W: Write>(out: &mut W, entries: &[HistoryEntry], count: usize) -> Result<()> {
    for entry in last_entries(entries, count) {
        writeln!(out, "{}", format_entry_line(entry))?;
    }
    Ok(())
}

fn show_top<W: Write>(out: &mut W, entries: &[HistoryEntry], count: usize) -> Result<()> {
    for ranked in top_commands(entries, count) {
        writeln!(out, "  {:>3}  {}", ranked.count, sanitize_for_terminal(&ranked.command))?;
    }
    Ok(())
}

fn show_stats<W: Write>(out: &mut W, entries: &[HistoryEntry], path: &Path) -> Result<()> {
    let stats = summarize(entries);

    writeln!(out, "Zsh History Statistics")?;
    writeln!(out, "======================")?;
    writeln!(out, "Total entries: {}", stats.total_entries)?;
    writeln!(out, "  With timestamps: {}", stats.extended_entries)?;
    writeln!(out, "  Plain: {}", stats.plain_entries)?;
    writeln!(out, "Unique commands: {}", stats.unique_commands)?;
    writeln!(out, "Total recorded duration: {}", format_duration(stats.total_duration))?;
    writeln!(out)?;
    writeln!(out, "History file: {}", path.display())?;

    if let Some(earliest) = stats.earliest {
        writeln!(out, "Oldest entry: {}", format_timestamp(&earliest))?;
    }
    if let Some(latest) = stats.latest {
        writeln!(out, "Newest entry: {}", format_timestamp(&latest))?;
    }

    Ok(())
}

fn export<W: Write>(out: &mut W, entries: &[HistoryEntry]) -> Result<()> {
    for entry in entries {
        serde_json::to_writer(&mut *out, entry).context("Failed to serialize entry")?;
        writeln!(out)?;
    }
    Ok(())
}
