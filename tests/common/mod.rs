//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temporary home directory holding a `.zsh_history` file
pub struct HomeDirBuilder {
    temp_dir: TempDir,
    lines: Vec<String>,
    trailing_newline: bool,
}

impl HomeDirBuilder {
    /// Create a new builder with an empty history
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, lines: Vec::new(), trailing_newline: true }
    }

    /// Add a raw physical line
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Add an extended-format record built with [`HistoryLineBuilder`]
    pub fn entry(self, entry: HistoryLineBuilder) -> Self {
        let rendered = entry.render();
        self.line(&rendered)
    }

    /// Leave the last line unterminated
    pub fn without_trailing_newline(mut self) -> Self {
        self.trailing_newline = false;
        self
    }

    /// Write `.zsh_history` and return the home directory (consumes self)
    pub fn build(self) -> TempDir {
        let mut content = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            content.push('\n');
        }
        fs::write(history_path(self.temp_dir.path()), content)
            .expect("Failed to write .zsh_history");
        self.temp_dir
    }
}

impl Default for HomeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one extended-format history record
pub struct HistoryLineBuilder {
    timestamp: i64,
    duration: i64,
    command: String,
}

impl HistoryLineBuilder {
    pub fn new(command: &str) -> Self {
        Self { timestamp: 1_700_000_000, duration: 0, command: command.to_string() }
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn duration(mut self, duration: i64) -> Self {
        self.duration = duration;
        self
    }

    /// Render as zsh writes it, with embedded newlines escaped as continuations
    pub fn render(&self) -> String {
        format!(": {}:{};{}", self.timestamp, self.duration, self.command.replace('\n', "\\\n"))
    }
}

pub fn history_path(home: &Path) -> PathBuf {
    home.join(".zsh_history")
}

/// A home directory with a small, realistic mixed-format history
pub fn realistic_home_dir() -> TempDir {
    HomeDirBuilder::new()
        .line("ls -la")
        .entry(HistoryLineBuilder::new("git status").timestamp(1_700_000_000).duration(1))
        .entry(HistoryLineBuilder::new("cargo test --all").timestamp(1_700_000_060).duration(42))
        .entry(HistoryLineBuilder::new("git commit -m 'fix parser'").timestamp(1_700_000_120))
        .entry(HistoryLineBuilder::new("RUST_LOG=debug cargo run").timestamp(1_700_000_180))
        .entry(
            HistoryLineBuilder::new("for f in *.rs; do\n  wc -l $f\ndone").timestamp(1_700_000_240),
        )
        .entry(HistoryLineBuilder::new("git push").timestamp(1_700_000_300).duration(3))
        .build()
}
