use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const HISTORY_FILE_NAME: &str = ".zsh_history";

/// Get the default history file path (~/.zsh_history)
pub fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(history_path_in(&home))
}

/// History file location inside a given home directory
pub fn history_path_in(home: &Path) -> PathBuf {
    home.join(HISTORY_FILE_NAME)
}
