use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the data directory holding the export and derived files
/// (~/.chatgpt-history-search)
pub fn get_data_dir() -> Result<PathBuf> {
    let home = env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".chatgpt-history-search"))
}

/// Default location of the raw export (`conversations.json`)
pub fn get_default_export_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("conversations.json"))
}

/// Default location of the derived linear records file
pub fn get_default_records_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("linear_conversations.json"))
}
