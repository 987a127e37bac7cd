use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{ConversationRecord, RawConversation};
use crate::utils::validate_file_size;

/// Parse an exported `conversations.json`: a JSON array of raw conversation
/// trees, one element per conversation.
pub fn parse_export_file(path: &Path) -> Result<Vec<RawConversation>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open export file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let reader = BufReader::new(file);
    let conversations: Vec<RawConversation> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse export file: {}", path.display()))?;

    Ok(conversations)
}

/// Parse a previously written linear-records file
pub fn parse_records_file(path: &Path) -> Result<Vec<ConversationRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open records file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let reader = BufReader::new(file);
    let records: Vec<ConversationRecord> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse records file: {}", path.display()))?;

    Ok(records)
}

/// Write linear records as pretty-printed JSON (temp file + rename so a
/// crashed run never leaves a half-written file behind)
pub fn write_records_file(path: &Path, records: &[ConversationRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).context("Failed to serialize records")?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json)
        .with_context(|| format!("Failed to write records temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename records file into place: {}", path.display()))?;

    Ok(())
}
