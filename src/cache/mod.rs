//! File-based cache of precomputed search rows.
//!
//! Recomputing rows for a few thousand conversations is fast, but the
//! launcher re-invokes the binary on every keystroke, so the precomputed
//! rows are cached as JSON under the platform cache directory and reused
//! until they age out or the source records file changes underneath them.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};

use crate::models::SearchRow;

/// Default cache lifetime, matching the hourly cadence at which a user might
/// refresh their export
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(3600);

const CACHE_SUBDIR: &str = "chatgpt-history-search";

/// Compute hash of canonical path for cache-file isolation between different
/// source files. Returns first 12 characters of the hex digest.
fn compute_path_hash(path: &Path) -> Result<String> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    // Canonicalize to handle symlinks and relative paths consistently
    let canonical = path.canonicalize().context("Failed to canonicalize source path")?;

    let mut hasher = DefaultHasher::new();
    canonical.hash(&mut hasher);
    let hash = hasher.finish();

    Ok(format!("{:016x}", hash)[..12].to_string())
}

/// Cache file path for a given source records file
pub fn get_cache_path(source: &Path) -> Result<PathBuf> {
    let cache_base = dirs::cache_dir().context("Failed to get platform cache directory")?;
    let cache_dir = cache_base.join(CACHE_SUBDIR);

    if !cache_dir.exists() {
        fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;
    }

    let path_hash = compute_path_hash(source)?;
    Ok(cache_dir.join(format!("rows-{}.json", path_hash)))
}

/// Load cached rows for `source` if the cache exists, is fresh, and is not
/// older than the source file itself. Returns `None` when the caller should
/// recompute (missing, stale, or unreadable cache).
pub fn load_cached_rows(source: &Path, max_age: Duration) -> Result<Option<Vec<SearchRow>>> {
    let cache_path = get_cache_path(source)?;
    if !cache_path.exists() {
        return Ok(None);
    }

    let metadata = fs::metadata(&cache_path).context("Failed to read cache metadata")?;
    let modified = metadata.modified().context("Failed to read cache mtime")?;
    let age = SystemTime::now().duration_since(modified).unwrap_or(Duration::ZERO);
    if age > max_age {
        return Ok(None);
    }

    // Source updated after the cache was written: cache is stale
    if let Ok(source_modified) = fs::metadata(source).and_then(|m| m.modified()) {
        if source_modified > modified {
            return Ok(None);
        }
    }

    let json = match fs::read_to_string(&cache_path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Warning: failed to read cache file, recomputing: {}", e);
            return Ok(None);
        }
    };
    match serde_json::from_str(&json) {
        Ok(rows) => Ok(Some(rows)),
        Err(e) => {
            eprintln!("Warning: corrupted cache file, recomputing: {}", e);
            Ok(None)
        }
    }
}

/// Save rows atomically (temp file + rename)
pub fn save_cached_rows(source: &Path, rows: &[SearchRow]) -> Result<()> {
    let cache_path = get_cache_path(source)?;
    let temp_path = cache_path.with_extension("json.tmp");

    let json = serde_json::to_string(rows).context("Failed to serialize cached rows")?;
    fs::write(&temp_path, json).context("Failed to write cache temp file")?;
    fs::rename(&temp_path, &cache_path).context("Failed to rename cache temp file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::linearizer::build_row;
    use crate::models::ConversationRecord;

    fn sample_rows() -> Vec<SearchRow> {
        let record = ConversationRecord {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            title: "Cached".to_string(),
            update_time: "2023-05-10T18:08:07Z".to_string(),
            create_time: "2023-05-09T10:00:00Z".to_string(),
            model_slug: "gpt-4".to_string(),
            plugin_enabled: false,
            linear_messages: vec!["hello".to_string()],
        };
        vec![build_row(&record).unwrap()]
    }

    fn sample_source() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let source = sample_source();
        let rows = sample_rows();

        save_cached_rows(source.path(), &rows).unwrap();
        let loaded = load_cached_rows(source.path(), DEFAULT_MAX_AGE).unwrap();
        assert_eq!(loaded, Some(rows));
    }

    #[test]
    fn test_load_missing_cache_returns_none() {
        let source = sample_source();
        let cache_path = get_cache_path(source.path()).unwrap();
        let _ = fs::remove_file(&cache_path);

        let loaded = load_cached_rows(source.path(), DEFAULT_MAX_AGE).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_expired_cache_returns_none() {
        let source = sample_source();
        save_cached_rows(source.path(), &sample_rows()).unwrap();
        std::thread::sleep(Duration::from_millis(20));

        let loaded = load_cached_rows(source.path(), Duration::ZERO).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_corrupted_cache_returns_none() {
        let source = sample_source();
        save_cached_rows(source.path(), &sample_rows()).unwrap();
        fs::write(get_cache_path(source.path()).unwrap(), "{corrupt").unwrap();

        let loaded = load_cached_rows(source.path(), DEFAULT_MAX_AGE).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_different_sources_get_different_cache_files() {
        let a = sample_source();
        let b = sample_source();
        assert_ne!(get_cache_path(a.path()).unwrap(), get_cache_path(b.path()).unwrap());
    }
}
