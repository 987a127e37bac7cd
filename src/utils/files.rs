use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Size ceiling for input files. A full personal export with years of history
/// stays far below this; anything larger is almost certainly the wrong file.
const MAX_FILE_SIZE_BYTES: u64 = 200 * 1024 * 1024;

/// Validate the size of an already-opened file (checking the handle rather
/// than the path avoids a TOCTOU race)
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}
