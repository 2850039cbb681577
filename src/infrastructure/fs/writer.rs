//! Atomic output writes
//!
//! Outputs are written to a temporary file beside the destination and then
//! renamed over it, so a failed run never leaves a half-written manifest.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::SplitResult;

/// Write `content` to `path` atomically, creating parent directories.
pub fn atomic_write(path: &Path, content: &[u8]) -> SplitResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
