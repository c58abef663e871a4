//! Atomic file replacement.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Write through a temp file in the same directory, then rename over `path`.
///
/// An existing target keeps its permissions, and a symlink is followed so
/// the link itself survives.
pub(crate) fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;

    // Temp files are created owner-only
    if let Ok(metadata) = fs::metadata(&target) {
        tmp.as_file().set_permissions(metadata.permissions())?;
    }

    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
