//! Version strings stored in `package.json` and an index file's `@version` tag.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex_lite::Regex;
use semver::Version;
use serde_json::Value;
use tracing::debug;

use crate::atomic::write_atomic;
use crate::error::VersionError;

pub const PACKAGE_JSON: &str = "package.json";

/// Candidate index files, checked in order.
const INDEX_FILES: &[&str] = &["index.js", "index.ts", "src/index.js", "src/index.ts"];

static VERSION_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@version \d+\.\d+\.\d+").expect("version tag pattern is valid")
});

fn read_file(path: &Path) -> Result<String, VersionError> {
    std::fs::read_to_string(path).map_err(|source| VersionError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), VersionError> {
    write_atomic(path, content).map_err(|e| VersionError::FileUpdateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn read_package_json(path: &Path) -> Result<Value, VersionError> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| VersionError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Current version from the project's `package.json`.
pub fn read_current_version(root: &Path) -> Result<Version, VersionError> {
    let path = root.join(PACKAGE_JSON);
    let json = read_package_json(&path)?;

    let version_str = json
        .get("version")
        .and_then(|v| v.as_str())
        .ok_or_else(|| VersionError::MissingVersion(path.clone()))?;

    Version::parse(version_str.trim())
        .map_err(|e| VersionError::ParseFailed(version_str.to_string(), e))
}

/// Set the `version` field of `package.json`, keeping key order.
pub fn update_package_json(root: &Path, new_version: &Version) -> Result<PathBuf, VersionError> {
    let path = root.join(PACKAGE_JSON);
    let mut json = read_package_json(&path)?;

    let Some(object) = json.as_object_mut() else {
        return Err(VersionError::FileUpdateFailed {
            path,
            reason: "top-level value is not an object".to_string(),
        });
    };
    object.insert("version".to_string(), Value::String(new_version.to_string()));

    let output = serde_json::to_string_pretty(&json).map_err(|e| VersionError::FileUpdateFailed {
        path: path.clone(),
        reason: format!("Failed to serialize JSON: {}", e),
    })?;

    // npm uses trailing newline
    write_file(&path, &format!("{}\n", output))?;
    Ok(path)
}

/// Rewrite the first `@version X.Y.Z` tag in the first index file that has one.
///
/// Returns the updated file, or `None` when no candidate carries a tag.
pub fn update_index_file(root: &Path, new_version: &Version) -> Result<Option<PathBuf>, VersionError> {
    for candidate in INDEX_FILES {
        let path = root.join(candidate);
        if !path.is_file() {
            continue;
        }

        let content = read_file(&path)?;
        if !content.contains("@version") {
            debug!("{} has no @version tag", path.display());
            continue;
        }

        let replacement = format!("@version {}", new_version);
        let updated = VERSION_TAG_RE.replace(&content, replacement.as_str());
        write_file(&path, &updated)?;
        return Ok(Some(path));
    }

    Ok(None)
}
