//! Read an existing changelog using parse-changelog.

use semver::Version;
use tracing::debug;

/// Whether the changelog already has a release section for `version`.
///
/// Content parse-changelog cannot read is treated as not containing it.
pub fn has_version(content: &str, version: &Version) -> bool {
    let changelog = match parse_changelog::parse(content) {
        Ok(changelog) => changelog,
        Err(e) => {
            debug!("Could not parse changelog: {}", e);
            return false;
        }
    };

    let wanted = version.to_string();
    changelog
        .keys()
        .any(|title| extract_version_from_title(title) == wanted)
}

/// Extract version number from a changelog section title.
/// e.g., "[1.2.3] - 2024-01-01" -> "1.2.3"
fn extract_version_from_title(title: &str) -> &str {
    let title = title.trim();

    if let Some(rest) = title.strip_prefix('[') {
        if let Some(end) = rest.find(']') {
            return rest[..end].trim_start_matches('v');
        }
    }

    if let Some(dash_pos) = title.find(" - ") {
        return title[..dash_pos].trim().trim_start_matches('v');
    }

    title.trim_start_matches('v')
}

/// Byte offset of the first line beginning with `## [`, where a new release
/// block goes. `None` when the changelog has no release headings yet.
pub fn find_insertion_point(content: &str) -> Option<usize> {
    let mut pos = 0;

    for line in content.split_inclusive('\n') {
        if line.starts_with("## [") {
            return Some(pos);
        }
        pos += line.len();
    }

    None
}
