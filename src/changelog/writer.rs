//! Insert a new release block into `CHANGELOG.md`.

use std::path::Path;

use chrono::Local;
use semver::Version;
use tracing::{debug, info};

use crate::atomic::write_atomic;
use crate::error::ChangelogError;
use crate::git::CommitRecord;
use crate::i18n::Language;

use super::format::render_release;
use super::parser::{find_insertion_point, has_version};
use super::sections::group_by_type;

pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Outcome of a changelog update. Only I/O problems are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangelogUpdate {
    NotFound,
    NoNewCommits,
    AlreadyPresent,
    Updated { commits: usize },
}

/// Add a release section for `version` built from `commits`.
///
/// Commits are grouped and deduplicated per section; when nothing survives
/// grouping the file is left as is and `NoNewCommits` is reported.
pub fn update_changelog(
    root: &Path,
    version: &Version,
    commits: &[CommitRecord],
    language: Language,
) -> Result<ChangelogUpdate, ChangelogError> {
    let path = root.join(CHANGELOG_FILE);
    if !path.exists() {
        return Ok(ChangelogUpdate::NotFound);
    }

    if commits.is_empty() {
        return Ok(ChangelogUpdate::NoNewCommits);
    }

    let content = std::fs::read_to_string(&path).map_err(ChangelogError::ReadFailed)?;

    if has_version(&content, version) {
        debug!("{} already has a section for {}", CHANGELOG_FILE, version);
        return Ok(ChangelogUpdate::AlreadyPresent);
    }

    let sections = group_by_type(commits).deduplicated();
    if sections.is_empty() {
        debug!("All {} commits were housekeeping", commits.len());
        return Ok(ChangelogUpdate::NoNewCommits);
    }

    let today = Local::now().format("%Y-%m-%d").to_string();
    let block = render_release(version, &today, &sections, language);
    let new_content = insert_block(&content, &block);

    write_atomic(&path, &new_content).map_err(ChangelogError::WriteFailed)?;
    info!(
        "Added {} entries for {} to {}",
        sections.len(),
        version,
        CHANGELOG_FILE
    );

    Ok(ChangelogUpdate::Updated {
        commits: commits.len(),
    })
}

/// Place `block` before the first release heading, or append it.
fn insert_block(content: &str, block: &str) -> String {
    match find_insertion_point(content) {
        Some(pos) => {
            let mut out = String::with_capacity(content.len() + block.len());
            out.push_str(&content[..pos]);
            out.push_str(block);
            out.push_str(&content[pos..]);
            out
        }
        None => {
            let mut out = content.trim_end().to_string();
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(block.trim_end());
            out.push('\n');
            out
        }
    }
}
