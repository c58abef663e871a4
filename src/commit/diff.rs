//! Staged changes as reported by `git diff --cached`.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::git::GitRunner;
use crate::git::runner::non_empty_lines;

/// Status of a staged file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl FileStatus {
    /// Map a `--name-status` letter; copies and type changes count as modified.
    fn from_letter(letter: &str) -> Self {
        match letter.chars().next() {
            Some('A') => Self::Added,
            Some('D') => Self::Deleted,
            Some('R') => Self::Renamed,
            _ => Self::Modified,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Added => "✨",
            Self::Deleted => "🗑️",
            Self::Modified | Self::Renamed => "📝",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::Added => write!(f, "added"),
            FileStatus::Modified => write!(f, "modified"),
            FileStatus::Deleted => write!(f, "deleted"),
            FileStatus::Renamed => write!(f, "renamed"),
        }
    }
}

/// One staged file's diff summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: String,
    pub status: FileStatus,
    pub additions: usize,
    pub deletions: usize,
}

impl FileChange {
    pub fn new(path: impl Into<String>, status: FileStatus, additions: usize, deletions: usize) -> Self {
        Self {
            path: path.into(),
            status,
            additions,
            deletions,
        }
    }
}

/// Destination path of a numstat rename entry.
///
/// Handles both `old => new` and `dir/{old => new}/file` spellings; other
/// paths are returned unchanged.
fn rename_target(path: &str) -> String {
    if let (Some(open), Some(close)) = (path.find('{'), path.find('}')) {
        if open < close {
            let inner = &path[open + 1..close];
            if let Some((_, new)) = inner.split_once(" => ") {
                let joined = format!("{}{}{}", &path[..open], new, &path[close + 1..]);
                return joined.replace("//", "/");
            }
        }
    }

    match path.split_once(" => ") {
        Some((_, new)) => new.to_string(),
        None => path.to_string(),
    }
}

/// Map of path to status letter from `--name-status` output.
///
/// Renames are keyed by their destination path.
fn parse_name_status(output: &str) -> HashMap<String, FileStatus> {
    non_empty_lines(output)
        .iter()
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let letter = fields.next()?;
            let path = fields.last()?;
            Some((path.to_string(), FileStatus::from_letter(letter)))
        })
        .collect()
}

/// Combine `--numstat` and `--name-status` output into file changes.
///
/// Binary files (`-` counts) are skipped. Paths missing from the status map
/// are treated as modified.
pub fn parse_staged(numstat: &str, name_status: &str) -> Vec<FileChange> {
    let statuses = parse_name_status(name_status);
    let mut changes = Vec::new();

    for line in non_empty_lines(numstat) {
        let mut fields = line.splitn(3, '\t');
        let (Some(added), Some(deleted), Some(raw_path)) = (fields.next(), fields.next(), fields.next())
        else {
            debug!("Skipping malformed numstat line: {}", line);
            continue;
        };

        let (Ok(additions), Ok(deletions)) = (added.parse::<usize>(), deleted.parse::<usize>())
        else {
            debug!("Skipping binary file: {}", raw_path);
            continue;
        };

        let path = rename_target(raw_path);
        let status = statuses
            .get(&path)
            .copied()
            .unwrap_or(FileStatus::Modified);

        changes.push(FileChange {
            path,
            status,
            additions,
            deletions,
        });
    }

    changes
}

/// Staged file changes of the repository behind `git`.
pub fn staged_changes(git: &dyn GitRunner) -> Vec<FileChange> {
    let numstat = git.run("diff --cached --numstat");
    if numstat.is_empty() {
        return Vec::new();
    }

    let name_status = git.run("diff --cached --name-status");
    parse_staged(&numstat, &name_status)
}
