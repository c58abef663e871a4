//! Queries about the most recent commit.

use super::runner::{GitRunner, non_empty_lines};

/// What the last commit changed, as reported by git.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastCommit {
    pub message: String,
    pub changed_files: Vec<String>,
    pub added_files: Vec<String>,
}

/// Collect message, changed files and newly added files of `HEAD`.
///
/// Missing data (no commits, git failure) yields empty fields.
pub fn last_commit(git: &dyn GitRunner) -> LastCommit {
    LastCommit {
        message: git.run("log -1 --pretty=%B"),
        changed_files: non_empty_lines(&git.run("diff-tree --no-commit-id --name-only -r HEAD")),
        added_files: non_empty_lines(
            &git.run("diff-tree --no-commit-id --diff-filter=A --name-only -r HEAD"),
        ),
    }
}
