//! Repository discovery and prerequisite checks.

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};
use tracing::debug;

use crate::error::GitError;

/// Locate the `git` executable on `PATH`.
pub fn check_git_installed() -> Result<PathBuf, GitError> {
    which::which("git").map_err(|e| {
        debug!("git lookup failed: {}", e);
        GitError::NotInstalled
    })
}

/// Find the repository containing `path` and return its working directory.
///
/// An unborn HEAD is accepted, so a first commit can be made.
pub fn discover_workdir(path: &Path) -> Result<PathBuf, GitError> {
    let repo = Repository::discover(path).map_err(GitError::OpenRepository)?;
    repo.workdir()
        .map(Path::to_path_buf)
        .ok_or(GitError::BareRepository)
}

/// Open the repository containing `path` and return its working directory.
///
/// Fails with [`GitError::NoCommits`] when HEAD is unborn.
pub fn open_workdir(path: &Path) -> Result<PathBuf, GitError> {
    let workdir = discover_workdir(path)?;
    let repo = Repository::open(&workdir).map_err(GitError::OpenRepository)?;

    match repo.head() {
        Ok(_) => Ok(workdir),
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            Err(GitError::NoCommits)
        }
        Err(e) => Err(GitError::OpenRepository(e)),
    }
}
