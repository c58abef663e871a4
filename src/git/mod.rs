//! Git queries and commit parsing.

pub mod commits;
pub mod history;
pub mod repo;
pub mod runner;

pub use commits::{CommitKind, CommitRecord, commits_since_last_tag, parse_commit};
pub use history::{LastCommit, last_commit};
pub use repo::{check_git_installed, discover_workdir, open_workdir};
pub use runner::{GitRunner, SystemGit};
