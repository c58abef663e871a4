//! versionctl - semantic version bumps, changelogs and commit messages from git history.
//!
//! # Overview
//!
//! versionctl inspects the last commit to suggest a major/minor/patch bump,
//! groups the commits since the last tag into a deduplicated `CHANGELOG.md`
//! section, rewrites `package.json` and an index file's `@version` tag, and
//! runs the git publish sequence. A separate flow suggests a conventional
//! commit message from the staged diff.
//!
//! The classifiers ([`version::analyze`], [`commit::generate`],
//! [`git::parse_commit`], [`changelog::group_by_type`]) are pure functions
//! over data fetched through the [`git::GitRunner`] collaborator.

mod atomic;

pub mod changelog;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod i18n;
pub mod prompt;
pub mod release;
pub mod similarity;
pub mod version;

// Re-export commonly used types
pub use changelog::{ChangelogSections, ChangelogUpdate, Section};
pub use commit::{CommitSuggestion, FileChange, FileStatus};
pub use error::{ChangelogError, ConfigError, GitError, ReleaseError, VersionError};
pub use git::{CommitKind, CommitRecord, GitRunner, SystemGit};
pub use i18n::{Language, Message};
pub use version::{BumpLevel, ChangeAnalysis, Reason};
