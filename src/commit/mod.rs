//! Commit message suggestions from staged changes.

pub mod diff;
pub mod generator;

pub use diff::{FileChange, FileStatus, parse_staged, staged_changes};
pub use generator::{CommitSuggestion, detect_scope, generate};
