//! Error types for versionctl modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("git executable not found on PATH")]
    NotInstalled,

    #[error("Repository has no commits yet")]
    NoCommits,

    #[error("Bare repository not supported")]
    BareRepository,
}

/// Errors from changelog operations.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write changelog: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Errors from version operations.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, #[source] semver::Error),

    #[error("No version field found in {0}")]
    MissingVersion(PathBuf),

    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to update {path}: {reason}")]
    FileUpdateFailed { path: PathBuf, reason: String },
}

/// Errors from the user configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    #[error("Failed to write config file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[source] serde_json::Error),

    #[error("Invalid language '{0}'. Available: en, pt, es, fr")]
    InvalidLanguage(String),
}

/// Errors from git commands that change the repository.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("git {step} failed: {stderr}")]
    GitFailed { step: String, stderr: String },

    #[error("Failed to run git {step}: {source}")]
    SpawnFailed {
        step: String,
        #[source]
        source: std::io::Error,
    },
}
