//! Git operations for publishing a release and creating commits.
//!
//! All operations use `std::process::Command` to shell out to the system `git`
//! binary, inheriting the user's existing git config, SSH agent, and credential store.

use std::path::Path;
use std::process::Command;

use semver::Version;
use tracing::{debug, info};

use crate::error::ReleaseError;
use crate::i18n::Message;

/// One step of the publish sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    Add,
    Commit,
    Tag,
    Push,
    PushTags,
}

impl PublishStep {
    pub const ALL: [PublishStep; 5] = [
        PublishStep::Add,
        PublishStep::Commit,
        PublishStep::Tag,
        PublishStep::Push,
        PublishStep::PushTags,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Commit => "commit",
            Self::Tag => "tag",
            Self::Push => "push",
            Self::PushTags => "push --tags",
        }
    }

    /// Message shown once the step succeeded.
    pub fn done_message(&self) -> Message {
        match self {
            Self::Add => Message::FilesAdded,
            Self::Commit => Message::CommitCreated,
            Self::Tag => Message::TagCreated,
            Self::Push => Message::PushCompleted,
            Self::PushTags => Message::TagsPushed,
        }
    }

    pub fn args(&self, version: &Version) -> Vec<String> {
        match self {
            Self::Add => vec!["add".into(), "-A".into()],
            Self::Commit => vec!["commit".into(), "-m".into(), release_commit_message(version)],
            Self::Tag => vec!["tag".into(), tag_name(version)],
            Self::Push => vec!["push".into()],
            Self::PushTags => vec!["push".into(), "--tags".into()],
        }
    }

    /// Shell-ready command line, for manual recovery instructions.
    pub fn command_line(&self, version: &Version) -> String {
        match self {
            Self::Commit => format!("git commit -m \"{}\"", release_commit_message(version)),
            _ => format!("git {}", self.args(version).join(" ")),
        }
    }
}

pub fn tag_name(version: &Version) -> String {
    format!("v{}", version)
}

pub fn release_commit_message(version: &Version) -> String {
    format!("chore: bump version to {}", version)
}

/// Progress notification from [`publish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    Started(PublishStep),
    Finished(PublishStep),
}

/// Stage everything, commit, tag and push, stopping at the first failure.
pub fn publish(
    workdir: &Path,
    version: &Version,
    mut on_event: impl FnMut(StepEvent),
) -> Result<(), ReleaseError> {
    for step in PublishStep::ALL {
        on_event(StepEvent::Started(step));
        let args = step.args(version);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_git(workdir, &args, step.name())?;
        on_event(StepEvent::Finished(step));
    }

    info!("Published {}", tag_name(version));
    Ok(())
}

/// Create a commit from the staged changes with the given message.
pub fn commit(workdir: &Path, message: &str) -> Result<(), ReleaseError> {
    run_git(workdir, &["commit", "-m", message], "commit")
}

/// Run a git command and return success or a descriptive error.
fn run_git(workdir: &Path, args: &[&str], step: &str) -> Result<(), ReleaseError> {
    debug!("git {}", args.join(" "));

    let output = Command::new("git")
        .args(args)
        .current_dir(workdir)
        .output()
        .map_err(|source| ReleaseError::SpawnFailed {
            step: step.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ReleaseError::GitFailed {
            step: step.to_string(),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(())
}
