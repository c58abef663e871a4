//! Thin wrapper around the system `git` binary.
//!
//! Queries shell out to `git` so they inherit the user's config, and never
//! fail: any error collapses to an empty string, which callers treat as
//! "no data".

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

/// Trait for running read-only git queries.
///
/// This abstraction allows mocking git in tests.
#[cfg_attr(test, mockall::automock)]
pub trait GitRunner {
    /// Run `git <args>` and return trimmed stdout, or an empty string on any
    /// failure (non-zero exit, missing repository, missing binary).
    ///
    /// `args` is split on whitespace; no shell quoting is applied.
    fn run(&self, args: &str) -> String;
}

/// Runner that executes the real `git` binary in a working directory.
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &str) -> String {
        let output = match Command::new("git")
            .args(args.split_whitespace())
            .current_dir(&self.workdir)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                debug!(args, error = %e, "Failed to spawn git");
                return String::new();
            }
        };

        if !output.status.success() {
            debug!(
                args,
                code = ?output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "git query failed"
            );
            return String::new();
        }

        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}

/// Split runner output into non-empty lines.
pub(crate) fn non_empty_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
