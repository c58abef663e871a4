//! Commit listing and conventional commit parsing with keyword fallback.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use super::runner::{GitRunner, non_empty_lines};

/// `type(scope)!: description`
static CONVENTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)(\(([^)]+)\))?(!)?:\s*(.+)$").expect("conventional commit pattern is valid")
});

/// Commit kinds.
///
/// Conventional commits keep their type token as written (lowercased), so
/// tokens outside the known set survive as [`CommitKind::Custom`]
/// (`"feature"`, `"perf"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommitKind {
    Feat,
    Fix,
    Removed,
    Deprecated,
    Refactor,
    Docs,
    Style,
    Test,
    Chore,
    Build,
    Ci,
    Security,
    Other,
    Custom(String),
}

impl CommitKind {
    /// Map a lowercased type token to a kind without any aliasing.
    pub fn from_token(token: &str) -> Self {
        match token {
            "feat" => Self::Feat,
            "fix" => Self::Fix,
            "removed" => Self::Removed,
            "deprecated" => Self::Deprecated,
            "refactor" => Self::Refactor,
            "docs" => Self::Docs,
            "style" => Self::Style,
            "test" => Self::Test,
            "chore" => Self::Chore,
            "build" => Self::Build,
            "ci" => Self::Ci,
            "security" => Self::Security,
            "other" => Self::Other,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Removed => "removed",
            Self::Deprecated => "deprecated",
            Self::Refactor => "refactor",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Security => "security",
            Self::Other => "other",
            Self::Custom(token) => token,
        }
    }

    /// Housekeeping kinds that never reach the changelog on their own.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Chore | Self::Docs | Self::Style | Self::Test | Self::Build | Self::Ci
        )
    }
}

impl fmt::Display for CommitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefix keywords for messages without conventional syntax, first match wins.
const FALLBACK_RULES: &[(&[&str], &str)] = &[
    (
        &["add", "feat", "feature", "new", "nova", "novo", "implement", "create", "criar"],
        "feat",
    ),
    (&["fix", "bug", "error", "erro", "corrig", "ajust"], "fix"),
    (&["remove", "remov", "delete", "delet"], "removed"),
    (&["deprecat", "obsolet"], "deprecated"),
    (&["refactor", "rewrite", "reescrev"], "refactor"),
    (&["docs", "doc", "documentation"], "docs"),
    (&["style", "format"], "style"),
    (&["test"], "test"),
    (&["chore", "build", "ci"], "chore"),
    (&["security", "segurança", "sec"], "security"),
];

/// Infer a kind from the start of a lowercased message.
pub fn infer_kind(lower_message: &str) -> CommitKind {
    FALLBACK_RULES
        .iter()
        .find(|(prefixes, _)| prefixes.iter().any(|p| lower_message.starts_with(p)))
        .map(|(_, token)| CommitKind::from_token(token))
        .unwrap_or(CommitKind::Other)
}

/// How a message was understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageForm {
    /// Matched `type(scope)!: description`.
    Conventional,
    /// Kind inferred from leading keywords.
    Fallback,
}

/// Intermediate parse result before it is flattened into a [`CommitRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedMessage {
    Conventional {
        kind: CommitKind,
        scope: Option<String>,
        breaking: bool,
        description: String,
    },
    Fallback {
        kind: CommitKind,
        description: String,
        breaking: bool,
    },
}

impl ParsedMessage {
    pub fn parse(message: &str) -> Self {
        let lower = message.to_lowercase();

        if let Some(caps) = CONVENTIONAL_RE.captures(message) {
            let token = caps.get(1).map(|m| m.as_str()).unwrap_or("").to_lowercase();
            let scope = caps.get(3).map(|m| m.as_str().to_string());
            let bang = caps.get(4).is_some();
            let description = caps.get(5).map(|m| m.as_str()).unwrap_or("").to_string();

            return Self::Conventional {
                kind: CommitKind::from_token(&token),
                scope,
                breaking: bang || lower.contains("breaking"),
                description,
            };
        }

        Self::Fallback {
            kind: infer_kind(&lower),
            description: message.to_string(),
            breaking: lower.contains("breaking") || lower.contains("break"),
        }
    }
}

/// A commit subject parsed into changelog-relevant fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Abbreviated hash (first 7 characters).
    pub hash: String,
    pub message: String,
    pub kind: CommitKind,
    pub scope: Option<String>,
    pub description: String,
    pub breaking: bool,
    pub form: MessageForm,
}

impl CommitRecord {
    /// Changelog line for this commit, with the scope in bold when present.
    pub fn entry(&self) -> String {
        match &self.scope {
            Some(scope) => format!("**{}**: {}", scope, self.description),
            None => self.description.clone(),
        }
    }
}

/// Parse a single commit subject line. Never fails.
pub fn parse_commit(hash: &str, message: &str) -> CommitRecord {
    let hash: String = hash.chars().take(7).collect();

    match ParsedMessage::parse(message) {
        ParsedMessage::Conventional {
            kind,
            scope,
            breaking,
            description,
        } => CommitRecord {
            hash,
            message: message.to_string(),
            kind,
            scope,
            description,
            breaking,
            form: MessageForm::Conventional,
        },
        ParsedMessage::Fallback {
            kind,
            description,
            breaking,
        } => CommitRecord {
            hash,
            message: message.to_string(),
            kind,
            scope: None,
            description,
            breaking,
            form: MessageForm::Fallback,
        },
    }
}

/// Most recent tag reachable from HEAD, if any.
pub fn latest_tag(git: &dyn GitRunner) -> Option<String> {
    let tag = git.run("describe --tags --abbrev=0");
    if tag.is_empty() { None } else { Some(tag) }
}

/// Commits since the most recent tag, newest first.
///
/// Without a tag the whole history is returned (first release). An empty
/// repository yields an empty list.
pub fn commits_since_last_tag(git: &dyn GitRunner) -> Vec<CommitRecord> {
    let log = match latest_tag(git) {
        Some(tag) => {
            debug!(tag = %tag, "Listing commits since tag");
            git.run(&format!("log {}..HEAD --pretty=format:%H|%s", tag))
        }
        None => {
            debug!("No tag found, listing full history");
            git.run("log --pretty=format:%H|%s")
        }
    };

    non_empty_lines(&log)
        .iter()
        .map(|line| match line.split_once('|') {
            Some((hash, subject)) => parse_commit(hash, subject),
            None => parse_commit(line, ""),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::runner::MockGitRunner;

    #[test]
    fn test_parse_conventional_with_scope() {
        let record = parse_commit("abc1234567", "feat(api): add endpoint");
        assert_eq!(record.hash, "abc1234");
        assert_eq!(record.kind, CommitKind::Feat);
        assert_eq!(record.scope.as_deref(), Some("api"));
        assert_eq!(record.description, "add endpoint");
        assert!(!record.breaking);
        assert_eq!(record.form, MessageForm::Conventional);
    }

    #[test]
    fn test_parse_bang_marks_breaking() {
        let record = parse_commit("abc1234567", "feat!: breaking change");
        assert!(record.breaking);
        assert_eq!(record.description, "breaking change");
    }

    #[test]
    fn test_parse_breaking_word_in_conventional() {
        let record = parse_commit("abc", "refactor: BREAKING rename config keys");
        assert!(record.breaking);
    }

    #[test]
    fn test_conventional_token_is_not_aliased() {
        let record = parse_commit("abc", "Feature: shiny");
        assert_eq!(record.kind, CommitKind::Custom("feature".into()));
        assert_eq!(record.kind.as_str(), "feature");
    }

    #[test]
    fn test_fallback_feat_keywords() {
        for msg in ["Add login page", "implement cache", "new dashboard", "create user model"] {
            let record = parse_commit("abc", msg);
            assert_eq!(record.kind, CommitKind::Feat, "message: {}", msg);
            assert_eq!(record.description, msg);
            assert_eq!(record.scope, None);
            assert_eq!(record.form, MessageForm::Fallback);
        }
    }

    #[test]
    fn test_fallback_rule_order() {
        assert_eq!(parse_commit("a", "fixed the crash").kind, CommitKind::Fix);
        assert_eq!(parse_commit("a", "removed legacy api").kind, CommitKind::Removed);
        assert_eq!(parse_commit("a", "deprecate v1").kind, CommitKind::Deprecated);
        assert_eq!(parse_commit("a", "rewrite parser").kind, CommitKind::Refactor);
        assert_eq!(parse_commit("a", "documentation tweaks").kind, CommitKind::Docs);
        assert_eq!(parse_commit("a", "formatting").kind, CommitKind::Style);
        assert_eq!(parse_commit("a", "tests for parser").kind, CommitKind::Test);
        assert_eq!(parse_commit("a", "build scripts").kind, CommitKind::Chore);
        assert_eq!(parse_commit("a", "security patch").kind, CommitKind::Security);
        assert_eq!(parse_commit("a", "Merge branch 'main'").kind, CommitKind::Other);
    }

    #[test]
    fn test_fallback_break_substring_is_breaking() {
        assert!(parse_commit("a", "this will break clients").breaking);
        assert!(!parse_commit("a", "update readme").breaking);
    }

    #[test]
    fn test_parse_empty_message() {
        let record = parse_commit("", "");
        assert_eq!(record.kind, CommitKind::Other);
        assert_eq!(record.description, "");
        assert!(!record.breaking);
    }

    #[test]
    fn test_entry_includes_scope() {
        let record = parse_commit("abc", "fix(ui): button alignment");
        assert_eq!(record.entry(), "**ui**: button alignment");
    }

    #[test]
    fn test_commits_since_tag_uses_range() {
        let mut git = MockGitRunner::new();
        git.expect_run().returning(|args| match args {
            "describe --tags --abbrev=0" => "v1.2.0".to_string(),
            "log v1.2.0..HEAD --pretty=format:%H|%s" => {
                "1111111aaaa|feat: add search\n2222222bbbb|fix(db): close handles".to_string()
            }
            other => panic!("unexpected git call: {}", other),
        });

        let commits = commits_since_last_tag(&git);
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].hash, "1111111");
        assert_eq!(commits[0].kind, CommitKind::Feat);
        assert_eq!(commits[1].scope.as_deref(), Some("db"));
    }

    #[test]
    fn test_commits_without_tag_lists_full_history() {
        let mut git = MockGitRunner::new();
        git.expect_run().returning(|args| match args {
            "describe --tags --abbrev=0" => String::new(),
            "log --pretty=format:%H|%s" => "abcdef0123|Initial commit".to_string(),
            other => panic!("unexpected git call: {}", other),
        });

        let commits = commits_since_last_tag(&git);
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "Initial commit");
    }

    #[test]
    fn test_commits_empty_history() {
        let mut git = MockGitRunner::new();
        git.expect_run().returning(|_| String::new());
        assert!(commits_since_last_tag(&git).is_empty());
    }

    #[test]
    fn test_subject_with_pipe_is_kept_whole() {
        let mut git = MockGitRunner::new();
        git.expect_run().returning(|args| match args {
            "describe --tags --abbrev=0" => String::new(),
            _ => "abcdef0123|fix: handle a|b input".to_string(),
        });

        let commits = commits_since_last_tag(&git);
        assert_eq!(commits[0].description, "handle a|b input");
    }
}
