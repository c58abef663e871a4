//! Heuristic classification of the last commit into a bump level.
//!
//! Keyword sets are matched by plain substring containment on the lowercased
//! message. A keyword inside an unrelated word still fires ("remov" matches
//! "removal" and "unremovable" alike).

use tracing::debug;

use crate::i18n::{Language, Message};

use super::bump::BumpLevel;

const MAJOR_KEYWORDS: &[&str] = &[
    "breaking",
    "break",
    "incompatível",
    "incompatible",
    "remove",
    "remov",
    "delete",
    "delet",
    "refactor completo",
    "reescrita",
    "rewrite",
];

const MINOR_KEYWORDS: &[&str] = &[
    "add",
    "adicion",
    "nova",
    "novo",
    "new",
    "feature",
    "implement",
    "criar",
    "create",
    "funcionalidade",
];

const PATCH_KEYWORDS: &[&str] = &[
    "fix",
    "corrig",
    "bug",
    "erro",
    "error",
    "ajust",
    "ajeit",
    "pequen",
    "minor change",
];

/// Entry points, the package manifest and project config files.
const CRITICAL_FILES: &[&str] = &[
    "index.js",
    "index.ts",
    "package.json",
    "projects.config.js",
    "tasks.config.js",
];

/// Why a level was suggested. Mapped to text by [`Reason::describe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Breaking,
    ConfigModified,
    NewFeature,
    NewFiles { count: usize },
    BugFix,
    SmallChange,
}

impl Reason {
    pub fn describe(&self, language: Language) -> String {
        match self {
            Self::Breaking => language.t(Message::BreakingChange).to_string(),
            Self::ConfigModified => language.t(Message::ConfigFilesModified).to_string(),
            Self::NewFeature => language.t(Message::NewFeatureIndicated).to_string(),
            Self::NewFiles { count } => {
                format!("🟡 {} {}", count, language.t(Message::NewFilesAdded))
            }
            Self::BugFix => language.t(Message::BugFixIndicated).to_string(),
            Self::SmallChange => language.t(Message::SmallChange).to_string(),
        }
    }
}

/// Verdict for one commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeAnalysis {
    pub bump_level: BumpLevel,
    pub reasons: Vec<Reason>,
    pub files_changed: Vec<String>,
    pub commit_message: String,
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}

/// Suggest a bump level for a commit.
///
/// Rules run in a fixed order and can only raise the level; each rule that
/// fires appends one reason.
pub fn analyze(
    commit_message: &str,
    changed_files: &[String],
    added_files: &[String],
) -> ChangeAnalysis {
    let message = commit_message.to_lowercase();
    let mut level = BumpLevel::Patch;
    let mut reasons = Vec::new();

    if contains_any(&message, MAJOR_KEYWORDS) {
        level = BumpLevel::Major;
        reasons.push(Reason::Breaking);
    }

    let touches_critical = changed_files
        .iter()
        .any(|file| CRITICAL_FILES.iter().any(|critical| file.contains(critical)));
    if touches_critical && level != BumpLevel::Major {
        let touches_config = changed_files
            .iter()
            .any(|file| file.contains("config.js") || file.contains("config.ts"));
        if touches_config {
            level = BumpLevel::Minor;
            reasons.push(Reason::ConfigModified);
        }
    }

    if level == BumpLevel::Patch && contains_any(&message, MINOR_KEYWORDS) {
        level = BumpLevel::Minor;
        reasons.push(Reason::NewFeature);
    }

    if level == BumpLevel::Patch && !added_files.is_empty() {
        level = BumpLevel::Minor;
        reasons.push(Reason::NewFiles {
            count: added_files.len(),
        });
    }

    if level == BumpLevel::Patch && contains_any(&message, PATCH_KEYWORDS) {
        reasons.push(Reason::BugFix);
    }

    if reasons.is_empty() && level == BumpLevel::Patch {
        reasons.push(Reason::SmallChange);
    }

    debug!(?level, ?reasons, "Classified commit");

    ChangeAnalysis {
        bump_level: level,
        reasons,
        files_changed: changed_files.to_vec(),
        commit_message: commit_message.to_string(),
    }
}
