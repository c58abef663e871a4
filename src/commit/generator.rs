//! Conventional commit message suggestion from staged diff statistics.

use crate::git::CommitKind;

use super::diff::{FileChange, FileStatus};

const DOC_EXTENSIONS: &[&str] = &["md", "txt", "rst"];
const CONFIG_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "toml", "ini", "env", "config"];
const STYLE_EXTENSIONS: &[&str] = &["css", "scss", "sass", "less"];
const CODE_EXTENSIONS: &[&str] = &[
    "ts", "js", "tsx", "jsx", "py", "java", "go", "rs", "c", "cpp", "h",
];

/// Directories checked in order when guessing a scope.
const SCOPE_DIRS: &[&str] = &["src", "lib", "api", "ui", "components", "utils", "services"];

/// First path segments that never become a scope on their own.
const NON_SCOPE_SEGMENTS: &[&str] = &["src", "dist", "node_modules"];

/// Below this many changed lines a stylesheet change counts as formatting.
const STYLE_LINE_LIMIT: usize = 50;

/// Above this many changed lines a general update is a major refactoring.
const LARGE_CHANGE_LINES: usize = 200;

/// A fix is assumed when deletions exceed this share of additions.
const FIX_DELETION_RATIO: f64 = 0.7;

/// Suggested commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSuggestion {
    pub kind: CommitKind,
    pub scope: Option<String>,
    pub description: String,
    pub full_message: String,
}

impl CommitSuggestion {
    fn new(kind: CommitKind, scope: Option<String>, description: impl Into<String>) -> Self {
        let description = description.into();
        let full_message = match &scope {
            Some(scope) => format!("{}({}): {}", kind, scope, description),
            None => format!("{}: {}", kind, description),
        };

        Self {
            kind,
            scope,
            description,
            full_message,
        }
    }
}

/// Per-bucket file counts. Each path is counted once, in the first bucket
/// it qualifies for.
#[derive(Debug, Default, PartialEq, Eq)]
struct FileKinds {
    tests: usize,
    docs: usize,
    config: usize,
    style: usize,
    code: usize,
}

/// Extension of the last path segment, without the dot.
fn extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

fn classify(changes: &[FileChange]) -> FileKinds {
    let mut kinds = FileKinds::default();

    for change in changes {
        let path = change.path.to_lowercase();
        let ext = extension(&path).unwrap_or("");

        if path.contains("test") || path.contains("spec") {
            kinds.tests += 1;
        } else if DOC_EXTENSIONS.contains(&ext) {
            kinds.docs += 1;
        } else if CONFIG_EXTENSIONS.contains(&ext)
            || path.contains("package.json")
            || path.contains("tsconfig")
        {
            kinds.config += 1;
        } else if STYLE_EXTENSIONS.contains(&ext) {
            kinds.style += 1;
        } else if CODE_EXTENSIONS.contains(&ext) {
            kinds.code += 1;
        }
    }

    kinds
}

/// File name without directory and last extension.
fn file_stem(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => stem,
        _ => name,
    }
}

/// Guess a scope from a set of paths.
pub fn detect_scope<'a>(paths: impl IntoIterator<Item = &'a str> + Clone) -> Option<String> {
    for dir in SCOPE_DIRS {
        let prefix = format!("{}/", dir);
        if paths.clone().into_iter().any(|p| p.starts_with(&prefix)) {
            return Some(dir.to_string());
        }
    }

    let segments: Vec<&str> = paths
        .into_iter()
        .map(|p| p.split('/').next().unwrap_or(p))
        .filter(|segment| !NON_SCOPE_SEGMENTS.contains(segment))
        .collect();

    let first = *segments.first()?;
    if !first.is_empty() && segments.iter().all(|s| *s == first) {
        Some(first.to_string())
    } else {
        None
    }
}

fn scope_of(changes: &[&FileChange]) -> Option<String> {
    detect_scope(changes.iter().map(|c| c.path.as_str()))
}

/// Display name of the most common extension among `changes`.
///
/// Ties go to the extension seen first.
fn most_common_file_type(changes: &[&FileChange]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for change in changes {
        let ext = change.path.rsplit('.').next().unwrap_or("");
        if ext.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(seen, _)| *seen == ext) {
            Some((_, count)) => *count += 1,
            None => counts.push((ext, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (ext, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((ext, count));
        }
    }

    match best {
        None => "files".to_string(),
        Some((ext, _)) => match ext {
            "ts" => "TypeScript".to_string(),
            "js" => "JavaScript".to_string(),
            "tsx" | "jsx" => "React".to_string(),
            "py" => "Python".to_string(),
            "md" => "documentation".to_string(),
            other => other.to_string(),
        },
    }
}

/// Build a conventional commit message for a set of staged changes.
///
/// Branches are tried in order and the first that matches decides the kind.
pub fn generate(changes: &[FileChange]) -> CommitSuggestion {
    if changes.is_empty() {
        return CommitSuggestion::new(CommitKind::Chore, None, "update project files");
    }

    let kinds = classify(changes);
    let additions: usize = changes.iter().map(|c| c.additions).sum();
    let deletions: usize = changes.iter().map(|c| c.deletions).sum();
    let total_lines = additions + deletions;

    let with_status = |status: FileStatus| -> Vec<&FileChange> {
        changes.iter().filter(|c| c.status == status).collect()
    };
    let added = with_status(FileStatus::Added);
    let deleted = with_status(FileStatus::Deleted);
    let modified = with_status(FileStatus::Modified);

    if kinds.docs > 0 && kinds.code == 0 {
        let description = match changes {
            [only] => format!("update {}", file_stem(&only.path)),
            _ => "update documentation".to_string(),
        };
        return CommitSuggestion::new(CommitKind::Docs, None, description);
    }

    if kinds.tests > 0 && kinds.code == 0 {
        let description = if kinds.tests == 1 { "add test" } else { "update tests" };
        return CommitSuggestion::new(CommitKind::Test, None, description);
    }

    if kinds.config > 0 && kinds.code == 0 {
        return CommitSuggestion::new(CommitKind::Chore, None, "update configuration");
    }

    if total_lines < STYLE_LINE_LIMIT && kinds.style > 0 {
        return CommitSuggestion::new(CommitKind::Style, None, "format code");
    }

    if !added.is_empty() && added.len() > deleted.len() {
        let description = match added.as_slice() {
            [only] => format!("add {}", file_stem(&only.path)),
            _ => format!("add {} functionality", most_common_file_type(&added)),
        };
        return CommitSuggestion::new(CommitKind::Feat, scope_of(&added), description);
    }

    if deleted.len() > added.len() {
        let description = match deleted.as_slice() {
            [only] => format!("remove {}", file_stem(&only.path)),
            _ => "remove unused code".to_string(),
        };
        return CommitSuggestion::new(CommitKind::Refactor, None, description);
    }

    if deletions as f64 > additions as f64 * FIX_DELETION_RATIO {
        let description = match changes {
            [only] => format!("resolve issue in {}", file_stem(&only.path)),
            _ => "resolve issues".to_string(),
        };
        let all: Vec<&FileChange> = changes.iter().collect();
        return CommitSuggestion::new(CommitKind::Fix, scope_of(&all), description);
    }

    // Renames alone leave `modified` empty; describe every change instead.
    let touched = if modified.is_empty() {
        changes.iter().collect()
    } else {
        modified
    };
    let description = match touched.as_slice() {
        [only] => format!("update {}", file_stem(&only.path)),
        _ if total_lines > LARGE_CHANGE_LINES => "major code refactoring".to_string(),
        _ => "improve code structure".to_string(),
    };
    CommitSuggestion::new(CommitKind::Refactor, scope_of(&touched), description)
}
