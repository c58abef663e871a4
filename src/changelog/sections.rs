//! Grouping commits into changelog sections and collapsing near-duplicates.

use crate::git::{CommitKind, CommitRecord};
use crate::similarity::similarity;

/// Entries scoring above this against an already kept entry are dropped.
pub const DUPLICATE_THRESHOLD: f64 = 0.8;

/// Prefix for entries recorded under [`Section::Breaking`].
pub const BREAKING_PREFIX: &str = "⚠️ **BREAKING CHANGE**: ";

/// Changelog sections, Keep a Changelog categories plus breaking and other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Breaking,
    Added,
    Changed,
    Deprecated,
    Removed,
    Fixed,
    Security,
    Other,
}

impl Section {
    /// All sections in rendering order.
    pub const ALL: [Section; 8] = [
        Section::Breaking,
        Section::Added,
        Section::Changed,
        Section::Deprecated,
        Section::Removed,
        Section::Fixed,
        Section::Security,
        Section::Other,
    ];

    /// Get the display name for the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breaking => "Breaking Changes",
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
            Self::Security => "Security",
            Self::Other => "Other",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Breaking => "💥",
            Self::Added => "✨",
            Self::Changed => "🔄",
            Self::Deprecated => "⚠️",
            Self::Removed => "🗑️",
            Self::Fixed => "🐛",
            Self::Security => "🔒",
            Self::Other => "📝",
        }
    }

    /// Section a non-breaking commit of this kind belongs to, or `None` for
    /// housekeeping kinds that stay out of the changelog.
    pub fn for_kind(kind: &CommitKind) -> Option<Self> {
        if kind.is_internal() {
            return None;
        }

        let section = match kind {
            CommitKind::Feat => Self::Added,
            CommitKind::Fix => Self::Fixed,
            CommitKind::Removed => Self::Removed,
            CommitKind::Deprecated => Self::Deprecated,
            CommitKind::Security => Self::Security,
            CommitKind::Refactor => Self::Changed,
            CommitKind::Custom(token) => match token.as_str() {
                "feature" => Self::Added,
                "remove" => Self::Removed,
                "perf" => Self::Changed,
                _ => Self::Other,
            },
            _ => Self::Other,
        };

        Some(section)
    }
}

/// Changelog entries grouped by section, each list in commit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogSections {
    pub breaking: Vec<String>,
    pub added: Vec<String>,
    pub changed: Vec<String>,
    pub deprecated: Vec<String>,
    pub removed: Vec<String>,
    pub fixed: Vec<String>,
    pub security: Vec<String>,
    pub other: Vec<String>,
}

impl ChangelogSections {
    pub fn get(&self, section: Section) -> &[String] {
        match section {
            Section::Breaking => &self.breaking,
            Section::Added => &self.added,
            Section::Changed => &self.changed,
            Section::Deprecated => &self.deprecated,
            Section::Removed => &self.removed,
            Section::Fixed => &self.fixed,
            Section::Security => &self.security,
            Section::Other => &self.other,
        }
    }

    fn get_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Breaking => &mut self.breaking,
            Section::Added => &mut self.added,
            Section::Changed => &mut self.changed,
            Section::Deprecated => &mut self.deprecated,
            Section::Removed => &mut self.removed,
            Section::Fixed => &mut self.fixed,
            Section::Security => &mut self.security,
            Section::Other => &mut self.other,
        }
    }

    /// Non-empty sections in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &[String])> {
        Section::ALL
            .into_iter()
            .map(|section| (section, self.get(section)))
            .filter(|(_, entries)| !entries.is_empty())
    }

    /// Total number of entries across all sections.
    pub fn len(&self) -> usize {
        Section::ALL.iter().map(|s| self.get(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy with near-duplicate entries removed from every section.
    pub fn deduplicated(&self) -> Self {
        let mut out = Self::default();
        for section in Section::ALL {
            *out.get_mut(section) = remove_duplicates(self.get(section));
        }
        out
    }
}

/// Group commits into changelog sections.
///
/// Breaking commits land only under [`Section::Breaking`]. Housekeeping kinds
/// (`chore`, `docs`, `style`, `test`, `build`, `ci`) are dropped unless
/// breaking.
pub fn group_by_type(commits: &[CommitRecord]) -> ChangelogSections {
    let mut sections = ChangelogSections::default();

    for commit in commits {
        if commit.breaking {
            sections
                .breaking
                .push(format!("{}{}", BREAKING_PREFIX, commit.entry()));
            continue;
        }

        if let Some(section) = Section::for_kind(&commit.kind) {
            sections.get_mut(section).push(commit.entry());
        }
    }

    sections
}

/// Lowercase, keep only alphanumerics and whitespace, collapse whitespace.
fn normalize(entry: &str) -> String {
    let cleaned: String = entry
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop entries that are near-identical to an earlier one.
///
/// The first occurrence wins and keeps its original text; output preserves
/// first-occurrence order.
pub fn remove_duplicates(entries: &[String]) -> Vec<String> {
    let mut kept_normalized: Vec<String> = Vec::new();
    let mut kept: Vec<String> = Vec::new();

    for entry in entries {
        let normalized = normalize(entry);

        let is_duplicate = kept_normalized
            .iter()
            .any(|existing| similarity(&normalized, existing) > DUPLICATE_THRESHOLD);

        if !is_duplicate {
            kept_normalized.push(normalized);
            kept.push(entry.clone());
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::parse_commit;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_remove_exact_duplicates() {
        let result = remove_duplicates(&strings(&["fix bug", "fix bug", "add feature"]));
        assert_eq!(result, strings(&["fix bug", "add feature"]));
    }

    #[test]
    fn test_remove_case_insensitive_near_duplicates() {
        let result = remove_duplicates(&strings(&["fix bug in api", "fix bug in API", "add feature"]));
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], "fix bug in api");
    }

    #[test]
    fn test_keeps_first_variant_with_punctuation() {
        let result = remove_duplicates(&strings(&["Fix: crash on start!", "fix crash on start"]));
        assert_eq!(result, strings(&["Fix: crash on start!"]));
    }

    #[test]
    fn test_keeps_distinct_entries() {
        let result = remove_duplicates(&strings(&["fix bug", "add feature", "update docs"]));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_non_ascii_letters_survive_normalization() {
        let result = remove_duplicates(&strings(&[
            "Corrige ação no login!",
            "corrige ação no login",
            "修复登录问题",
            "添加导出功能",
        ]));
        assert_eq!(result, strings(&["Corrige ação no login!", "修复登录问题", "添加导出功能"]));
    }

    #[test]
    fn test_remove_duplicates_trivial_inputs() {
        assert!(remove_duplicates(&[]).is_empty());
        assert_eq!(remove_duplicates(&strings(&["x"])), strings(&["x"]));
    }

    #[test]
    fn test_empty_strings_collapse() {
        let result = remove_duplicates(&strings(&["", "", "test"]));
        assert_eq!(result, strings(&["", "test"]));
    }

    #[test]
    fn test_group_by_type_basic_buckets() {
        let commits = vec![
            parse_commit("a", "feat: new feature"),
            parse_commit("b", "fix: bug fix"),
            parse_commit("c", "refactor: tidy module"),
            parse_commit("d", "perf: faster startup"),
            parse_commit("e", "security: patch vuln"),
            parse_commit("f", "deprecated: old API"),
            parse_commit("g", "removed: legacy flag"),
            parse_commit("h", "wip: something"),
        ];

        let sections = group_by_type(&commits);
        assert_eq!(sections.added, strings(&["new feature"]));
        assert_eq!(sections.fixed, strings(&["bug fix"]));
        assert_eq!(sections.changed, strings(&["tidy module", "faster startup"]));
        assert_eq!(sections.security, strings(&["patch vuln"]));
        assert_eq!(sections.deprecated, strings(&["old API"]));
        assert_eq!(sections.removed, strings(&["legacy flag"]));
        assert_eq!(sections.other, strings(&["something"]));
        assert!(sections.breaking.is_empty());
    }

    #[test]
    fn test_group_by_type_scope_in_entry() {
        let sections = group_by_type(&[parse_commit("a", "feat(api): new endpoint")]);
        assert_eq!(sections.added, strings(&["**api**: new endpoint"]));
    }

    #[test]
    fn test_breaking_recorded_only_once() {
        let sections = group_by_type(&[parse_commit("a", "feat!: drop node 14")]);
        assert_eq!(sections.breaking.len(), 1);
        assert!(sections.breaking[0].starts_with(BREAKING_PREFIX));
        assert!(sections.added.is_empty());
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_housekeeping_kinds_dropped() {
        for msg in [
            "chore: bump deps",
            "docs: update readme",
            "style: fmt",
            "test: cover parser",
            "build: tweak bundler",
            "ci: cache node_modules",
        ] {
            let sections = group_by_type(&[parse_commit("a", msg)]);
            assert!(sections.is_empty(), "{} should be dropped", msg);
        }
    }

    #[test]
    fn test_breaking_housekeeping_is_kept() {
        let sections = group_by_type(&[parse_commit("a", "chore!: require node 20")]);
        assert_eq!(sections.breaking.len(), 1);
    }

    #[test]
    fn test_feature_alias_goes_to_added() {
        let sections = group_by_type(&[parse_commit("a", "feature: dark mode")]);
        assert_eq!(sections.added, strings(&["dark mode"]));
    }

    #[test]
    fn test_iter_skips_empty_sections_in_order() {
        let sections = group_by_type(&[
            parse_commit("a", "fix: one"),
            parse_commit("b", "feat: two"),
        ]);
        let order: Vec<Section> = sections.iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec![Section::Added, Section::Fixed]);
    }

    #[test]
    fn test_deduplicated_per_section() {
        let sections = group_by_type(&[
            parse_commit("a", "fix: crash on save"),
            parse_commit("b", "fix: Crash on save."),
            parse_commit("c", "feat: crash reporter"),
        ]);
        let deduped = sections.deduplicated();
        assert_eq!(deduped.fixed, strings(&["crash on save"]));
        assert_eq!(deduped.added.len(), 1);
    }
}
