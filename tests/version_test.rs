//! Integration tests for version suggestion from the last commit.

mod common;

use common::TestRepo;
use semver::Version;
use versionctl::git::{SystemGit, last_commit};
use versionctl::i18n::Language;
use versionctl::version::{BumpLevel, Reason, analyze, bump_version};

fn suggest(repo: &TestRepo) -> (BumpLevel, Vec<Reason>) {
    let git = SystemGit::new(repo.path());
    let last = last_commit(&git);
    let analysis = analyze(&last.message, &last.changed_files, &last.added_files);
    (analysis.bump_level, analysis.reasons)
}

#[test]
fn test_new_file_suggests_minor() {
    let repo = TestRepo::new();
    repo.commit_file("src/app.js", "v1", "chore: init");
    repo.commit_file("src/report.js", "report", "chore: wire report");

    let (level, reasons) = suggest(&repo);
    assert_eq!(level, BumpLevel::Minor);
    assert_eq!(reasons, vec![Reason::NewFiles { count: 1 }]);
}

#[test]
fn test_fix_on_existing_file_suggests_patch() {
    let repo = TestRepo::new();
    repo.commit_file("src/app.js", "v1", "chore: init");
    repo.commit_file("src/app.js", "v2", "fix: null check in loader");

    let (level, reasons) = suggest(&repo);
    assert_eq!(level, BumpLevel::Patch);
    assert_eq!(reasons, vec![Reason::BugFix]);
}

#[test]
fn test_removal_suggests_major() {
    let repo = TestRepo::new();
    repo.commit_file("src/app.js", "v1", "chore: init");
    repo.commit_file("src/app.js", "v2", "Remove legacy export");

    let (level, reasons) = suggest(&repo);
    assert_eq!(level, BumpLevel::Major);
    assert_eq!(reasons, vec![Reason::Breaking]);
}

#[test]
fn test_config_change_with_entry_point_suggests_minor() {
    let repo = TestRepo::new();
    repo.commit_file("tasks.config.js", "module.exports = {}", "chore: init");
    repo.commit_file("tasks.config.js", "module.exports = { a: 1 }", "tweak tasks");

    let (level, reasons) = suggest(&repo);
    assert_eq!(level, BumpLevel::Minor);
    assert_eq!(reasons, vec![Reason::ConfigModified]);
}

#[test]
fn test_reasons_are_localised() {
    let reason = Reason::NewFiles { count: 3 };
    assert!(reason.describe(Language::En).starts_with("🟡 3 "));
    assert_ne!(
        Reason::BugFix.describe(Language::En),
        Reason::BugFix.describe(Language::Pt)
    );
}

#[test]
fn test_bump_resets_lower_components() {
    let current = Version::new(1, 4, 7);
    assert_eq!(bump_version(&current, BumpLevel::Major), Version::new(2, 0, 0));
    assert_eq!(bump_version(&current, BumpLevel::Minor), Version::new(1, 5, 0));
    assert_eq!(bump_version(&current, BumpLevel::Patch), Version::new(1, 4, 8));
}

#[test]
fn test_bump_drops_prerelease() {
    let current = Version::parse("2.0.0-beta.1").unwrap();
    assert_eq!(bump_version(&current, BumpLevel::Patch), Version::new(2, 0, 1));
}
