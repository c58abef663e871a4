//! Integration tests for git queries against real repositories.

mod common;

use common::TestRepo;
use versionctl::commit::{FileStatus, staged_changes};
use versionctl::git::{
    CommitKind, SystemGit, commits_since_last_tag, discover_workdir, last_commit, open_workdir,
};
use versionctl::error::GitError;

#[test]
fn test_commits_since_last_tag_stops_at_tag() {
    let repo = TestRepo::new();
    let first = repo.commit_file("a.txt", "a", "feat: initial import");
    repo.tag("v0.1.0", first);
    repo.commit_file("b.txt", "b", "feat(api): add endpoint");
    repo.commit_file("c.txt", "c", "fixed crash on startup");

    let git = SystemGit::new(repo.path());
    let commits = commits_since_last_tag(&git);

    assert_eq!(commits.len(), 2);
    // Newest first, as git log lists them
    assert_eq!(commits[0].kind, CommitKind::Fix);
    assert_eq!(commits[0].description, "fixed crash on startup");
    assert_eq!(commits[1].kind, CommitKind::Feat);
    assert_eq!(commits[1].scope.as_deref(), Some("api"));
    assert_eq!(commits[1].hash.len(), 7);
}

#[test]
fn test_commits_without_tag_cover_full_history() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "a", "chore: init");
    repo.commit_file("b.txt", "b", "docs: readme");

    let git = SystemGit::new(repo.path());
    let commits = commits_since_last_tag(&git);

    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].kind, CommitKind::Docs);
    assert_eq!(commits[1].kind, CommitKind::Chore);
}

#[test]
fn test_commits_in_empty_repository_is_empty() {
    let repo = TestRepo::new();
    let git = SystemGit::new(repo.path());
    assert!(commits_since_last_tag(&git).is_empty());
}

#[test]
fn test_last_commit_reports_changed_and_added_files() {
    let repo = TestRepo::new();
    repo.commit_file("src/app.js", "one", "chore: init");

    repo.write("src/app.js", "two");
    repo.write("src/new.js", "new");
    repo.stage(&["src/app.js", "src/new.js"]);
    repo.commit_staged("feat: add new module");

    let git = SystemGit::new(repo.path());
    let last = last_commit(&git);

    assert_eq!(last.message, "feat: add new module");
    assert_eq!(last.changed_files, vec!["src/app.js", "src/new.js"]);
    assert_eq!(last.added_files, vec!["src/new.js"]);
}

#[test]
fn test_last_commit_in_empty_repository_has_no_message() {
    let repo = TestRepo::new();
    let git = SystemGit::new(repo.path());
    assert!(last_commit(&git).message.is_empty());
}

#[test]
fn test_staged_changes_reports_status_and_line_counts() {
    let repo = TestRepo::new();
    repo.commit_file("lib.rs", "a\nb\nc\n", "chore: init");

    repo.write("lib.rs", "a\nc\nd\ne\n");
    repo.write("docs/guide.md", "# Guide\n");
    repo.stage(&["lib.rs", "docs/guide.md"]);

    let git = SystemGit::new(repo.path());
    let mut changes = staged_changes(&git);
    changes.sort_by(|a, b| a.path.cmp(&b.path));

    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].path, "docs/guide.md");
    assert_eq!(changes[0].status, FileStatus::Added);
    assert_eq!(changes[0].additions, 1);
    assert_eq!(changes[1].path, "lib.rs");
    assert_eq!(changes[1].status, FileStatus::Modified);
    assert_eq!(changes[1].additions, 2);
    assert_eq!(changes[1].deletions, 1);
}

#[test]
fn test_staged_changes_empty_when_nothing_staged() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "a", "chore: init");
    repo.write("a.txt", "changed but not staged");

    let git = SystemGit::new(repo.path());
    assert!(staged_changes(&git).is_empty());
}

#[test]
fn test_open_workdir_from_subdirectory() {
    let repo = TestRepo::new();
    repo.commit_file("nested/file.txt", "x", "chore: init");

    let workdir = open_workdir(&repo.path().join("nested")).unwrap();
    assert_eq!(
        workdir.canonicalize().unwrap(),
        repo.path().canonicalize().unwrap()
    );
}

#[test]
fn test_open_workdir_without_commits() {
    let repo = TestRepo::new();
    let result = open_workdir(repo.path());
    assert!(matches!(result, Err(GitError::NoCommits)));
}

#[test]
fn test_discover_workdir_sees_first_staged_files() {
    let repo = TestRepo::new();
    repo.write("src/main.js", "console.log(1)");
    repo.stage(&["src/main.js"]);

    let workdir = discover_workdir(&repo.path().join("src")).unwrap();
    let changes = staged_changes(&SystemGit::new(&workdir));

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].status, FileStatus::Added);
}
