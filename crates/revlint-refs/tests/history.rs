//! Revision resolution and ranges against real git histories.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use revlint_refs::{fetch_interval, resolve_revision, RevisionError};
use revlint_repo::GitRepository;
use revlint_types::{CommitId, CommitRecord};

struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        run_git(dir.path(), &["init", "--quiet"]);
        run_git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/master"]);
        configure(dir.path());
        Self { dir }
    }

    /// A shallow clone of this repository's `master`, `depth` commits deep.
    fn shallow_clone(&self, depth: usize) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let target = dir.path().join("clone");
        let source = format!("file://{}", self.path().display());
        run_git(
            dir.path(),
            &[
                "clone",
                "--quiet",
                "--depth",
                &depth.to_string(),
                "--branch",
                "master",
                &source,
                "clone",
            ],
        );
        configure(&target);
        (dir, target)
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn open(&self) -> GitRepository {
        GitRepository::open(self.path()).expect("failed to open test repo")
    }

    fn commit(&self, message: &str) -> CommitId {
        commit(self.path(), message)
    }

    fn git(&self, args: &[&str]) {
        run_git(self.path(), args);
    }
}

fn configure(dir: &Path) {
    run_git(dir, &["config", "user.email", "test@example.com"]);
    run_git(dir, &["config", "user.name", "Test User"]);
    run_git(dir, &["config", "commit.gpgsign", "false"]);
}

fn commit(dir: &Path, message: &str) -> CommitId {
    run_git(dir, &["commit", "--quiet", "--allow-empty", "-m", message]);
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(dir)
        .output()
        .expect("git rev-parse failed");
    let hex = String::from_utf8(output.stdout).unwrap();
    CommitId::from_hex(hex.trim()).unwrap()
}

fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

fn summaries(commits: &[CommitRecord]) -> Vec<&str> {
    commits.iter().map(|c| c.summary()).collect()
}

#[test]
fn linear_history() {
    let repo = TestRepo::new();
    repo.commit("commit 1");
    repo.git(&["branch", "test"]);
    for i in 2..=5 {
        repo.commit(&format!("commit {i}"));
    }

    let commits = fetch_interval(&repo.open(), "test", "master").unwrap();
    assert_eq!(
        summaries(&commits),
        vec!["commit 5", "commit 4", "commit 3", "commit 2"]
    );
}

#[test]
fn head_resolves_like_checked_out_branch() {
    let repo = TestRepo::new();
    repo.commit("first");
    let second = repo.commit("second");
    repo.commit("third");

    let git = repo.open();
    let head = resolve_revision("HEAD", &git).unwrap();
    let master = resolve_revision("master", &git).unwrap();
    assert_eq!(head, master);
    assert_eq!(resolve_revision("head^", &git).unwrap().id, second);
}

#[test]
fn commit_id_with_path() {
    let repo = TestRepo::new();
    let first = repo.commit("first");
    let second = repo.commit("second");
    repo.commit("third");

    let git = repo.open();
    let resolved = resolve_revision(&format!("{second}~1"), &git).unwrap();
    assert_eq!(resolved.id, first);
}

#[test]
fn merge_history() {
    let repo = TestRepo::new();
    repo.commit("base");
    repo.git(&["tag", "base"]);
    repo.git(&["checkout", "--quiet", "-b", "feature"]);
    repo.commit("feature 1");
    repo.commit("feature 2");
    repo.git(&["checkout", "--quiet", "master"]);
    repo.commit("master 1");
    repo.git(&["merge", "--quiet", "--no-ff", "-m", "merge feature", "feature"]);
    repo.commit("master 2");

    let git = repo.open();
    let commits = fetch_interval(&git, "base", "master").unwrap();
    assert_eq!(
        summaries(&commits),
        vec![
            "master 2",
            "merge feature",
            "feature 2",
            "feature 1",
            "master 1"
        ]
    );

    let commits = fetch_interval(&git, "feature", "master").unwrap();
    assert_eq!(
        summaries(&commits),
        vec!["master 2", "merge feature", "master 1"]
    );

    assert_eq!(
        resolve_revision("master~1^2", &git).unwrap().summary(),
        "feature 2"
    );
}

#[test]
fn empty_range() {
    let repo = TestRepo::new();
    repo.commit("first");
    repo.commit("second");

    let err = fetch_interval(&repo.open(), "master", "master").unwrap_err();
    assert!(matches!(err, RevisionError::NoDiffBetweenReferences { .. }));
}

#[test]
fn unknown_reference() {
    let repo = TestRepo::new();
    repo.commit("first");

    let err = fetch_interval(&repo.open(), "whatever", "master").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Reference \"whatever\" can't be found in git repository"
    );
}

#[test]
fn shallow_clone_range() {
    let repo = TestRepo::new();
    for i in 1..=5 {
        repo.commit(&format!("commit {i}"));
    }
    let (_guard, clone) = repo.shallow_clone(3);

    let git = GitRepository::open(&clone).unwrap();
    assert!(git.is_shallow());
    let commits = fetch_interval(&git, "HEAD~2", "HEAD").unwrap();
    assert_eq!(summaries(&commits), vec!["commit 5", "commit 4"]);
}

#[test]
fn shallow_boundary_does_not_abort_traversal() {
    let repo = TestRepo::new();
    for i in 1..=5 {
        repo.commit(&format!("commit {i}"));
    }
    let (_guard, clone) = repo.shallow_clone(2);

    // An unrelated root commit, so the walk from master runs into the
    // shallow boundary.
    run_git(&clone, &["checkout", "--quiet", "--orphan", "side"]);
    commit(&clone, "side root");

    let git = GitRepository::open(&clone).unwrap();
    let commits = fetch_interval(&git, "side", "master").unwrap();
    assert_eq!(summaries(&commits), vec!["commit 5", "commit 4"]);
}
