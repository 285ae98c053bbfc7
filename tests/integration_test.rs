// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use git2::{Commit, ObjectType, Repository, Signature};
use git_semver::git::{self, Git2Repository, Repository as _};
use git_semver::VersionResolver;
use tempfile::TempDir;

// ============================================================================
// Repository fixtures
// ============================================================================

fn init_repo() -> (TempDir, Repository) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let repo = Repository::init(dir.path()).expect("Failed to init repository");
    (dir, repo)
}

fn commit_file(repo: &Repository, name: &str, content: &str, message: &str) {
    let workdir = repo.workdir().unwrap();
    fs::write(workdir.join(name), content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

    let sig = Signature::now("Test User", "test@example.com").unwrap();
    let parents: Vec<Commit> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&Commit> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap();
}

fn tag_head(repo: &Repository, name: &str) {
    let head = repo.head().unwrap().peel(ObjectType::Commit).unwrap();
    repo.tag_lightweight(name, &head, false).unwrap();
}

fn annotated_tag_head(repo: &Repository, name: &str) {
    let head = repo.head().unwrap().peel(ObjectType::Commit).unwrap();
    let sig = Signature::now("Test User", "test@example.com").unwrap();
    repo.tag(name, &head, &sig, "release", false).unwrap();
}

fn resolve_dir(path: &Path) -> String {
    let repo = Git2Repository::open(path).expect("Should open repository");
    VersionResolver::default()
        .resolve(&repo)
        .expect("Should resolve version")
        .to_string()
}

fn run_binary(dir: &Path, extra_args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_git-semver"))
        .arg("-C")
        .arg(dir)
        .args(extra_args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute git-semver")
}

// ============================================================================
// Library against real repositories
// ============================================================================

#[test]
fn test_repository_without_commits() {
    let (dir, _repo) = init_repo();
    assert_eq!(resolve_dir(dir.path()), "v0.0.1+dirty");
}

#[test]
fn test_repository_without_tags() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello\n", "initial");

    let opened = Git2Repository::open(dir.path()).unwrap();
    assert_eq!(opened.latest_tag().unwrap(), None);
    assert_eq!(git::raw_inputs(&opened).unwrap(), None);
    assert_eq!(resolve_dir(dir.path()), "v0.0.1+dirty");
}

#[test]
fn test_exact_tag() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello\n", "initial");
    tag_head(&repo, "v1.2.3");

    let opened = Git2Repository::open(dir.path()).unwrap();
    assert_eq!(opened.latest_tag().unwrap(), Some("v1.2.3".to_string()));
    let describe = opened.describe_long().unwrap().unwrap();
    assert!(
        describe.starts_with("v1.2.3-0-g"),
        "unexpected describe output: {}",
        describe
    );

    assert_eq!(resolve_dir(dir.path()), "v1.2.3");
}

#[test]
fn test_commits_after_tag() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello\n", "initial");
    tag_head(&repo, "v1.2.3");
    commit_file(&repo, "a.txt", "a\n", "second");
    commit_file(&repo, "b.txt", "b\n", "third");

    let opened = Git2Repository::open(dir.path()).unwrap();
    assert_eq!(opened.latest_tag().unwrap(), Some("v1.2.3".to_string()));
    assert_eq!(resolve_dir(dir.path()), "v1.2.4-dev.2");
}

#[test]
fn test_dirty_working_tree() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello\n", "initial");
    tag_head(&repo, "v1.2.3");
    fs::write(dir.path().join("README.md"), "hello, modified world\n").unwrap();

    let opened = Git2Repository::open(dir.path()).unwrap();
    let describe = opened.describe_long().unwrap().unwrap();
    assert!(describe.ends_with("-dirty"), "got {}", describe);

    assert_eq!(resolve_dir(dir.path()), "v1.2.4+dirty");
}

#[test]
fn test_annotated_prerelease_tag() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello\n", "initial");
    annotated_tag_head(&repo, "v2.0.0-beta.1");
    for i in 0..3 {
        commit_file(&repo, "log.txt", &format!("{}\n", i), "work");
    }

    assert_eq!(resolve_dir(dir.path()), "v2.0.0-beta.1.3");
}

#[test]
fn test_discovers_from_subdirectory() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello\n", "initial");
    tag_head(&repo, "v0.3.0");
    let nested = dir.path().join("nested").join("deeper");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(resolve_dir(&nested), "v0.3.0");
}

#[test]
fn test_latest_reachable_tag_wins() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "one\n", "initial");
    tag_head(&repo, "v0.1.0");
    commit_file(&repo, "README.md", "two\n", "second");
    tag_head(&repo, "v0.2.0");
    commit_file(&repo, "README.md", "three\n", "third");

    assert_eq!(resolve_dir(dir.path()), "v0.2.1-dev.1");
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn test_git_semver_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_git-semver"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("git-semver"));
    assert!(stdout.contains("Derive a semantic version"));
}

#[test]
fn test_git_semver_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_git-semver"))
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_binary_prints_single_line() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello\n", "initial");
    tag_head(&repo, "v1.2.3");
    commit_file(&repo, "a.txt", "a\n", "second");

    let output = run_binary(dir.path(), &[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "v1.2.4-dev.1\n");
}

#[test]
fn test_binary_no_dirty_flag() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello\n", "initial");
    tag_head(&repo, "v1.2.3");
    fs::write(dir.path().join("README.md"), "hello, modified world\n").unwrap();

    let output = run_binary(dir.path(), &["--no-dirty"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "v1.2.3\n");
}

#[test]
fn test_binary_malformed_tag() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello\n", "initial");
    tag_head(&repo, "v1.2");

    let output = run_binary(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("1.2"), "stderr: {}", stderr);
}

#[test]
fn test_binary_bad_config() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello\n", "initial");
    let config_path = dir.path().join("broken.toml");
    fs::write(&config_path, "[behavior\n").unwrap();

    let output = run_binary(dir.path(), &["--config", config_path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(8));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_logs_loaded_config_when_verbose() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello\n", "initial");
    tag_head(&repo, "v1.0.0");
    let config_dir = tempfile::tempdir().unwrap();
    let config_path = config_dir.path().join("custom.toml");
    fs::write(&config_path, "[log]\nlevel = \"error\"\n").unwrap();

    let output = run_binary(
        dir.path(),
        &["-vv", "--config", config_path.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "v1.0.0\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("loaded configuration"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_binary_commits_without_tags() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "README.md", "hello\n", "initial");
    commit_file(&repo, "a.txt", "a\n", "second");

    let output = run_binary(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "v0.0.1+dirty\n");
}
