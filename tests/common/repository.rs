//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with
//! various states for shell integration tests.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path for a menu configuration file inside the fixture, so tests
    /// never touch the real user-scoped configuration.
    pub fn menu_config(&self) -> PathBuf {
        self.path.join("menu_config.json")
    }
}

/// Sets up a fresh git repository with basic configuration so commits
/// never prompt for identity.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt".
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])
}

pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])
}

fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;
    Ok(())
}

/// An ezgit invocation pinned to the fixture repository and its private
/// menu configuration.
pub fn ezgit_in(repo: &TestRepo) -> Result<assert_cmd::Command> {
    let mut cmd = assert_cmd::Command::cargo_bin("ezgit")?;
    cmd.current_dir(&repo.path)
        .arg("--menu-config")
        .arg(repo.menu_config());
    Ok(cmd)
}
