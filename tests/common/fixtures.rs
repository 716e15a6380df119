//! Test fixtures and builders

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

use super::git::{
    add_git_remote, create_branch, create_test_commit, rename_current_branch, set_origin_head,
    setup_git_repo,
};

/// A test repository with automatic cleanup
#[allow(dead_code)]
pub struct TestRepo {
    pub temp_dir: TempDir,
}

impl TestRepo {
    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Builder for creating test repositories with a known branch layout
pub struct TestRepoBuilder {
    current_branch: String,
    extra_branches: Vec<String>,
    remote_url: Option<String>,
    origin_head: Option<String>,
}

impl TestRepoBuilder {
    pub fn new() -> Self {
        Self {
            current_branch: "main".to_string(),
            extra_branches: Vec::new(),
            remote_url: None,
            origin_head: None,
        }
    }

    /// Name of the checked-out branch (default: main)
    pub fn current_branch(mut self, name: impl Into<String>) -> Self {
        self.current_branch = name.into();
        self
    }

    /// Additional local branches created at HEAD
    pub fn with_branch(mut self, name: impl Into<String>) -> Self {
        self.extra_branches.push(name.into());
        self
    }

    /// Configures an `origin` remote with the given URL
    pub fn with_remote(mut self, url: impl Into<String>) -> Self {
        self.remote_url = Some(url.into());
        self
    }

    /// Points refs/remotes/origin/HEAD at the given branch
    pub fn with_origin_head(mut self, branch: impl Into<String>) -> Self {
        self.origin_head = Some(branch.into());
        self
    }

    pub fn build(self) -> Result<TestRepo> {
        let temp_dir = TempDir::new()?;
        self.build_at(temp_dir.path())?;
        Ok(TestRepo { temp_dir })
    }

    /// Builds the repository in an existing directory
    pub fn build_at(self, path: &Path) -> Result<()> {
        setup_git_repo(path)?;
        create_test_commit(path, "README.md", "# Test Repo", "Initial commit")?;
        rename_current_branch(path, &self.current_branch)?;

        for branch in &self.extra_branches {
            create_branch(path, branch)?;
        }

        if let Some(url) = &self.remote_url {
            add_git_remote(path, "origin", url)?;
        }

        if let Some(branch) = &self.origin_head {
            set_origin_head(path, branch)?;
        }

        Ok(())
    }
}

impl Default for TestRepoBuilder {
    fn default() -> Self {
        Self::new()
    }
}
