//! Git command execution
//!
//! All git interaction goes through the [`GitRunner`] trait so branch
//! resolution and filtering logic can be unit-tested against a fake runner
//! instead of a real git binary.

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

// Timeout constants
const GIT_OPERATION_TIMEOUT_SECS: u64 = 30; // Per query; all queries are local and read-only

/// Captured result of one git invocation
///
/// Stderr is captured but discarded: diagnostic output from failed queries
/// (no remote configured, detached HEAD, unset symbolic ref) is suppressed,
/// never surfaced to the user.
#[derive(Clone, Debug)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: String,
}

impl GitOutput {
    /// Returns trimmed stdout when the invocation succeeded with output
    pub fn text(&self) -> Option<&str> {
        let trimmed = self.stdout.trim();
        if self.success && !trimmed.is_empty() {
            Some(trimmed)
        } else {
            None
        }
    }
}

/// Capability to run git subcommands against a repository
#[async_trait]
pub trait GitRunner: Send + Sync {
    /// Runs `git -C <repo> <args...>` and captures stdout and exit status
    async fn run(&self, repo: &Path, args: &[&str]) -> Result<GitOutput>;
}

/// Runs a validated git executable as a subprocess
#[derive(Clone, Debug)]
pub struct SystemGit {
    program: PathBuf,
}

impl SystemGit {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[async_trait]
impl GitRunner for SystemGit {
    async fn run(&self, repo: &Path, args: &[&str]) -> Result<GitOutput> {
        let timeout_duration = Duration::from_secs(GIT_OPERATION_TIMEOUT_SECS);

        let result = tokio::time::timeout(
            timeout_duration,
            Command::new(&self.program)
                .arg("-C")
                .arg(repo)
                .args(args)
                .output(),
        )
        .await;

        match result {
            Ok(Ok(output)) => Ok(GitOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            }),
            Ok(Err(e)) => Err(e.into()),
            Err(_) => Err(anyhow::anyhow!(
                "Git operation timed out after {} seconds",
                GIT_OPERATION_TIMEOUT_SECS
            )),
        }
    }
}

/// Validates that `program` is a runnable git executable
///
/// Resolution is left to the OS: a bare name is looked up on PATH, a path is
/// used as-is. Failure here is fatal; the scan never starts with an invalid
/// executable.
pub async fn locate_git(program: &str) -> Result<SystemGit> {
    let probe = Command::new(program).arg("--version").output().await;

    match probe {
        Ok(output) if output.status.success() => Ok(SystemGit::new(program)),
        Ok(_) => Err(anyhow::anyhow!(
            "`{}` is not a valid Git executable.",
            program
        )),
        Err(_) => Err(anyhow::anyhow!(
            "`{}` is not installed or not found in PATH.",
            program
        )),
    }
}
