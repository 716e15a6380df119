//! Branch listing, primary-branch resolution, and repository naming
//!
//! Primary-branch resolution is an ordered fallback chain: the first
//! strategy that yields a non-empty result wins and no later strategy runs.
//! Every underlying git failure is "this strategy produced no result",
//! never an error for the caller.

use std::path::Path;

use super::operations::GitRunner;

// Git command arguments
const GIT_BRANCH_LIST_ARGS: &[&str] = &["branch", "--format=%(refname:short)"];
const GIT_SYMBOLIC_REF_ARGS: &[&str] = &["symbolic-ref", "refs/remotes/origin/HEAD"];
const GIT_REMOTE_SHOW_ARGS: &[&str] = &["remote", "show", "origin"];
const GIT_REMOTE_URL_ARGS: &[&str] = &["remote", "get-url", "origin"];

const REMOTE_TRACKING_PREFIX: &str = "refs/remotes/origin/";
const HEAD_BRANCH_MARKER: &str = "HEAD branch:";
const UNKNOWN_REPO_NAME: &str = "unknown";

// Probed in order when no remote metadata is usable
const CONVENTIONAL_BRANCHES: &[&str] = &["main", "master"];

/// One step of the primary-branch fallback chain
#[derive(Clone, Copy)]
enum Strategy {
    /// Symbolic target of refs/remotes/origin/HEAD
    RemoteHead,
    /// "HEAD branch:" line of `git remote show origin`
    RemoteShow,
    /// Existence probe for conventional names (main, master)
    NameProbe,
}

const STRATEGY_ORDER: &[Strategy] = &[
    Strategy::RemoteHead,
    Strategy::RemoteShow,
    Strategy::NameProbe,
];

impl Strategy {
    async fn resolve(self, git: &dyn GitRunner, repo: &Path) -> Option<String> {
        match self {
            Strategy::RemoteHead => {
                let target = query(git, repo, GIT_SYMBOLIC_REF_ARGS).await?;
                Some(strip_remote_prefix(&target))
            }
            Strategy::RemoteShow => {
                let output = query(git, repo, GIT_REMOTE_SHOW_ARGS).await?;
                parse_head_branch(&output)
            }
            Strategy::NameProbe => {
                for branch in CONVENTIONAL_BRANCHES {
                    let verify = format!("refs/heads/{branch}");
                    let exists = git
                        .run(repo, &["show-ref", "--verify", &verify])
                        .await
                        .map(|output| output.success)
                        .unwrap_or(false);
                    if exists {
                        return Some((*branch).to_string());
                    }
                }
                None
            }
        }
    }
}

/// Determines the primary branch of a repository, if any
///
/// Returns `None` when every strategy fails (no remote, detached state,
/// unconventional branch names) - "unknown" rather than an error.
pub async fn resolve_primary(git: &dyn GitRunner, repo: &Path) -> Option<String> {
    for strategy in STRATEGY_ORDER {
        if let Some(branch) = strategy.resolve(git, repo).await {
            return Some(branch);
        }
    }
    None
}

/// Lists local branch names for a repository
///
/// Branch names come back verbatim from git apart from trimming. Any
/// listing failure yields an empty list, which downstream treats as
/// "nothing to report" for this repository.
pub async fn list_branches(git: &dyn GitRunner, repo: &Path) -> Vec<String> {
    match query(git, repo, GIT_BRANCH_LIST_ARGS).await {
        Some(output) => output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

/// Derives a friendly repository name from its origin remote URL
///
/// `https://host/owner/repo.git` and `user@host:owner/repo.git` both map to
/// `owner/repo`; without a usable remote the directory name is used.
pub async fn repo_name(git: &dyn GitRunner, repo: &Path) -> String {
    let fallback = || {
        repo.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(UNKNOWN_REPO_NAME)
            .to_string()
    };

    match query(git, repo, GIT_REMOTE_URL_ARGS).await {
        Some(url) => parse_remote_name(&url).unwrap_or_else(fallback),
        None => fallback(),
    }
}

/// Runs one git query; failures of any kind are "no result"
async fn query(git: &dyn GitRunner, repo: &Path, args: &[&str]) -> Option<String> {
    match git.run(repo, args).await {
        Ok(output) => output.text().map(str::to_string),
        Err(_) => None,
    }
}

fn strip_remote_prefix(ref_target: &str) -> String {
    ref_target
        .strip_prefix(REMOTE_TRACKING_PREFIX)
        .unwrap_or(ref_target)
        .to_string()
}

/// Extracts the branch name from the "HEAD branch:" line of
/// `git remote show origin` output
fn parse_head_branch(output: &str) -> Option<String> {
    for line in output.lines() {
        if line.contains(HEAD_BRANCH_MARKER) {
            if let Some((_, value)) = line.split_once(':') {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

fn parse_remote_name(url: &str) -> Option<String> {
    let url = url.strip_suffix(".git").unwrap_or(url);
    if let Some((_, rest)) = url.split_once("://") {
        rest.split_once('/').map(|(_, path)| path.to_string())
    } else if let Some((_, rest)) = url.split_once('@') {
        rest.split_once(':').map(|(_, path)| path.to_string())
    } else {
        None
    }
}
