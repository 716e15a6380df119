//! Branch report building: per-repository processing and grouped output

use anyhow::Result;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::git::{list_branches, repo_name, resolve_primary, GitRunner};
use crate::utils::{style_branch, style_header};

use super::discovery::find_repos_from_path;

/// Immutable inputs for one scan, fixed for the whole run
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Root directory to scan
    pub root: PathBuf,
    /// Prune dot-directories during discovery
    pub skip_hidden: bool,
    /// Bound on concurrently processed repositories
    pub concurrency: usize,
    /// Include the origin-derived repository name in headers
    pub verbose: bool,
}

/// Report entry for one repository with a non-empty filtered branch list
#[derive(Clone, Debug)]
pub struct RepoReport {
    pub display_path: String,
    /// Origin-derived name, present in verbose mode only
    pub name: Option<String>,
    /// Non-primary branches, in listing order
    pub branches: Vec<String>,
}

/// Runs the full scan and prints the grouped report incrementally
///
/// Repositories are processed with bounded concurrency; `buffered` keeps the
/// output in discovery order (sorted by path) regardless of completion order.
pub async fn run_scan(config: ScanConfig, git: Arc<dyn GitRunner>) -> Result<()> {
    let root = config.root.clone();
    let skip_hidden = config.skip_hidden;
    let repos = tokio::task::spawn_blocking(move || find_repos_from_path(root, skip_hidden))
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error in repository discovery: {e}");
            Vec::new()
        });

    // Canonicalize so a symlinked home still matches the canonicalized
    // repository paths when relativizing
    let home = dirs::home_dir().map(|h| std::fs::canonicalize(&h).unwrap_or(h));
    let verbose = config.verbose;

    let mut reports = stream::iter(repos.into_iter().map(|path| {
        let git = Arc::clone(&git);
        let home = home.clone();
        async move { scan_repo(git.as_ref(), path, home.as_deref(), verbose).await }
    }))
    .buffered(config.concurrency.max(1));

    while let Some(report) = reports.next().await {
        if let Some(report) = report {
            print_report(&report);
        }
    }

    Ok(())
}

/// Processes one repository: list branches, resolve the primary, filter
///
/// Returns `None` when the filtered list is empty - the repository is then
/// omitted from the report entirely. With no resolved primary nothing is
/// filtered out; there is nothing established to exclude.
pub async fn scan_repo(
    git: &dyn GitRunner,
    path: PathBuf,
    home: Option<&Path>,
    verbose: bool,
) -> Option<RepoReport> {
    let all_branches = list_branches(git, &path).await;
    let primary = resolve_primary(git, &path).await;

    // Byte-for-byte comparison, no case/whitespace normalization
    let branches: Vec<String> = match &primary {
        Some(primary) => all_branches.into_iter().filter(|b| b != primary).collect(),
        None => all_branches,
    };

    if branches.is_empty() {
        return None;
    }

    let name = if verbose {
        Some(repo_name(git, &path).await)
    } else {
        None
    };
    let display_path = display_path(&path, home);

    Some(RepoReport {
        display_path,
        name,
        branches,
    })
}

/// Renders a repository path for display
///
/// Paths under the home directory render as `~/...`; the home directory
/// itself renders as `~`. Any relativization mismatch falls back to the
/// absolute path - this computation never fails.
pub fn display_path(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home {
        if let Ok(rel) = path.strip_prefix(home) {
            if rel.as_os_str().is_empty() {
                return "~".to_string();
            }
            return format!("~/{}", rel.display());
        }
    }
    path.display().to_string()
}

fn print_report(report: &RepoReport) {
    let header = match &report.name {
        Some(name) => format!("=== {} ({}) ===", report.display_path, name),
        None => format!("=== {} ===", report.display_path),
    };
    println!("{}", style_header(&header));
    for branch in &report.branches {
        println!("{}", style_branch(&format!("* {branch}")));
    }
    println!();
}
