//! Repository discovery: locating git repositories under a root directory

use dashmap::DashMap;
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::config::{ESTIMATED_REPO_COUNT, GIT_DIR_NAME, MAX_WALKER_THREADS};

/// Recursively searches for git repositories under `search_path`
/// Returns deduplicated, canonicalized repository roots sorted by path
///
/// This function uses parallel directory walking for significantly better
/// performance with large directory trees. Uses `DashMap` for lock-free
/// concurrent access, eliminating mutex contention.
///
/// Traversal rules:
/// - A directory containing a `.git` directory is a repository root; its
///   subdirectories are not descended into (nested repositories such as
///   submodules are not reported separately).
/// - With `skip_hidden`, dot-directories below the root are pruned, except
///   `.git` itself which must stay visible for detection.
/// - Unreadable directories are skipped; the walk continues with siblings.
pub fn find_repos_from_path(search_path: impl AsRef<Path>, skip_hidden: bool) -> Vec<PathBuf> {
    let search_path = search_path.as_ref();

    // DashMap keyed by canonical path: symlinks and overlapping traversal
    // paths must not yield duplicate reports
    let repos_map: Arc<DashMap<PathBuf, ()>> =
        Arc::new(DashMap::with_capacity(ESTIMATED_REPO_COUNT));
    let repos_map_clone = Arc::clone(&repos_map);

    let walker = WalkBuilder::new(search_path)
        .follow_links(true) // Follow symlinks to find symlinked repos
        .threads(num_cpus::get().min(MAX_WALKER_THREADS))
        .standard_filters(false) // No gitignore semantics; visibility is decided below
        .filter_entry(move |entry| {
            let file_name = entry.file_name().to_str().unwrap_or("");
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());

            // A .git directory marks its parent as a repository root
            if file_name == GIT_DIR_NAME {
                if is_dir {
                    if let Some(repo_path) = entry.path().parent() {
                        let canonical = fs::canonicalize(repo_path)
                            .unwrap_or_else(|_| repo_path.to_path_buf());
                        repos_map_clone.entry(canonical).or_insert(());
                    }
                }
                // Never descend into .git
                return false;
            }

            // Skip hidden directories (the root itself is always visited)
            if skip_hidden && entry.depth() > 0 && file_name.starts_with('.') {
                return false;
            }

            // Stop at repository boundaries: a directory whose parent holds
            // a .git directory belongs to an already recorded repository
            if is_dir && entry.depth() > 0 {
                if let Some(parent) = entry.path().parent() {
                    if parent.join(GIT_DIR_NAME).is_dir() {
                        return false;
                    }
                }
            }

            true
        })
        .build_parallel();

    // Walk the directory tree in parallel - logic lives in filter_entry;
    // read errors are dropped, which skips unreadable directories
    walker.run(|| Box::new(|_| ignore::WalkState::Continue));

    let mut repos: Vec<PathBuf> = Arc::try_unwrap(repos_map)
        .map(|map| map.into_iter().map(|(p, ())| p).collect())
        .unwrap_or_else(|arc| arc.iter().map(|r| r.key().clone()).collect());

    // Deterministic report order: ascending by path string, not by
    // component (`foo-bar` sorts before `foo/baz`)
    repos.par_sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    repos
}
