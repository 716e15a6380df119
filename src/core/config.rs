//! Configuration constants and settings

// Concurrency Configuration
//
// Per-repository processing is I/O-bound (a handful of short-lived git
// queries per repository), so moderate concurrency gives the best wall-clock
// time without spawning an unbounded number of git processes.

// Default concurrency cap for per-repository git processing
pub const GIT_CONCURRENT_CAP: usize = 12;

/// Determines the concurrency limit for per-repository processing
///
/// Priority order:
/// 1. --sequential flag → 1
/// 2. --jobs N flag → N
/// 3. Smart default → min(CPU_CORES + 2, 12)
pub fn get_concurrency(jobs: Option<usize>, sequential: bool) -> usize {
    if sequential {
        return 1;
    }

    if let Some(n) = jobs {
        return n.max(1); // Ensure at least 1
    }

    // Smart default: CPU cores + 2, capped at 12
    let cpu_count = num_cpus::get();
    (cpu_count + 2).min(GIT_CONCURRENT_CAP)
}

// Repository discovery configuration
pub const ESTIMATED_REPO_COUNT: usize = 50; // Pre-allocation hint for collections
pub const MAX_WALKER_THREADS: usize = 8;

// The .git entry marks a repository root and must stay visible even when
// hidden directories are skipped
pub const GIT_DIR_NAME: &str = ".git";
