//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Repository discovery
//! - Scan configuration and the branch report pipeline
//!
//! Internal implementation details are not exposed through this API.

// Discovery
#[allow(unused_imports)] // Used by integration tests and benches
pub use super::discovery::find_repos_from_path;

// Report pipeline
pub use super::report::{display_path, run_scan, scan_repo, RepoReport, ScanConfig};

// Configuration
pub use super::config::{get_concurrency, GIT_CONCURRENT_CAP};
