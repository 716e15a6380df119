//! # gitwip
//!
//! `gitwip` scans a directory tree for Git repositories and reports, per
//! repository, every local branch that is not the repository's primary
//! branch. It powers the `gitwip` CLI tool.
//!
//! ## Core Features
//!
//! - **Fast Discovery**: Parallel repository scanning using `ignore` and `rayon`.
//! - **Primary Branch Resolution**: Ordered fallback chain over `origin/HEAD`,
//!   `remote show origin`, and conventional `main`/`master` probes.
//! - **Grouped Reports**: Repositories sorted by path, branches grouped under
//!   a `~/`-relative header, repositories with nothing to report omitted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gitwip::core::find_repos_from_path;
//!
//! fn main() {
//!     let repos = find_repos_from_path(".", true);
//!     for path in repos {
//!         println!("{}", path.display());
//!     }
//! }
//! ```

pub mod core;
pub mod git;
pub mod utils;
