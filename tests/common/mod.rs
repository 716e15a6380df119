//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod git;

pub use self::fixtures::TestRepoBuilder;
pub use self::git::{
    add_git_remote, create_branch, create_test_commit, is_git_available, rename_current_branch,
    set_origin_head, setup_git_repo,
};
