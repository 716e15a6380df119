//! gitwip: list non-primary Git branches in a directory tree
//! Scans for git repositories and groups each repository's branches that are
//! not its primary branch under a path header.

use anyhow::Result;
use clap::{Arg, ArgAction, Command as ClapCommand};
use std::path::PathBuf;
use std::sync::Arc;

use gitwip::core::{get_concurrency, run_scan, ScanConfig};
use gitwip::git::locate_git;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapCommand::new("gitwip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List non-primary Git branches in a directory tree")
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .required(true)
                .help("Root directory to scan for Git repositories"),
        )
        .arg(
            Arg::new("include-hidden")
                .long("include-hidden")
                .help("Include hidden directories (default: hidden dirs are skipped)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("git-path")
                .long("git-path")
                .value_name("PATH")
                .default_value("git")
                .help("Path to the `git` executable (default: use first found in PATH)"),
        )
        .arg(
            Arg::new("jobs")
                .long("jobs")
                .short('j')
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Number of repositories processed concurrently"),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .help("Process one repository at a time")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show the origin-derived repository name in each header")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let git_program = matches
        .get_one::<String>("git-path")
        .expect("git-path has a default value");
    let git = match locate_git(git_program).await {
        Ok(git) => git,
        Err(e) => {
            println!("Error: {e}");
            std::process::exit(1);
        }
    };

    let raw_root = PathBuf::from(
        matches
            .get_one::<String>("path")
            .expect("path is a required argument"),
    );
    let root = match raw_root.canonicalize() {
        Ok(root) if root.is_dir() => root,
        _ => {
            println!("Invalid path: {}", raw_root.display());
            std::process::exit(1);
        }
    };

    let config = ScanConfig {
        root,
        skip_hidden: !matches.get_flag("include-hidden"),
        concurrency: get_concurrency(
            matches.get_one::<usize>("jobs").copied(),
            matches.get_flag("sequential"),
        ),
        verbose: matches.get_flag("verbose"),
    };

    run_scan(config, Arc::new(git)).await
}
