//! Terminal styling for report output

// ANSI escape sequences
const ANSI_HEADER: &str = "\x1b[1;36m"; // bright cyan
const ANSI_BRANCH: &str = "\x1b[0;33m"; // yellow
const ANSI_RESET: &str = "\x1b[0m";

/// Styles a repository header line
pub fn style_header(text: &str) -> String {
    format!("{ANSI_HEADER}{text}{ANSI_RESET}")
}

/// Styles a branch line
pub fn style_branch(text: &str) -> String {
    format!("{ANSI_BRANCH}{text}{ANSI_RESET}")
}
