use std::sync::OnceLock;

use regex::Regex;

pub fn trim_edges(s: &str) -> String {
    s.trim().to_string()
}

/// Collapses every run of two or more spaces into a single space.
/// Only the ASCII space is affected; tabs and newlines are kept as they are.
pub fn collapse_spaces(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r" {2,}").unwrap());

    re.replace_all(s, " ").to_string()
}

/// Single left to right pass replacing each non-overlapping pair of spaces
/// with one space. Runs of three or more spaces are only partially collapsed.
pub fn collapse_double_spaces(s: &str) -> String {
    s.replace("  ", " ")
}
