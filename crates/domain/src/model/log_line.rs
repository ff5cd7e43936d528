// crates/domain/src/model/log_line.rs
//! Field extraction from a single raw access-log record.

/// Substrings that mark a failed login attempt (case-sensitive, not word-bounded).
pub const FAILED_LOGIN_MARKERS: [&str; 2] = ["401", "Invalid credentials"];

/// First whitespace-delimited token, or `None` for blank lines.
#[inline]
pub fn client_id(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

#[inline]
pub fn is_failed_login(line: &str) -> bool {
    FAILED_LOGIN_MARKERS.iter().any(|marker| line.contains(marker))
}

/// 1-based numbers of lines that carry no client identifier.
pub fn malformed_lines<S: AsRef<str>>(lines: &[S]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| client_id(line.as_ref()).is_none())
        .map(|(idx, _)| idx + 1)
        .collect()
}
