use crate::model::{CountMap, client_id};

/// Requests per client identifier. Lines without a token are skipped.
pub fn count_requests<S: AsRef<str>>(lines: &[S]) -> CountMap {
    lines.iter().filter_map(|line| client_id(line.as_ref())).collect()
}
