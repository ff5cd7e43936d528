use log_analyzer_shared_kernel::Threshold;

use crate::model::{CountMap, client_id, is_failed_login};

/// Failed-login indicators per client, unfiltered.
pub fn count_failed_logins<S: AsRef<str>>(lines: &[S]) -> CountMap {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| is_failed_login(line))
        .filter_map(client_id)
        .collect()
}

/// Clients whose failed-login count is strictly above `threshold`, in first-seen order.
pub fn detect_suspicious<S: AsRef<str>>(lines: &[S], threshold: Threshold) -> CountMap {
    let mut failed = count_failed_logins(lines);
    failed.retain(|_, count| threshold.is_exceeded_by(count));
    failed
}
