use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::CountMap;

/// The endpoint with the highest access count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostAccessed {
    pub endpoint: String,
    pub count: usize,
}

/// Per-endpoint tally plus the most accessed entry (absent when nothing matched).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointSummary {
    pub counts: CountMap,
    pub most_accessed: Option<MostAccessed>,
}

fn quoted_request_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""(GET|POST) (.+?) "#).expect("valid quoted request pattern"))
}

fn bare_request_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|\s)(GET|POST) (.+?) ").expect("valid bare request pattern"))
}

/// Path from the first `"GET <path> ` / `"POST <path> ` fragment.
///
/// Only lines without any double quote fall back to an unquoted
/// `GET <path> ` starting at a token boundary.
pub fn extract_endpoint(line: &str) -> Option<&str> {
    let caps = if line.contains('"') {
        quoted_request_re().captures(line)
    } else {
        bare_request_re().captures(line)
    };
    caps.and_then(|caps| caps.get(2)).map(|m| m.as_str())
}

pub fn analyze_endpoints<S: AsRef<str>>(lines: &[S]) -> EndpointSummary {
    let counts: CountMap = lines.iter().filter_map(|line| extract_endpoint(line.as_ref())).collect();
    let most_accessed = counts
        .first_max()
        .map(|(endpoint, count)| MostAccessed { endpoint: endpoint.to_owned(), count });
    if most_accessed.is_none() {
        log::debug!("no GET/POST request found in {} line(s)", lines.len());
    }
    EndpointSummary { counts, most_accessed }
}
