use log_analyzer_shared_kernel::Threshold;

use super::{EndpointSummary, analyze_endpoints, count_requests, detect_suspicious};
use crate::model::CountMap;

/// The three independent aggregates computed from one log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResults {
    pub request_counts: CountMap,
    pub endpoints: EndpointSummary,
    pub suspicious: CountMap,
}

/// Run every analysis sequentially over `lines`.
pub fn analyze<S: AsRef<str>>(lines: &[S], threshold: Threshold) -> AnalysisResults {
    AnalysisResults {
        request_counts: count_requests(lines),
        endpoints: analyze_endpoints(lines),
        suspicious: detect_suspicious(lines, threshold),
    }
}
