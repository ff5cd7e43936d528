use log_analyzer_domain::{analytics::AnalysisResults, report::Report};

/// Everything one run produced, plus ingest statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub results: AnalysisResults,
    pub total_lines: usize,
    /// 1-based numbers of lines skipped for lacking a client identifier.
    pub skipped_lines: Vec<usize>,
}

impl AnalysisOutcome {
    pub fn report(&self) -> Report {
        Report::from_results(&self.results)
    }

    pub fn processed_lines(&self) -> usize {
        self.total_lines - self.skipped_lines.len()
    }
}
