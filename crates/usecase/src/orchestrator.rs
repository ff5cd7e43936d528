use log_analyzer_domain::{
    analytics::{AnalysisResults, analyze},
    config::AnalysisConfig,
    model::malformed_lines,
};
use log_analyzer_ports::{LineSource, ReportSink};
use log_analyzer_shared_kernel::{DomainError, ErrorContext, Result, Threshold};

use crate::dto::AnalysisOutcome;

/// Reads every line from the source and runs the three analyses over it.
pub struct AnalyzeLog<'a> {
    source: &'a dyn LineSource,
}

impl<'a> AnalyzeLog<'a> {
    pub fn new(source: &'a dyn LineSource) -> Self {
        Self { source }
    }

    pub fn run(&self, config: &AnalysisConfig) -> Result<AnalysisOutcome> {
        let lines = self
            .source
            .read_lines()
            .with_context(|| format!("reading {}", self.source.describe()))?;
        log::info!("read {} lines from {}", lines.len(), self.source.describe());

        let skipped_lines = malformed_lines(&lines);
        if let Some(&line_number) = skipped_lines.first() {
            if config.strict {
                return Err(DomainError::MalformedLine { line_number }.into());
            }
            for n in &skipped_lines {
                log::debug!("skipping line {n}: no client identifier");
            }
            log::warn!("skipped {} line(s) without a client identifier", skipped_lines.len());
        }

        let results = compute(&lines, config.threshold, config.parallel);
        log::info!(
            "{} clients, {} endpoints, {} suspicious client(s) above threshold {}",
            results.request_counts.len(),
            results.endpoints.counts.len(),
            results.suspicious.len(),
            config.threshold
        );

        Ok(AnalysisOutcome { results, total_lines: lines.len(), skipped_lines })
    }
}

#[cfg(feature = "parallel")]
fn compute(lines: &[String], threshold: Threshold, parallel: bool) -> AnalysisResults {
    use log_analyzer_domain::analytics::{analyze_endpoints, count_requests, detect_suspicious};

    if !parallel {
        return analyze(lines, threshold);
    }
    let (request_counts, (endpoints, suspicious)) = rayon::join(
        || count_requests(lines),
        || rayon::join(|| analyze_endpoints(lines), || detect_suspicious(lines, threshold)),
    );
    AnalysisResults { request_counts, endpoints, suspicious }
}

#[cfg(not(feature = "parallel"))]
fn compute(lines: &[String], threshold: Threshold, _parallel: bool) -> AnalysisResults {
    analyze(lines, threshold)
}

/// Persists the full report through a [`ReportSink`].
pub struct PersistReport<'a> {
    sink: &'a dyn ReportSink,
}

impl<'a> PersistReport<'a> {
    pub fn new(sink: &'a dyn ReportSink) -> Self {
        Self { sink }
    }

    pub fn run(&self, outcome: &AnalysisOutcome) -> Result<()> {
        let report = outcome.report();
        self.sink.persist(&report)?;
        log::info!("report written to {}", self.sink.location().display());
        Ok(())
    }
}
