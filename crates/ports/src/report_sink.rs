// crates/ports/src/report_sink.rs
use std::path::Path;

use log_analyzer_domain::report::Report;
use log_analyzer_shared_kernel::Result;

/// Port persisting a complete (never truncated) report.
pub trait ReportSink {
    fn persist(&self, report: &Report) -> Result<()>;

    /// Destination shown to the user after a successful write.
    fn location(&self) -> &Path;
}
