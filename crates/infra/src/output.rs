//! Report renderers and the file-backed [`ReportSink`].

pub mod console;
pub mod delimited;
pub mod json;
pub mod utils;

use std::path::{Path, PathBuf};

use log_analyzer_domain::{options::ReportFormat, report::Report};
use log_analyzer_ports::ReportSink;
use log_analyzer_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

pub use console::write_summary;

/// Render the full report in `format`.
pub fn render_report(report: &Report, format: ReportFormat) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match format.separator() {
        Some(sep) => delimited::write_delimited(report, sep, &mut buf)?,
        None => json::write_json(report, &mut buf)?,
    }
    Ok(buf)
}

/// Writes the rendered report to a file, replacing it atomically.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
    format: ReportFormat,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self { path: path.into(), format }
    }
}

impl ReportSink for FileReportSink {
    fn persist(&self, report: &Report) -> Result<()> {
        let data = render_report(report, self.format)?;
        log::debug!("writing {} bytes of {} to {}", data.len(), self.format, self.path.display());
        FileWriter::atomic_write(&self.path, &data)
            .map_err(|source| InfrastructureError::FileWrite { path: self.path.clone(), source })?;
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
