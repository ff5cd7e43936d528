// src/config.rs
use log_analyzer_domain::config::{AnalysisConfig, AnalysisConfigBuilder, ReportSettingsBuilder};
use log_analyzer_shared_kernel::{DisplayLimit, PresentationError, PresentationResult, Threshold};

use crate::cli::Args;

/// Convert parsed CLI arguments into the analysis configuration.
///
/// # Errors
///
/// Returns `Err` when one of the builders rejects the provided values.
pub fn build_config(args: &Args) -> PresentationResult<AnalysisConfig> {
    let report = ReportSettingsBuilder::default()
        .path(args.result_file.clone())
        .format(args.format)
        .enabled(!args.no_report)
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))?;

    AnalysisConfigBuilder::default()
        .threshold(Threshold::new(args.threshold))
        .top_ips(DisplayLimit::new(args.top_ips))
        .top_endpoints(DisplayLimit::new(args.top_endpoints))
        .strict(args.strict)
        .parallel(!args.sequential)
        .report(report)
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
}

impl TryFrom<&Args> for AnalysisConfig {
    type Error = PresentationError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        build_config(args)
    }
}
