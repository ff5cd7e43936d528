// crates/domain/src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use log_analyzer_shared_kernel::{DisplayLimit, Threshold};
use serde::{Deserialize, Serialize};

use crate::options::{DEFAULT_RESULT_FILE, ReportFormat};

/// Where and how the full report is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct ReportSettings {
    #[builder(default = "PathBuf::from(DEFAULT_RESULT_FILE)")]
    pub path: PathBuf,
    #[builder(default)]
    pub format: ReportFormat,
    #[builder(default = "true")]
    pub enabled: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_RESULT_FILE), format: ReportFormat::default(), enabled: true }
    }
}

/// Resolved settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct AnalysisConfig {
    #[builder(default)]
    pub threshold: Threshold,
    #[builder(default)]
    pub top_ips: DisplayLimit,
    #[builder(default)]
    pub top_endpoints: DisplayLimit,
    /// Fail on lines without a client identifier instead of skipping them.
    #[builder(default)]
    pub strict: bool,
    /// Run the three aggregations concurrently when the `parallel` feature is built in.
    #[builder(default = "true")]
    pub parallel: bool,
    #[builder(default)]
    pub report: ReportSettings,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            top_ips: DisplayLimit::UNBOUNDED,
            top_endpoints: DisplayLimit::UNBOUNDED,
            strict: false,
            parallel: true,
            report: ReportSettings::default(),
        }
    }
}
