use clap::ValueEnum;
use log_analyzer_domain::options::ReportFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliReportFormat {
    Csv,
    Tsv,
    Json,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(value: CliReportFormat) -> Self {
        match value {
            CliReportFormat::Csv => ReportFormat::Csv,
            CliReportFormat::Tsv => ReportFormat::Tsv,
            CliReportFormat::Json => ReportFormat::Json,
        }
    }
}
