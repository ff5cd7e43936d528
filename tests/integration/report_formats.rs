// tests/integration/report_formats.rs
use access_log_analyzer::run_with_config;
use log_analyzer_domain::{
    config::{AnalysisConfig, AnalysisConfigBuilder, ReportSettingsBuilder},
    options::ReportFormat,
};
use serde_json::{Value, json};

#[path = "../common/mod.rs"]
mod common;
use common::{TempDir, fixture};

fn config(temp: &TempDir, file: &str, format: ReportFormat) -> AnalysisConfig {
    let report = ReportSettingsBuilder::default()
        .path(temp.path().join(file))
        .format(format)
        .build()
        .unwrap();
    AnalysisConfigBuilder::default().report(report).build().unwrap()
}

#[test]
fn json_report_mirrors_csv_sections() {
    let temp = TempDir::new("json", "log_analyzer_formats");
    let config = config(&temp, "results.json", ReportFormat::Json);

    run_with_config(&fixture("sample.log"), &config, &mut Vec::new()).expect("run succeeds");

    let value: Value = serde_json::from_str(&temp.read_file("results.json")).expect("valid JSON");
    assert_eq!(value["most_accessed"], json!({"endpoint": "/login", "count": 7}));
    assert_eq!(value["request_counts"].as_array().unwrap().len(), 6);
    assert_eq!(value["request_counts"][0], json!({"ip": "192.168.1.1", "count": 4}));
    assert_eq!(value["suspicious"], json!([]));
    assert_eq!(value["endpoint_counts"][1], json!({"endpoint": "/home", "count": 3}));
    assert_eq!(value["endpoint_counts"].as_array().unwrap().len(), 8);
}

#[test]
fn tsv_report_uses_tabs() {
    let temp = TempDir::new("tsv", "log_analyzer_formats");
    let config = config(&temp, "results.tsv", ReportFormat::Tsv);

    run_with_config(&fixture("sample.log"), &config, &mut Vec::new()).expect("run succeeds");

    let text = temp.read_file("results.tsv");
    assert!(text.starts_with("IP Address\tRequest Count\r\n192.168.1.1\t4\r\n"));
    assert!(text.contains("\r\n\r\nMost Accessed Endpoint\tAccess Count\r\n/login\t7\r\n\r\n"));
    assert!(!text.contains(','));
}
