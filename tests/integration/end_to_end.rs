// tests/integration/end_to_end.rs
use std::fs;

use access_log_analyzer::run_with_config;
use log_analyzer_domain::config::{AnalysisConfig, AnalysisConfigBuilder, ReportSettingsBuilder};
use log_analyzer_shared_kernel::{DisplayLimit, Threshold};

#[path = "../common/mod.rs"]
mod common;
use common::{TempDir, fixture};

const SAMPLE_CSV: &str = "\
IP Address,Request Count
192.168.1.1,4
203.0.113.5,4
198.51.100.23,4
10.0.0.2,3
192.168.1.100,3
203.0.113.34,1

Most Accessed Endpoint,Access Count
/login,7

IP Address,Failed Login Attempts

Endpoint,Access Count
/login,7
/home,3
/about,3
/dashboard,2
/contact,1
/register,1
/profile,1
/feedback,1
";

fn crlf(text: &str) -> String {
    text.replace('\n', "\r\n")
}

fn config_writing_to(temp: &TempDir, file: &str) -> AnalysisConfig {
    let report = ReportSettingsBuilder::default().path(temp.path().join(file)).build().unwrap();
    AnalysisConfigBuilder::default().report(report).build().unwrap()
}

fn run(logfile: &std::path::Path, config: &AnalysisConfig) -> (String, anyhow::Result<()>) {
    let mut out = Vec::new();
    let result = run_with_config(logfile, config, &mut out).map(|_| ());
    (String::from_utf8(out).unwrap(), result)
}

#[test]
fn sample_log_produces_expected_csv() {
    let temp = TempDir::new("sample_csv", "log_analyzer_integration");
    let config = config_writing_to(&temp, "results.csv");

    let (stdout, result) = run(&fixture("sample.log"), &config);
    result.expect("run succeeds");

    assert_eq!(temp.read_file("results.csv"), crlf(SAMPLE_CSV));
    assert!(stdout.contains("/login (Accessed 7 times)"));
    assert!(stdout.trim_end().ends_with(&format!("Results saved to {}", temp.path().join("results.csv").display())));
}

#[test]
fn console_is_truncated_but_file_is_not() {
    let temp = TempDir::new("truncate", "log_analyzer_integration");
    let mut config = config_writing_to(&temp, "results.csv");
    config.top_ips = DisplayLimit::top(2);
    config.top_endpoints = DisplayLimit::top(3);

    let (stdout, result) = run(&fixture("sample.log"), &config);
    result.expect("run succeeds");

    let expected_head = "IP Address Request Count\n\
                         192.168.1.1          4\n\
                         203.0.113.5          4\n\
                         \n\
                         Most Frequently Accessed Endpoint:\n";
    assert!(stdout.starts_with(expected_head), "unexpected console output:\n{stdout}");
    assert!(!stdout.contains("198.51.100.23"));
    assert!(stdout.contains("/about               3\n\nResults saved to"));
    assert!(!stdout.contains("/dashboard"));
    assert_eq!(temp.read_file("results.csv"), crlf(SAMPLE_CSV));
}

#[test]
fn lower_threshold_flags_repeated_failures() {
    let temp = TempDir::new("threshold", "log_analyzer_integration");
    let mut config = config_writing_to(&temp, "results.csv");
    config.threshold = Threshold::new(3);

    let (stdout, result) = run(&fixture("sample.log"), &config);
    result.expect("run succeeds");

    assert!(stdout.contains("IP Address Failed Login Attempts\n203.0.113.5          4\n"));
    assert!(!stdout.contains("192.168.1.100        3\n\n"));
    assert!(temp.read_file("results.csv").contains("IP Address,Failed Login Attempts\r\n203.0.113.5,4\r\n\r\n"));
}

#[test]
fn eleven_failures_cross_default_threshold_only() {
    let temp = TempDir::new("eleven", "log_analyzer_integration");
    let log = "5.5.5.5 - - \"POST /login HTTP/1.1\" 401 0\n".repeat(11);
    let logfile = temp.write_file("auth.log", &log);

    let config = config_writing_to(&temp, "default.csv");
    run(&logfile, &config).1.expect("run succeeds");
    assert!(temp.read_file("default.csv").contains("IP Address,Failed Login Attempts\r\n5.5.5.5,11\r\n"));

    let mut config = config_writing_to(&temp, "eleven.csv");
    config.threshold = Threshold::new(11);
    run(&logfile, &config).1.expect("run succeeds");
    assert!(temp.read_file("eleven.csv").contains("IP Address,Failed Login Attempts\r\n\r\nEndpoint"));
}

#[test]
fn empty_log_renders_header_only_sections() {
    let temp = TempDir::new("empty", "log_analyzer_integration");
    let logfile = temp.write_file("empty.log", "");
    let config = config_writing_to(&temp, "results.csv");

    let (stdout, result) = run(&logfile, &config);
    result.expect("empty input is not an error");

    assert_eq!(
        temp.read_file("results.csv"),
        "IP Address,Request Count\r\n\r\nMost Accessed Endpoint,Access Count\r\n\r\n\
         IP Address,Failed Login Attempts\r\n\r\nEndpoint,Access Count\r\n"
    );
    assert!(stdout.contains("No endpoint requests found"));
}

#[test]
fn runs_are_idempotent() {
    let temp = TempDir::new("idempotent", "log_analyzer_integration");
    let config = config_writing_to(&temp, "results.csv");

    let (first_out, first) = run(&fixture("sample.log"), &config);
    first.unwrap();
    let first_file = temp.read_file("results.csv");
    let (second_out, second) = run(&fixture("sample.log"), &config);
    second.unwrap();

    assert_eq!(first_out, second_out);
    assert_eq!(first_file, temp.read_file("results.csv"));
}

#[test]
fn missing_log_fails_before_any_output() {
    let temp = TempDir::new("missing", "log_analyzer_integration");
    let config = config_writing_to(&temp, "results.csv");

    let (stdout, result) = run(&temp.path().join("absent.log"), &config);
    let err = result.expect_err("missing input must fail");

    assert!(stdout.is_empty());
    assert!(format!("{err:#}").contains("Failed to read file"));
    assert!(!temp.path().join("results.csv").exists());
}

#[test]
fn unwritable_report_fails_after_summary() {
    let temp = TempDir::new("unwritable", "log_analyzer_integration");
    let config = config_writing_to(&temp, "missing-dir/results.csv");

    let (stdout, result) = run(&fixture("sample.log"), &config);
    let err = result.expect_err("unwritable destination must fail");

    assert!(stdout.contains("Top Endpoints Accessed:"));
    assert!(!stdout.contains("Results saved to"));
    assert!(format!("{err:#}").contains("failed to save report"));
}

#[test]
fn blank_lines_are_skipped_unless_strict() {
    let temp = TempDir::new("blank", "log_analyzer_integration");
    let logfile = temp.write_file("gaps.log", "1.1.1.1 \"GET / HTTP/1.1\" 200\n\n   \n1.1.1.1 \"GET / HTTP/1.1\" 200\n");

    let mut config = config_writing_to(&temp, "results.csv");
    let mut out = Vec::new();
    let outcome = run_with_config(&logfile, &config, &mut out).expect("lenient run succeeds");
    assert_eq!(outcome.skipped_lines, vec![2, 3]);
    assert_eq!(outcome.results.request_counts.get("1.1.1.1"), Some(2));

    config.strict = true;
    fs::remove_file(temp.path().join("results.csv")).unwrap();
    let (stdout, result) = run(&logfile, &config);
    let err = result.expect_err("strict run fails");
    assert!(format!("{err:#}").contains("Malformed log line 2"));
    assert!(stdout.is_empty());
    assert!(!temp.path().join("results.csv").exists());
}

#[test]
fn no_report_skips_persistence() {
    let temp = TempDir::new("no_report", "log_analyzer_integration");
    let mut config = config_writing_to(&temp, "results.csv");
    config.report.enabled = false;

    let (stdout, result) = run(&fixture("sample.log"), &config);
    result.unwrap();

    assert!(!stdout.contains("Results saved to"));
    assert!(!temp.path().join("results.csv").exists());
}
