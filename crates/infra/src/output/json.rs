use std::io::Write;

use log_analyzer_domain::{
    analytics::RankedRow,
    report::{Report, SectionKind},
};
use log_analyzer_shared_kernel::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    request_counts: Vec<IpCount<'a>>,
    most_accessed: Option<EndpointCount<'a>>,
    suspicious: Vec<FailedLogins<'a>>,
    endpoint_counts: Vec<EndpointCount<'a>>,
}

#[derive(Debug, Serialize)]
struct IpCount<'a> {
    ip: &'a str,
    count: usize,
}

#[derive(Debug, Serialize)]
struct EndpointCount<'a> {
    endpoint: &'a str,
    count: usize,
}

#[derive(Debug, Serialize)]
struct FailedLogins<'a> {
    ip: &'a str,
    failed_logins: usize,
}

impl<'a> From<&'a Report> for JsonReport<'a> {
    fn from(report: &'a Report) -> Self {
        let endpoint = |r: &'a RankedRow| EndpointCount { endpoint: &r.key, count: r.count };
        Self {
            request_counts: report
                .rows(SectionKind::RequestCounts)
                .iter()
                .map(|r| IpCount { ip: &r.key, count: r.count })
                .collect(),
            most_accessed: report.most_accessed().map(endpoint),
            suspicious: report
                .rows(SectionKind::SuspiciousActivity)
                .iter()
                .map(|r| FailedLogins { ip: &r.key, failed_logins: r.count })
                .collect(),
            endpoint_counts: report.rows(SectionKind::EndpointCounts).iter().map(endpoint).collect(),
        }
    }
}

/// Pretty-printed JSON object with one member per section.
pub fn write_json(report: &Report, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport::from(report))?;
    writeln!(out)?;
    Ok(())
}
