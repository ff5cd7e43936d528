use std::io::Write;

use log_analyzer_domain::{
    analytics::RankedRow,
    config::AnalysisConfig,
    report::{Report, SectionKind},
};
use log_analyzer_shared_kernel::Result;

/// Shown in place of the most-accessed row when no request line matched.
pub const NO_ENDPOINT_SENTINEL: &str = "No endpoint requests found";

/// Human-readable summary; request and endpoint tables honour the display limits.
pub fn write_summary(report: &Report, config: &AnalysisConfig, out: &mut impl Write) -> Result<()> {
    let view = report.limited(config.top_ips, config.top_endpoints);

    writeln!(out, "IP Address Request Count")?;
    write_rows(view.rows(SectionKind::RequestCounts), out)?;

    writeln!(out, "\nMost Frequently Accessed Endpoint:")?;
    match view.most_accessed() {
        Some(row) => writeln!(out, "{} (Accessed {} times)", row.key, row.count)?,
        None => writeln!(out, "{NO_ENDPOINT_SENTINEL}")?,
    }

    writeln!(out, "\nSuspicious Activity Detected:")?;
    writeln!(out, "IP Address Failed Login Attempts")?;
    write_rows(view.rows(SectionKind::SuspiciousActivity), out)?;

    writeln!(out, "\nTop Endpoints Accessed:")?;
    writeln!(out, "Endpoint Access Count")?;
    write_rows(view.rows(SectionKind::EndpointCounts), out)?;
    Ok(())
}

fn write_rows(rows: &[RankedRow], out: &mut impl Write) -> Result<()> {
    for row in rows {
        writeln!(out, "{:<20} {}", row.key, row.count)?;
    }
    Ok(())
}
