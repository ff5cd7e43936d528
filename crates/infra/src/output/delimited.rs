use std::io::Write;

use log_analyzer_domain::report::{Report, ReportSection};
use log_analyzer_shared_kernel::Result;

use super::utils::escape_field;

/// Record terminator, matching the spreadsheet dialect of common CSV writers.
pub const RECORD_END: &str = "\r\n";

/// Every section with its header row, separated by one empty row. Never truncated.
pub fn write_delimited(report: &Report, sep: char, out: &mut impl Write) -> Result<()> {
    for (idx, section) in report.sections().iter().enumerate() {
        if idx > 0 {
            out.write_all(RECORD_END.as_bytes())?;
        }
        write_section(section, sep, out)?;
    }
    Ok(())
}

fn write_section(section: &ReportSection, sep: char, out: &mut impl Write) -> Result<()> {
    let [key_col, count_col] = section.columns();
    write!(out, "{}{sep}{}{RECORD_END}", escape_field(key_col, sep), escape_field(count_col, sep))?;
    for row in &section.rows {
        write!(out, "{}{sep}{}{RECORD_END}", escape_field(&row.key, sep), row.count)?;
    }
    Ok(())
}
