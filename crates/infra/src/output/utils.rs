// crates/infra/src/output/utils.rs

/// Quote a delimited field when it would otherwise break the row.
///
/// Only comma-separated output is quoted (quotes doubled); other separators
/// pass the value through unchanged.
pub(crate) fn escape_field(s: &str, sep: char) -> String {
    let needs_quotes = sep == ',' && s.contains([',', '"', '\n', '\r']);
    if needs_quotes {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}
