// crates/ports/src/line_source.rs
use log_analyzer_shared_kernel::Result;

/// Port supplying the full, ordered sequence of raw log lines.
pub trait LineSource: Send + Sync {
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Human-readable origin, used in log messages.
    fn describe(&self) -> String;
}

impl LineSource for Vec<String> {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("<memory: {} lines>", self.len())
    }
}
