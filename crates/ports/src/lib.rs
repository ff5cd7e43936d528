//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`line_source`]: where raw log lines come from
//! - [`report_sink`]: where the finished report is persisted
//!
//! These ports let the use-case layer stay independent of files and formats.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod line_source;
pub mod report_sink;

pub use line_source::LineSource;
pub use report_sink::ReportSink;
