// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod output;
pub mod persistence;

pub use output::FileReportSink;
pub use persistence::FileLineSource;
