//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: read lines from a [`LineSource`](log_analyzer_ports::LineSource),
//!   run the three analyses and hand back the results
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::AnalysisOutcome;
pub use orchestrator::{AnalyzeLog, PersistReport};
