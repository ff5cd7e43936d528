//! Aggregations over a fully materialised sequence of log lines.
//!
//! Each analysis is a pure function of the line slice and returns a fresh
//! result, so they can run independently (and concurrently) over the same
//! input.

pub mod endpoints;
pub mod requests;
pub mod results;
pub mod sort;
pub mod suspicious;

pub use endpoints::{EndpointSummary, MostAccessed, analyze_endpoints, extract_endpoint};
pub use requests::count_requests;
pub use results::{AnalysisResults, analyze};
pub use sort::{RankedRow, in_insertion_order, rank};
pub use suspicious::{count_failed_logins, detect_suspicious};
