//! # Domain
//!
//! Pure aggregation rules for access-log analysis:
//!
//! - [`model`]: the insertion-ordered [`model::CountMap`] and per-line field extraction
//! - [`analytics`]: request counting, endpoint ranking and failed-login detection
//! - [`report`]: the four-section report model shared by every renderer
//! - [`config`]: resolved run settings
//!
//! Nothing here performs I/O.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;
pub mod options;
pub mod report;
