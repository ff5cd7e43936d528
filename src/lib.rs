#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

pub use app::{run, run_with_config};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
