// crates/shared-kernel/src/value_objects/mod.rs
pub mod display_limit;
pub mod threshold;

pub use display_limit::DisplayLimit;
pub use threshold::Threshold;
