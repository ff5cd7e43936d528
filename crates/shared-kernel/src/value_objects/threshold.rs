// crates/shared-kernel/src/value_objects/threshold.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Failed-login count a client must strictly exceed to be flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Threshold(usize);

impl Threshold {
    pub const DEFAULT: Self = Self(10);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// `count > threshold`; equality does not qualify.
    #[inline]
    pub const fn is_exceeded_by(self, count: usize) -> bool {
        count > self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for Threshold {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Threshold> for usize {
    fn from(value: Threshold) -> Self {
        value.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
