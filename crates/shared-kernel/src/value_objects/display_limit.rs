// crates/shared-kernel/src/value_objects/display_limit.rs
use serde::{Deserialize, Serialize};

/// Upper bound on rows shown for a console table. `None` shows every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayLimit(Option<usize>);

impl DisplayLimit {
    pub const UNBOUNDED: Self = Self(None);

    #[inline]
    pub const fn new(limit: Option<usize>) -> Self {
        Self(limit)
    }

    #[inline]
    pub const fn top(n: usize) -> Self {
        Self(Some(n))
    }

    #[inline]
    pub const fn get(self) -> Option<usize> {
        self.0
    }

    #[inline]
    pub const fn is_unbounded(self) -> bool {
        self.0.is_none()
    }

    /// Number of rows to keep out of `len`.
    #[inline]
    pub fn clamp(self, len: usize) -> usize {
        self.0.map_or(len, |n| n.min(len))
    }

    pub fn apply<T>(self, rows: &[T]) -> &[T] {
        &rows[..self.clamp(rows.len())]
    }
}

impl From<Option<usize>> for DisplayLimit {
    fn from(value: Option<usize>) -> Self {
        Self::new(value)
    }
}
