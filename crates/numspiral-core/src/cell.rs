//! Cell values of a spiral grid.

use std::fmt;

/// Placeholder printed for cells beyond the requested count.
pub const EMPTY_MARKER: &str = "*";

/// Content of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// A spiral number below the requested count.
    Number(u64),
    /// A cell whose spiral number is at or past the requested count.
    Empty,
}

impl CellValue {
    /// Classify spiral number `value` against the requested `count`.
    #[inline]
    pub const fn bounded(value: u64, count: u64) -> Self {
        if value < count {
            Self::Number(value)
        } else {
            Self::Empty
        }
    }

    /// The number, if this cell holds one.
    #[inline]
    pub const fn number(&self) -> Option<u64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Empty => None,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{}", v),
            Self::Empty => f.write_str(EMPTY_MARKER),
        }
    }
}
