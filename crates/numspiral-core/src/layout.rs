//! Spiral layout by recursive ring decomposition.
//!
//! An order-`k` layout owns the order-`k-2` layout nested one ring inside
//! it. Numbers `0..(k-2)²` live in the inner layout, `(k-2)²..k²` in the
//! outer ring:
//!
//! - **Top row**: `k² - k ..= k² - 1`, ascending left to right
//! - **Bottom row**: descending from `k² - k - (k - 1)`
//! - **Left column**: `k² - k - row` for the middle rows
//! - **Right column**: `(k-2)² + row - 1` for the middle rows
//!
//! The chain of nested layouts is `k/2` deep, so construction, row
//! production and drop all walk it with loops.

use std::fmt;
use std::iter::FusedIterator;

use crate::{CellValue, Error, Result, MIN_RING_ORDER, RING_STEP};

/// Smallest odd order whose square holds `n` cells (0 for `n = 0`).
///
/// - `n = 1`: order 1
/// - `n = 2..=9`: order 3
/// - `n = 10..=25`: order 5
///
/// Defined for every `u64`, but above `(2³² - 1)²` the result is `2³² + 1`,
/// whose square does not fit in a `u64`. Layouts only ask for counts up to
/// `i64::MAX`.
pub fn order_for(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }

    // Float estimate, corrected to the exact integer ceiling of sqrt(n)
    let mut k = (n as f64).sqrt() as u64;
    while k > 0 && k.saturating_mul(k) >= n {
        k -= 1;
    }
    while k.saturating_mul(k) < n {
        k += 1;
    }

    if k % 2 == 0 {
        k + 1
    } else {
        k
    }
}

/// Number of cells in a grid of the given order.
///
/// `order` must be below `2³²`.
#[inline]
pub const fn capacity_of(order: u64) -> u64 {
    order * order
}

/// A square number spiral for a requested count `n`.
///
/// Immutable once built. Cells whose spiral number is `>= n` are
/// [`CellValue::Empty`].
pub struct SpiralLayout {
    count: u64,
    order: u64,
    capacity: u64,
    first_outer: u64,
    inner: Option<Box<SpiralLayout>>,
}

impl SpiralLayout {
    /// Build the layout for `n` cells.
    ///
    /// Fails with [`Error::InvalidInput`] when `n` is negative.
    pub fn new(n: i64) -> Result<Self> {
        let count = u64::try_from(n).map_err(|_| Error::negative_count(n))?;
        let order = order_for(count);

        // Inside out: order 1, 3, ..., order - 2, each one completely filled
        let mut inner = None;
        let mut k = 1;
        while k + RING_STEP <= order {
            inner = Some(Box::new(Self::level(k, capacity_of(k), inner)));
            k += RING_STEP;
        }

        let layout = Self::level(order, count, inner);
        tracing::debug!(
            count,
            order = layout.order,
            capacity = layout.capacity,
            "built spiral layout"
        );
        Ok(layout)
    }

    fn level(order: u64, count: u64, inner: Option<Box<SpiralLayout>>) -> Self {
        let first_outer = if order >= MIN_RING_ORDER {
            capacity_of(order - RING_STEP)
        } else {
            0
        };

        Self {
            count,
            order,
            capacity: capacity_of(order),
            first_outer,
            inner,
        }
    }

    /// The requested count `n`.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Side length of the grid (always odd, or 0 for an empty spiral).
    #[inline]
    pub fn order(&self) -> u64 {
        self.order
    }

    /// Total cells in the grid, `order²`.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Smallest number in the outermost ring.
    ///
    /// `(order - 2)²` for order 3 and up, 0 for the single-cell spiral.
    #[inline]
    pub fn first_outer_index(&self) -> u64 {
        self.first_outer
    }

    /// The spiral one ring in, if the order is at least 3.
    #[inline]
    pub fn inner(&self) -> Option<&SpiralLayout> {
        self.inner.as_deref()
    }

    /// Number of cells rendered as [`CellValue::Empty`].
    #[inline]
    pub fn empty_cells(&self) -> u64 {
        self.capacity - self.count
    }

    /// Cells of row `row`, left to right. `None` past the last row.
    pub fn row_at(&self, row: u64) -> Option<Vec<CellValue>> {
        if row >= self.order {
            return None;
        }

        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut level = self;
        let mut r = row;

        let middle = loop {
            if r == 0 {
                break level.top_row().collect::<Vec<_>>();
            }
            if r == level.order - 1 {
                break level.bottom_row().collect();
            }

            left.push(level.capacity - level.order - r);
            right.push(level.first_outer + r - 1);

            match level.inner.as_deref() {
                Some(inner) => {
                    level = inner;
                    r -= 1;
                }
                // Middle rows only exist from order 3 up, which always has an inner layout
                None => break Vec::new(),
            }
        };

        let cells = left
            .into_iter()
            .chain(middle)
            .chain(right.into_iter().rev())
            .map(|v| CellValue::bounded(v, self.count))
            .collect();
        Some(cells)
    }

    /// Cell at (`row`, `col`) without building the row.
    pub fn cell_at(&self, row: u64, col: u64) -> Option<CellValue> {
        if row >= self.order || col >= self.order {
            return None;
        }

        let mut level = self;
        let (mut r, mut c) = (row, col);

        let value = loop {
            let last = level.order - 1;
            if r == 0 {
                break level.capacity - level.order + c;
            }
            if r == last {
                break level.capacity - level.order - last - c;
            }
            if c == 0 {
                break level.capacity - level.order - r;
            }
            if c == last {
                break level.first_outer + r - 1;
            }

            level = level.inner.as_deref()?;
            r -= 1;
            c -= 1;
        };

        Some(CellValue::bounded(value, self.count))
    }

    /// Iterate over all rows, top to bottom.
    ///
    /// Each call starts a fresh pass over the grid.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            layout: self,
            front: 0,
            back: self.order,
        }
    }

    /// The whole grid, materialized row by row.
    pub fn grid(&self) -> Vec<Vec<CellValue>> {
        self.rows().collect()
    }

    fn top_row(&self) -> impl Iterator<Item = u64> {
        (self.capacity - self.order)..self.capacity
    }

    fn bottom_row(&self) -> impl Iterator<Item = u64> {
        let start = self.capacity - self.order - (self.order - 1);
        (0..self.order).map(move |i| start - i)
    }
}

impl Drop for SpiralLayout {
    fn drop(&mut self) {
        // Unlink the chain so dropping a large spiral does not recurse per ring
        let mut next = self.inner.take();
        while let Some(mut layout) = next {
            next = layout.inner.take();
        }
    }
}

// A layout is fully determined by its count
impl PartialEq for SpiralLayout {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
    }
}

impl Eq for SpiralLayout {}

// Shows the inner layout by order only, the chain is k/2 deep
impl fmt::Debug for SpiralLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpiralLayout")
            .field("count", &self.count)
            .field("order", &self.order)
            .field("capacity", &self.capacity)
            .field("first_outer", &self.first_outer)
            .field("inner_order", &self.inner().map(SpiralLayout::order))
            .finish()
    }
}

impl TryFrom<i64> for SpiralLayout {
    type Error = Error;

    fn try_from(n: i64) -> Result<Self> {
        Self::new(n)
    }
}

/// Iterator over the rows of a [`SpiralLayout`].
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    layout: &'a SpiralLayout,
    front: u64,
    back: u64,
}

impl Rows<'_> {
    fn produce(&self, row: u64) -> Option<Vec<CellValue>> {
        tracing::trace!(row, "produced spiral row");
        self.layout.row_at(row)
    }
}

impl Iterator for Rows<'_> {
    type Item = Vec<CellValue>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let row = self.produce(self.front);
        self.front += 1;
        row
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.back - self.front) as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Rows<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        self.produce(self.back)
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}
