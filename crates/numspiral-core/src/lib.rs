//! Number Spiral Layout
//!
//! Square spirals of the integers `0..n`, starting at the grid center and
//! winding outward clockwise.
//!
//! # Ring Decomposition
//!
//! A spiral of odd order `k` is a ring of `4(k-1)` cells wrapped around a
//! spiral of order `k-2`. The inner spiral holds `0..(k-2)²`, the ring holds
//! `(k-2)²..k²`:
//!
//! ```text
//! 20 21 22 23 24
//! 19  6  7  8  9
//! 18  5  0  1 10
//! 17  4  3  2 11
//! 16 15 14 13 12
//! ```
//!
//! Every row of an order-`k` spiral is either a full ring edge (top and
//! bottom rows) or a left ring cell, a row of the inner spiral, and a right
//! ring cell.
//!
//! # Partial Grids
//!
//! When `n` is not an odd square the grid is sized to the next odd order and
//! every cell whose spiral number is `>= n` holds [`CellValue::Empty`].

mod cell;
mod error;
mod layout;
pub mod render;

pub use cell::{CellValue, EMPTY_MARKER};
pub use error::{Error, Result};
pub use layout::{capacity_of, order_for, Rows, SpiralLayout};
pub use render::{render, RenderOptions, Rendered, Renderer};

/// Order of the smallest non-trivial spiral (one ring around the origin).
pub const MIN_RING_ORDER: u64 = 3;

/// Orders shrink by this amount per ring.
pub const RING_STEP: u64 = 2;

const _: () = assert!(MIN_RING_ORDER - RING_STEP == 1);
