//! Property tests for spiral layouts.

use std::collections::HashSet;

use numspiral_core::{capacity_of, order_for, CellValue, Error, SpiralLayout};
use proptest::prelude::*;

proptest! {
    #[test]
    fn negative_counts_are_rejected(n in i64::MIN..0) {
        prop_assert!(matches!(SpiralLayout::new(n), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn order_is_smallest_odd_fit(n in 1u64..10_000_000) {
        let order = order_for(n);
        prop_assert_eq!(order % 2, 1);
        prop_assert!(capacity_of(order) >= n);
        if order >= 3 {
            prop_assert!(capacity_of(order - 2) < n);
        }
    }

    #[test]
    fn every_number_appears_once(n in 0i64..1_500) {
        let layout = SpiralLayout::new(n).unwrap();
        let grid = layout.grid();

        prop_assert_eq!(grid.len() as u64, layout.order());
        let mut seen = HashSet::new();
        for row in &grid {
            prop_assert_eq!(row.len() as u64, layout.order());
            for cell in row {
                if let CellValue::Number(v) = cell {
                    prop_assert!(*v < n as u64);
                    prop_assert!(seen.insert(*v), "{} appears twice", v);
                }
            }
        }
        prop_assert_eq!(seen.len() as u64, n as u64);
    }

    #[test]
    fn empty_cells_fill_the_rest(n in 0i64..1_500) {
        let layout = SpiralLayout::new(n).unwrap();
        let empty = layout
            .rows()
            .flatten()
            .filter(CellValue::is_empty)
            .count() as u64;
        prop_assert_eq!(empty, layout.empty_cells());
        prop_assert_eq!(empty, layout.capacity() - n as u64);
    }

    #[test]
    fn consecutive_numbers_are_adjacent(n in 2i64..1_000) {
        let layout = SpiralLayout::new(n).unwrap();
        let mut position = vec![(0i64, 0i64); n as usize];
        for (r, row) in layout.rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(v) = cell.number() {
                    position[v as usize] = (r as i64, c as i64);
                }
            }
        }

        let center = (layout.order() / 2) as i64;
        prop_assert_eq!(position[0], (center, center));
        for pair in position.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert_eq!((a.0 - b.0).abs() + (a.1 - b.1).abs(), 1);
        }
    }

    #[test]
    fn cell_at_agrees_with_rows(n in 0i64..600) {
        let layout = SpiralLayout::new(n).unwrap();
        for (r, row) in layout.rows().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                prop_assert_eq!(layout.cell_at(r as u64, c as u64), Some(cell));
            }
        }
    }

    #[test]
    fn construction_is_deterministic(n in 0i64..2_000) {
        let a = SpiralLayout::new(n).unwrap();
        let b = SpiralLayout::new(n).unwrap();
        prop_assert_eq!(a.grid(), b.grid());
    }
}
