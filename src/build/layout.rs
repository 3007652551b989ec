//! Fixed-pitch grid layout.
//!
//! Positions are a pure function of item index, so they can be computed in
//! any order and tested without iterating.

use crate::error::{IconError, Result};

/// A grid with fixed columns, square cells and uniform padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u32,
    /// Width and height of each placed item.
    pub icon_size: u32,
    /// Gap between adjacent items.
    pub padding: u32,
    /// Margin around the whole grid.
    pub outer_padding: u32,
}

/// Where one item lands in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: u32,
    pub column: u32,
    pub x: u32,
    pub y: u32,
}

impl GridLayout {
    pub const fn new(columns: u32, icon_size: u32, padding: u32, outer_padding: u32) -> Self {
        Self {
            columns,
            icon_size,
            padding,
            outer_padding,
        }
    }

    /// Distance between the origins of neighbouring cells.
    pub fn pitch(&self) -> u32 {
        self.icon_size.saturating_add(self.padding)
    }

    /// Rows needed for `count` items.
    pub fn rows(&self, count: usize) -> u32 {
        u32::try_from(count)
            .unwrap_or(u32::MAX)
            .div_ceil(self.columns.max(1))
    }

    /// Canvas size for `count` items: `n·(S+P) + 2O − P` on each axis.
    ///
    /// An empty grid has no rows, so its height clamps at zero. A canvas
    /// too large for `u32` coordinates is a `Build` error.
    pub fn canvas_size(&self, count: usize) -> Result<(u32, u32)> {
        let rows = self.rows(count);
        match (self.extent(self.columns), self.extent(rows)) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(IconError::Build {
                message: format!(
                    "A {}x{} grid of {}px cells does not fit on a canvas",
                    self.columns, rows, self.icon_size
                ),
                help: Some("Reduce columns, icon_size or padding in icons.yaml".to_string()),
            }),
        }
    }

    fn extent(&self, cells: u32) -> Option<u32> {
        let pitch = self.icon_size.checked_add(self.padding)?;
        let margins = self.outer_padding.checked_mul(2)?;
        let span = cells.checked_mul(pitch)?.checked_add(margins)?;
        Some(span.saturating_sub(self.padding))
    }

    /// Position of the item at `index` (0-based, row-major).
    pub fn cell(&self, index: usize) -> Cell {
        let columns = self.columns.max(1);
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        let row = index / columns;
        let column = index % columns;

        Cell {
            row,
            column,
            x: self
                .outer_padding
                .saturating_add(column.saturating_mul(self.pitch())),
            y: self
                .outer_padding
                .saturating_add(row.saturating_mul(self.pitch())),
        }
    }

    /// Positions of the first `count` items.
    pub fn cells(&self, count: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..count).map(move |i| self.cell(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_icon_example() {
        let layout = GridLayout::new(2, 24, 29, 5);

        assert_eq!(layout.canvas_size(2).unwrap(), (87, 34));
        assert_eq!(
            layout.cell(0),
            Cell {
                row: 0,
                column: 0,
                x: 5,
                y: 5
            }
        );
        assert_eq!(
            layout.cell(1),
            Cell {
                row: 0,
                column: 1,
                x: 58,
                y: 5
            }
        );
    }

    #[test]
    fn test_wraps_to_next_row() {
        let layout = GridLayout::new(17, 24, 29, 5);

        let cell = layout.cell(17);
        assert_eq!((cell.row, cell.column), (1, 0));
        assert_eq!((cell.x, cell.y), (5, 58));

        let cell = layout.cell(35);
        assert_eq!((cell.row, cell.column), (2, 1));
        assert_eq!((cell.x, cell.y), (58, 111));
    }

    #[test]
    fn test_rows_round_up() {
        let layout = GridLayout::new(17, 24, 29, 5);
        assert_eq!(layout.rows(0), 0);
        assert_eq!(layout.rows(1), 1);
        assert_eq!(layout.rows(17), 1);
        assert_eq!(layout.rows(18), 2);
    }

    #[test]
    fn test_default_preview_canvas() {
        // 17 columns of 24px icons with 29px gaps and 5px margins
        let layout = GridLayout::new(17, 24, 29, 5);
        assert_eq!(layout.canvas_size(40).unwrap(), (882, 140));
    }

    #[test]
    fn test_stroke_row_canvas() {
        let layout = GridLayout::new(5, 64, 16, 5);
        assert_eq!(layout.canvas_size(5).unwrap(), (394, 74));

        let xs: Vec<u32> = layout.cells(5).map(|c| c.x).collect();
        assert_eq!(xs, vec![5, 85, 165, 245, 325]);
        assert!(layout.cells(5).all(|c| c.y == 5));
    }

    #[test]
    fn test_empty_grid_height_clamps() {
        let layout = GridLayout::new(17, 24, 29, 5);
        assert_eq!(layout.canvas_size(0).unwrap().1, 0);
    }

    #[test]
    fn test_oversize_canvas_is_an_error() {
        let layout = GridLayout::new(17, 4_000_000_000, 29, 5);
        assert!(matches!(layout.canvas_size(1), Err(IconError::Build { .. })));

        let tall = GridLayout::new(1, 4096, 4096, 5);
        assert!(tall.canvas_size(1_000_000).is_err());
        assert!(tall.canvas_size(1).is_ok());
    }

    #[test]
    fn test_cells_inside_canvas_and_disjoint() {
        let layouts = [
            GridLayout::new(17, 24, 29, 5),
            GridLayout::new(2, 24, 29, 5),
            GridLayout::new(1, 10, 0, 0),
            GridLayout::new(4, 64, 16, 5),
        ];

        for layout in layouts {
            for count in 1..=60 {
                let (width, height) = layout.canvas_size(count).unwrap();
                let cells: Vec<Cell> = layout.cells(count).collect();
                let s = layout.icon_size;

                for cell in &cells {
                    assert!(cell.x >= layout.outer_padding && cell.x <= width - s);
                    assert!(cell.y >= layout.outer_padding && cell.y <= height - s);
                }

                for (i, a) in cells.iter().enumerate() {
                    for b in &cells[i + 1..] {
                        let disjoint = b.x >= a.x + s
                            || a.x >= b.x + s
                            || b.y >= a.y + s
                            || a.y >= b.y + s;
                        assert!(disjoint, "cells {:?} and {:?} overlap", a, b);
                    }
                }
            }
        }
    }
}
