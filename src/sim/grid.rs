//! Static grid layout: lanes, safe strips, stash bay, and drop pads

use std::ops::RangeInclusive;

use crate::consts::{COLS, ROWS, TILE};

/// Multi-column region where cargo is picked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StashZone {
    pub row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

impl StashZone {
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row == self.row && (self.min_col..=self.max_col).contains(&col)
    }

    /// Number of columns covered
    pub fn width(&self) -> i32 {
        self.max_col - self.min_col + 1
    }
}

/// Immutable layout of the playfield
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    pub tile: f32,
    pub cols: i32,
    pub rows: i32,
    pub road_rows: &'static [i32],
    pub safe_rows: &'static [i32],
    pub stash: StashZone,
    /// Drop pad columns on the top row, left to right
    pub drop_cols: &'static [i32],
}

/// The one layout the game ships with
pub const GRID: GridSpec = GridSpec {
    tile: TILE,
    cols: COLS,
    rows: ROWS,
    road_rows: &[1, 2, 4, 5, 7],
    safe_rows: &[0, 3, 6, 8, 9],
    stash: StashZone {
        row: 8,
        min_col: 6,
        max_col: 8,
    },
    drop_cols: &[1, 7, 13],
};

impl GridSpec {
    #[inline]
    pub fn is_road_row(&self, row: i32) -> bool {
        self.road_rows.contains(&row)
    }

    #[inline]
    pub fn is_safe_row(&self, row: i32) -> bool {
        self.safe_rows.contains(&row)
    }

    #[inline]
    pub fn is_stash(&self, row: i32, col: i32) -> bool {
        self.stash.contains(row, col)
    }

    /// Drop pads only exist on the top row
    #[inline]
    pub fn is_drop_zone(&self, row: i32, col: i32) -> bool {
        row == 0 && self.drop_cols.contains(&col)
    }

    /// Clamp a cell to the grid bounds
    pub fn clamp_cell(&self, col: i32, row: i32) -> (i32, i32) {
        (col.clamp(0, self.cols - 1), row.clamp(0, self.rows - 1))
    }

    pub fn width(&self) -> f32 {
        self.cols as f32 * self.tile
    }

    pub fn height(&self) -> f32 {
        self.rows as f32 * self.tile
    }

    /// Rows a cash pickup may appear on: the traffic band, including the
    /// safe strips between lanes
    pub fn cash_rows(&self) -> RangeInclusive<i32> {
        let first = self.road_rows.iter().copied().min().unwrap_or(0);
        let last = self.road_rows.iter().copied().max().unwrap_or(self.rows - 1);
        first..=last
    }
}
