use itertools::Itertools;
use ndarray::{s, ArrayView2};

use crate::board::Board;
use crate::cell::Cell;
use crate::viewpoint::Viewpoint;

/// Whether a line of interior heights shows exactly `hint` buildings.
///
/// A building is visible when it is strictly taller than every building before it in scan
/// order, so the count starts at the first building and grows by one for each new record
/// height. Only an exact match satisfies a hint: a line showing more buildings than promised
/// is as wrong as one showing fewer. A hint of 1 therefore holds iff the first building in
/// scan order is the tallest of its line, and no hint at all fits an empty line.
pub fn hint_satisfied(heights: impl IntoIterator<Item = u8>, hint: u8) -> bool {
    let mut visible = 0u8;
    let mut tallest = 0u8;

    for height in heights {
        if height > tallest {
            tallest = height;
            visible += 1;
            if visible > hint {
                return false;
            }
        }
    }

    visible == hint
}

impl Board {
    fn interior(&self) -> ArrayView2<'_, Cell> {
        self.cells.slice(s![1..self.size - 1, 1..self.size - 1])
    }

    /// Whether every interior cell holds a value, i.e. no `'?'` remains.
    ///
    /// Frame cells never count; a stray placeholder among the hints does not make the interior
    /// unfinished.
    pub fn is_finished(&self) -> bool {
        self.interior().iter().all(|cell| *cell != Cell::Unresolved)
    }

    /// Whether no interior row repeats a cell value.
    pub fn rows_are_unique(&self) -> bool {
        self.interior()
            .rows()
            .into_iter()
            .all(|row| row.iter().all_unique())
    }

    /// Whether no interior column repeats a cell value.
    ///
    /// Same rule as [`rows_are_unique`](Self::rows_are_unique), applied to a transposed copy.
    pub fn columns_are_unique(&self) -> bool {
        self.transposed().rows_are_unique()
    }

    /// Whether every line hinted from `viewpoint` shows exactly the hinted number of
    /// buildings.
    ///
    /// Lines without a hint digit on the `viewpoint` side are skipped, so a line framed by
    /// `'*'` on both ends never reaches the hint rule at all. A hinted line with an unresolved
    /// or blank interior cell fails: its visible count cannot be confirmed.
    pub fn visible_from(&self, viewpoint: Viewpoint) -> bool {
        let transposed;
        let board = if viewpoint.is_vertical() {
            transposed = self.transposed();
            &transposed
        } else {
            self
        };

        for line in board.cells.slice(s![1..board.size - 1, ..]).rows() {
            let hint_cell = if viewpoint.scans_reversed() {
                line[board.size - 1]
            } else {
                line[0]
            };
            let Some(hint) = hint_cell.height() else {
                continue;
            };

            let interior = line.slice(s![1..board.size - 1]);
            let heights: Option<Vec<u8>> = if viewpoint.scans_reversed() {
                interior.iter().rev().map(Cell::height).collect()
            } else {
                interior.iter().map(Cell::height).collect()
            };

            let Some(heights) = heights else {
                return false;
            };
            if !hint_satisfied(heights, hint) {
                return false;
            }
        }

        true
    }

    /// Whether the hints on the left and right edges hold on every interior row.
    pub fn horizontal_visibility_ok(&self) -> bool {
        self.visible_from(Viewpoint::Left) && self.visible_from(Viewpoint::Right)
    }

    /// Whether the hints on the top and bottom edges hold on every interior column.
    pub fn vertical_visibility_ok(&self) -> bool {
        self.visible_from(Viewpoint::Top) && self.visible_from(Viewpoint::Bottom)
    }
}
