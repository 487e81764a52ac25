//! Board module - fixed-height grid of row occupancy masks
//!
//! Each row is a `u16` bitmask over the 10 columns: bit `x` set means cell
//! (x, row) holds locked material. Row 0 is the top of the visible board.
//! The row count is always exactly [`BOARD_HEIGHT`]; clearing replaces full
//! rows with fresh zero rows at the top.

use arrayvec::ArrayVec;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Mask of a completely filled row.
pub const FULL_ROW: u16 = (1 << BOARD_WIDTH) - 1;

/// The game board: 20 rows of 10-column occupancy masks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [u16; BOARD_HEIGHT as usize],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            rows: [0; BOARD_HEIGHT as usize],
        }
    }

    /// Check whether a cell is free for the active piece.
    ///
    /// A cell is free when it is inside the horizontal bounds, above the
    /// floor, and either above the visible board (y < 0) or not occupied.
    /// Cells below the floor or outside the side walls are never free.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        if y < 0 {
            return true;
        }
        self.rows[y as usize] & (1 << x) == 0
    }

    /// Check whether a visible cell holds locked material.
    ///
    /// Out-of-bounds coordinates (including y < 0) report unoccupied.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        self.rows[y as usize] & (1 << x) != 0
    }

    /// Whether a row mask covers every column.
    pub fn is_row_full(&self, y: usize) -> bool {
        y < BOARD_HEIGHT as usize && self.rows[y] == FULL_ROW
    }

    /// Bake 4 cells into the board, all-or-nothing.
    ///
    /// Fails (and leaves every bit unchanged) when any cell is still above
    /// the visible board. Cells are expected to be inside the side walls and
    /// above the floor; the active-piece invariant guarantees that.
    pub fn fix_cells(&mut self, cells: [(i8, i8); 4]) -> bool {
        if cells.iter().any(|&(_, y)| y < 0) {
            return false;
        }
        for (x, y) in cells {
            self.rows[y as usize] |= 1 << x;
        }
        true
    }

    /// Remove every full row and insert zero rows at the top.
    ///
    /// A single bottom-to-top compaction pass, so any number of full rows
    /// (contiguous or not) is handled with surviving rows kept in relative
    /// order. Returns the indices of the removed rows, bottom first.
    pub fn remove_full_rows(&mut self) -> ArrayVec<usize, { BOARD_HEIGHT as usize }> {
        let mut removed = ArrayVec::new();
        let mut write = BOARD_HEIGHT as usize;

        for read in (0..BOARD_HEIGHT as usize).rev() {
            if self.rows[read] == FULL_ROW {
                removed.push(read);
            } else {
                write -= 1;
                self.rows[write] = self.rows[read];
            }
        }

        for row in &mut self.rows[..write] {
            *row = 0;
        }

        removed
    }

    /// Reset every row to empty.
    pub fn clear(&mut self) {
        self.rows = [0; BOARD_HEIGHT as usize];
    }

    /// The row masks, top to bottom.
    pub fn rows(&self) -> &[u16; BOARD_HEIGHT as usize] {
        &self.rows
    }

    /// Overwrite a single row mask. Used by scripted setups and tests;
    /// gameplay only writes rows through [`Board::fix_cells`].
    pub fn set_row(&mut self, y: usize, mask: u16) {
        self.rows[y] = mask;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
