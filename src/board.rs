use crate::{BoardCells, Cell, Coordinate, ShadowCells, BOARD_LEN};

pub use place::*;
pub use shadow::*;

mod place;
mod shadow;
#[cfg(test)]
mod test_setup;

/// Owns the settled grid and its preview copy and implements methods. Created
/// from [Board::new].
#[derive(Debug)]
pub struct Board {
    /// A square grid of settled [cells](Cell) in row major order.
    cells: BoardCells,
    /// A square grid which previews a placement over the settled grid.
    shadow: ShadowCells,
    /// Whether seats are still opening from their starting corners.
    opening_phase: bool,
}

impl Board {
    /// # Returns
    ///
    /// A [Board] struct with every cell vacant and the opening phase in
    /// effect.
    pub fn new() -> Board {
        let cells = (0..BOARD_LEN)
            .map(|_| (0..BOARD_LEN).map(|_| None).collect())
            .collect();
        let shadow = (0..BOARD_LEN)
            .map(|_| (0..BOARD_LEN).map(|_| ShadowCell::Vacant).collect())
            .collect();

        Board {
            cells,
            shadow,
            opening_phase: true,
        }
    }

    /// # Returns
    ///
    /// A square grid of settled [cells](Cell) in row major order.
    #[inline]
    pub fn cells(&self) -> &BoardCells {
        &self.cells
    }

    /// # Returns
    ///
    /// A square grid which previews a placement over the settled grid.
    #[inline]
    pub fn shadow(&self) -> &ShadowCells {
        &self.shadow
    }

    /// # Arguments
    ///
    /// * `(row, col)`: The requested [coordinate](Coordinate).
    ///
    /// # Returns
    ///
    /// The settled [cell](Cell) at the requested coordinate or `None` if out
    /// of bounds.
    #[inline]
    pub fn get_cell(&self, (row, col): Coordinate) -> Option<Cell> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// # Arguments
    ///
    /// * `(row, col)`: The requested [coordinate](Coordinate).
    ///
    /// # Returns
    ///
    /// The [shadow cell](ShadowCell) at the requested coordinate or `None` if
    /// out of bounds.
    #[inline]
    pub fn get_shadow_cell(&self, (row, col): Coordinate) -> Option<ShadowCell> {
        self.shadow.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// # Returns
    ///
    /// Whether seats are still opening from their starting corners.
    #[inline]
    pub fn opening_phase(&self) -> bool {
        self.opening_phase
    }

    /// Ends the opening phase once every seat has taken its first turn. The
    /// latch never resets for the rest of the match.
    ///
    /// # See Also
    ///
    /// * [Board::check_placement]
    pub fn end_opening_phase(&mut self) {
        self.opening_phase = false;
    }
}
