use crate::{Board, Coordinate, Piece, Seat, BOARD_LEN};

/// One position in the preview grid which either mirrors the settled grid or
/// carries the pending placement.
///
/// # See Also
///
/// * [Board::update_shadow]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShadowCell {
    /// No settled piece and no preview.
    Vacant,
    /// A settled cell claimed by a seat.
    Owned(Seat),
    /// A previewed cell where the pending placement would be legal.
    Legal(Seat),
    /// A previewed cell where the pending placement would break a rule.
    Illegal,
}

impl Board {
    /// Redraws the preview grid with the pending placement over the settled
    /// cells. Covered cells show the seat's colour when the placement would
    /// be legal and a warning otherwise. Cells hanging past the right or
    /// bottom edge are clipped from the preview.
    ///
    /// # Arguments
    ///
    /// * `seat`: The seat attempting the placement.
    /// * `piece`: The piece in its current transform.
    /// * `(row, col)`: The coordinate taken by the top left cell of the
    /// piece's grid.
    ///
    /// # See Also
    ///
    /// * [Board::is_placement_valid]
    /// * [Board::clear_shadow]
    pub fn update_shadow(&mut self, seat: Seat, piece: &Piece, (row, col): Coordinate) {
        let legal = self.is_placement_valid(seat, piece, (row, col));

        self.clear_shadow();

        for (piece_row, piece_col) in piece.occupied_cells() {
            let shadow_row = row + piece_row;
            let shadow_col = col + piece_col;
            if shadow_row < BOARD_LEN && shadow_col < BOARD_LEN {
                self.shadow[shadow_row][shadow_col] = if legal {
                    ShadowCell::Legal(seat)
                } else {
                    ShadowCell::Illegal
                };
            }
        }
    }

    /// Redraws the preview grid as a plain copy of the settled cells with no
    /// pending placement.
    ///
    /// # See Also
    ///
    /// * [Board::update_shadow]
    pub fn clear_shadow(&mut self) {
        for (cells, shadow_cells) in self.cells.iter().zip(self.shadow.iter_mut()) {
            for (cell, shadow_cell) in cells.iter().zip(shadow_cells.iter_mut()) {
                *shadow_cell = match cell {
                    Some(seat) => ShadowCell::Owned(*seat),
                    None => ShadowCell::Vacant,
                };
            }
        }
    }
}
