use crate::{adjacent_coordinates, diagonal_coordinates, Board, Coordinate, Piece, Seat, BOARD_LEN};
use map_macro::hash_set;
use std::collections::{BTreeSet, HashSet};

/// Describes the reasons why [Board::place_piece] could not be executed.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum PlacementError {
    /// Attempting to place a piece past the right or bottom edge of the
    /// board.
    OutOfBounds {
        /// The number of rows needed from the top edge to fit the piece.
        rows_needed: usize,
        /// The number of columns needed from the left edge to fit the piece.
        cols_needed: usize,
    },
    /// Attempting to open without covering the seat's starting corner.
    StartingCornerNotCovered {
        /// The corner cell assigned to the seat.
        corner: Coordinate,
    },
    /// Attempting to cover cells which are already claimed.
    Overlap {
        /// The covered coordinates which are already claimed.
        cells: BTreeSet<Coordinate>,
    },
    /// Attempting to rest flat against the seat's own pieces.
    EdgeContact {
        /// The covered coordinates which share an edge with the seat's
        /// pieces.
        cells: BTreeSet<Coordinate>,
    },
    /// Attempting to place away from every corner of the seat's own pieces.
    NoCornerContact,
}

impl Board {
    /// Checks whether the placement matches various error conditions and
    /// returns all found errors.
    ///
    /// During the opening phase the only requirements are staying on the board
    /// and covering the seat's starting corner. Afterwards the piece must
    /// cover only vacant cells, touch at least one of the seat's pieces
    /// corner to corner, and rest flat against none of them. Cells of other
    /// seats constrain nothing beyond overlap.
    ///
    /// # Arguments
    ///
    /// * `seat`: The seat attempting the placement.
    /// * `piece`: The piece in its current transform.
    /// * `(row, col)`: The coordinate taken by the top left cell of the
    /// piece's grid.
    ///
    /// # Errors
    ///
    /// * [PlacementError::OutOfBounds] Attempting to place a piece past the
    /// right or bottom edge of the board.
    /// * [PlacementError::StartingCornerNotCovered] Attempting to open
    /// without covering the seat's starting corner.
    /// * [PlacementError::Overlap] Attempting to cover cells which are
    /// already claimed.
    /// * [PlacementError::EdgeContact] Attempting to rest flat against the
    /// seat's own pieces.
    /// * [PlacementError::NoCornerContact] Attempting to place away from
    /// every corner of the seat's own pieces.
    pub fn check_placement(
        &self,
        seat: Seat,
        piece: &Piece,
        (row, col): Coordinate,
    ) -> Result<(), HashSet<PlacementError>> {
        let rows_needed = row + piece.height();
        let cols_needed = col + piece.width();
        if rows_needed > BOARD_LEN || cols_needed > BOARD_LEN {
            return Err(hash_set! {
                PlacementError::OutOfBounds {
                    rows_needed,
                    cols_needed,
                }
            });
        }

        if self.opening_phase {
            let corner = seat.starting_corner();
            let covers_corner = piece
                .occupied_cells()
                .any(|(piece_row, piece_col)| (row + piece_row, col + piece_col) == corner);
            return if covers_corner {
                Ok(())
            } else {
                Err(hash_set! { PlacementError::StartingCornerNotCovered { corner } })
            };
        }

        let mut errors = HashSet::with_capacity(3);
        let mut overlaps = BTreeSet::new();
        let mut edge_contacts = BTreeSet::new();

        for (piece_row, piece_col) in piece.occupied_cells() {
            let (cell_row, cell_col) = (row + piece_row, col + piece_col);

            if self.cells[cell_row][cell_col].is_some() {
                overlaps.insert((cell_row, cell_col));
            }

            if adjacent_coordinates((cell_row, cell_col)).any(|(adjacent_row, adjacent_col)| {
                self.cells[adjacent_row][adjacent_col] == Some(seat)
            }) {
                edge_contacts.insert((cell_row, cell_col));
            }
        }

        let touches_corner = piece.occupied_cells().any(|(piece_row, piece_col)| {
            diagonal_coordinates((row + piece_row, col + piece_col)).any(
                |(diagonal_row, diagonal_col)| {
                    self.cells[diagonal_row][diagonal_col] == Some(seat)
                },
            )
        });

        if !overlaps.is_empty() {
            errors.insert(PlacementError::Overlap { cells: overlaps });
        }
        if !edge_contacts.is_empty() {
            errors.insert(PlacementError::EdgeContact {
                cells: edge_contacts,
            });
        }
        if !touches_corner {
            errors.insert(PlacementError::NoCornerContact);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(())
    }

    /// Checks whether the placement matches various error conditions and
    /// returns all found errors. Otherwise, claims the covered cells for the
    /// seat.
    ///
    /// # Arguments
    ///
    /// * `seat`: The seat attempting the placement.
    /// * `piece`: The piece in its current transform.
    /// * `(row, col)`: The coordinate taken by the top left cell of the
    /// piece's grid.
    ///
    /// # Errors
    ///
    /// * See [Board::check_placement].
    ///
    /// # See Also
    ///
    /// * [Player::confirm_placement](crate::Player::confirm_placement)
    pub fn place_piece(
        &mut self,
        seat: Seat,
        piece: &Piece,
        (row, col): Coordinate,
    ) -> Result<(), HashSet<PlacementError>> {
        self.check_placement(seat, piece, (row, col))?;

        for (piece_row, piece_col) in piece.occupied_cells() {
            self.cells[row + piece_row][col + piece_col] = Some(seat);
        }

        Ok(())
    }

    /// # Arguments
    ///
    /// * `seat`: The seat attempting the placement.
    /// * `piece`: The piece in its current transform.
    /// * `coordinate`: The coordinate taken by the top left cell of the
    /// piece's grid.
    ///
    /// # See Also
    ///
    /// * [Board::update_shadow]
    ///
    /// # Returns
    ///
    /// Whether [Board::check_placement] finds no errors.
    #[inline]
    pub fn is_placement_valid(&self, seat: Seat, piece: &Piece, coordinate: Coordinate) -> bool {
        self.check_placement(seat, piece, coordinate).is_ok()
    }
}
