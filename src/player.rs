use crate::{
    standard_pieces, Flip, Piece, PieceId, PieceSet, Pieces, Rotation, Seat, PIECES_LEN,
    STARTING_SQUARES,
};
use std::iter;

pub use player_view::*;
pub use selection::*;

mod player_view;
mod selection;
#[cfg(test)]
mod test_setup;

/// Owns one seat's pieces and selection and implements methods. Created from
/// [Player::new].
#[derive(Debug)]
pub struct Player {
    /// The seat which owns this set of pieces.
    seat: Seat,
    /// The display name shown for the seat.
    name: String,
    /// A vector of [pieces](Piece) indexed directly by [identity](PieceId)
    /// where position `0` holds [Piece::sentinel].
    pieces: Pieces,
    /// An ordered set of [piece identities](PieceId) which have not been
    /// placed on the board.
    available: PieceSet,
    /// The [identity](PieceId) of the piece under the cursor.
    selected: PieceId,
    /// The number of squares left across available pieces.
    squares_left: usize,
    /// Whether every catalog piece has been placed.
    all_pieces_used: bool,
    /// The [identity](PieceId) of the most recently placed piece.
    last_placed: PieceId,
}

impl Player {
    /// # Arguments
    ///
    /// * `seat`: The seat which owns this set of pieces.
    ///
    /// # Returns
    ///
    /// A [Player] struct with the full catalog available, the first catalog
    /// piece selected, and the seat's colour as its name.
    pub fn new(seat: Seat) -> Player {
        let name = match seat {
            Seat::Blue => "Blue",
            Seat::Yellow => "Yellow",
            Seat::Red => "Red",
            Seat::Green => "Green",
        }
        .to_string();
        let pieces = iter::once(Piece::sentinel())
            .chain(standard_pieces())
            .collect();
        let available = (1..=PIECES_LEN).collect();

        Player {
            seat,
            name,
            pieces,
            available,
            selected: 1,
            squares_left: STARTING_SQUARES,
            all_pieces_used: false,
            last_placed: Piece::SENTINEL_ID,
        }
    }

    /// # Returns
    ///
    /// The seat which owns this set of pieces.
    #[inline]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// # Returns
    ///
    /// The display name shown for the seat.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name shown for the seat.
    ///
    /// # Arguments
    ///
    /// * `name`: The display name shown for the seat.
    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// # Returns
    ///
    /// An ordered set of [piece identities](PieceId) which have not been
    /// placed on the board.
    #[inline]
    pub fn available(&self) -> &PieceSet {
        &self.available
    }

    /// # Returns
    ///
    /// The [identity](PieceId) of the piece under the cursor, or
    /// [Piece::SENTINEL_ID] once the tray is empty.
    #[inline]
    pub fn selected(&self) -> PieceId {
        self.selected
    }

    /// # Returns
    ///
    /// The number of squares left across available pieces.
    #[inline]
    pub fn squares_left(&self) -> usize {
        self.squares_left
    }

    /// # Returns
    ///
    /// Whether every catalog piece has been placed.
    #[inline]
    pub fn all_pieces_used(&self) -> bool {
        self.all_pieces_used
    }

    /// # Returns
    ///
    /// The [identity](PieceId) of the most recently placed piece, or
    /// [Piece::SENTINEL_ID] before the first placement.
    #[inline]
    pub fn last_placed(&self) -> PieceId {
        self.last_placed
    }

    /// # Returns
    ///
    /// The piece under the cursor in its current transform.
    #[inline]
    pub fn current_piece(&self) -> &Piece {
        &self.pieces[self.selected]
    }

    /// # Arguments
    ///
    /// * `piece_id`: The [identity](PieceId) of the requested piece.
    ///
    /// # Returns
    ///
    /// The requested piece in its current transform or `None` if out of
    /// bounds.
    #[inline]
    pub fn get_piece(&self, piece_id: PieceId) -> Option<&Piece> {
        self.pieces.get(piece_id)
    }

    /// Turns the piece under the cursor a quarter turn in the argument
    /// direction. The transform persists on the piece after the cursor moves
    /// away.
    ///
    /// # Arguments
    ///
    /// * `rotation`: The direction of the quarter turn.
    ///
    /// # See Also
    ///
    /// * [Piece::rotated]
    pub fn rotate_selected(&mut self, rotation: Rotation) {
        let piece = self.pieces[self.selected].rotated(rotation);
        self.pieces[self.selected] = piece;
    }

    /// Mirrors the piece under the cursor across the argument axis. The
    /// transform persists on the piece after the cursor moves away.
    ///
    /// # Arguments
    ///
    /// * `flip`: The axis of the mirror.
    ///
    /// # See Also
    ///
    /// * [Piece::flipped]
    pub fn flip_selected(&mut self, flip: Flip) {
        let piece = self.pieces[self.selected].flipped(flip);
        self.pieces[self.selected] = piece;
    }

    /// Checks whether the piece under the cursor is still available and
    /// returns the found error. Otherwise, removes the piece from the tray,
    /// settles its squares, and moves the cursor to the lowest available
    /// identity or [Piece::SENTINEL_ID] once the tray is empty.
    ///
    /// # Errors
    ///
    /// * [SelectError::Unavailable] Attempting to place a piece which is no
    /// longer available.
    ///
    /// # See Also
    ///
    /// * [Board::place_piece](crate::Board::place_piece)
    ///
    /// # Returns
    ///
    /// The [identity](PieceId) of the placed piece.
    pub fn confirm_placement(&mut self) -> Result<PieceId, SelectError> {
        let piece_id = self.selected;
        if !self.available.remove(&piece_id) {
            return Err(SelectError::Unavailable { piece_id });
        }

        self.squares_left -= self.pieces[piece_id].square_count();
        self.last_placed = piece_id;
        self.all_pieces_used = self.available.is_empty();
        self.selected = self
            .available
            .first()
            .copied()
            .unwrap_or(Piece::SENTINEL_ID);

        Ok(piece_id)
    }
}
