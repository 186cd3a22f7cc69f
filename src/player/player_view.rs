use crate::{Piece, PieceId, PieceSet, Player, Seat};

/// Immutably borrows properties from [Player].
#[derive(Debug)]
pub struct PlayerView<'a> {
    /// The seat which owns this set of pieces.
    pub seat: Seat,
    /// The display name shown for the seat.
    pub name: &'a str,
    /// An ordered set of [piece identities](PieceId) which have not been
    /// placed on the board.
    pub available: &'a PieceSet,
    /// The piece under the cursor in its current transform.
    pub piece: &'a Piece,
    /// The [identity](PieceId) of the piece under the cursor.
    pub selected: PieceId,
    /// The number of squares left across available pieces.
    pub squares_left: usize,
    /// Whether every catalog piece has been placed.
    pub all_pieces_used: bool,
}

impl<'a> Player {
    /// # Returns
    ///
    /// A new [PlayerView] struct, which immutably borrows properties from
    /// [Player], but with `pieces` replaced by the piece under the cursor.
    pub fn player_view(&'a self) -> PlayerView<'a> {
        PlayerView {
            seat: self.seat(),
            name: self.name(),
            available: self.available(),
            piece: self.current_piece(),
            selected: self.selected(),
            squares_left: self.squares_left(),
            all_pieces_used: self.all_pieces_used(),
        }
    }
}
