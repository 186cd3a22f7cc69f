use crate::{Game, Phase, Piece, Seat, BOARD_LEN};
use itertools::iproduct;

impl Game {
    /// Hands the turn to the next seat which still has a legal move.
    ///
    /// Walks the turn order at most once around the table. A seat without a
    /// legal move has its flag latched false and never takes another turn,
    /// while a seat latched earlier is stepped over outright. When the walk
    /// leaves the last seat in turn order the board's opening phase ends,
    /// since every seat has taken its first turn by then. If no seat can
    /// move the match finishes.
    ///
    /// # See Also
    ///
    /// * [Game::handle_placement_attempt]
    /// * [Board::end_opening_phase](crate::Board::end_opening_phase)
    pub(super) fn advance_turn(&mut self) {
        for _ in 0..Seat::SEATS_LEN {
            if self.current_seat == Seat::Green {
                self.board.end_opening_phase();
            }

            self.current_seat = self.current_seat.next();
            let index = self.current_seat as usize;
            if !self.can_move[index] {
                continue;
            }
            if self.can_play_move(self.current_seat) {
                return;
            }
            self.can_move[index] = false;
        }

        self.phase = Phase::Finished;
    }

    /// Searches for any legal placement left to the argument seat. Every
    /// available piece is tried over every in bounds anchor in all 8
    /// distinct orientations. The 4 rotations of the piece and the 4
    /// rotations of its vertical mirror cover the full set, since the
    /// horizontal mirror repeats the vertical one a half turn around.
    ///
    /// # Arguments
    ///
    /// * `seat`: The seat searching for a legal move.
    ///
    /// # Returns
    ///
    /// Whether at least one legal placement exists.
    pub(super) fn can_play_move(&self, seat: Seat) -> bool {
        let player = &self.players[seat as usize];

        player
            .available()
            .iter()
            .filter_map(|&piece_id| player.get_piece(piece_id))
            .any(|piece| {
                [piece.clone(), piece.flipped_vertically()]
                    .into_iter()
                    .any(|family| self.family_has_anchor(seat, family))
            })
    }

    /// Tries every in bounds anchor for all 4 rotations of one piece.
    fn family_has_anchor(&self, seat: Seat, mut piece: Piece) -> bool {
        for _ in 0..4 {
            let row_limit = BOARD_LEN - piece.height();
            let col_limit = BOARD_LEN - piece.width();
            if iproduct!(0..=row_limit, 0..=col_limit)
                .any(|anchor| self.board.is_placement_valid(seat, &piece, anchor))
            {
                return true;
            }
            piece = piece.rotated_clockwise();
        }

        false
    }
}
