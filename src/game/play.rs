use crate::{Coordinate, Game, Phase, PlacementError, Seat, SelectError, Standings};
use either::Either;
use std::collections::HashSet;

/// Describes the reasons why [Game::handle_placement_attempt] could not be
/// executed.
///
/// Unlike the other error enums this one cannot derive `Hash` because the
/// board reports its reasons in a [HashSet].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PlayError {
    /// Attempting to place while no match is underway.
    WrongPhase {
        /// The phase the game was in when the command arrived.
        phase: Phase,
    },
    /// Attempting a placement which breaks the board rules.
    Placement {
        /// Every broken rule found by the board.
        reasons: HashSet<PlacementError>,
    },
    /// Attempting to place a piece which is no longer available.
    Selection {
        /// The found selection error.
        error: SelectError,
    },
}

impl Game {
    /// Checks whether the placement matches various error conditions and
    /// returns the found errors. Otherwise, settles the current seat's
    /// selected piece on the board, removes it from the seat's tray, clears
    /// the preview, and hands the turn to the next seat which still has a
    /// legal move.
    ///
    /// # Arguments
    ///
    /// * `(row, col)`: The coordinate taken by the top left cell of the
    /// piece's grid.
    ///
    /// # Errors
    ///
    /// * [PlayError::WrongPhase] Attempting to place while no match is
    /// underway.
    /// * [PlayError::Placement] Attempting a placement which breaks the
    /// board rules.
    /// * [PlayError::Selection] Attempting to place a piece which is no
    /// longer available.
    ///
    /// # See Also
    ///
    /// * [Board::place_piece](crate::Board::place_piece)
    /// * [Player::confirm_placement](crate::Player::confirm_placement)
    ///
    /// # Returns
    ///
    /// The seat whose turn is next while the match continues, or the final
    /// [standings](Standings) once no seat can move.
    pub fn handle_placement_attempt(
        &mut self,
        (row, col): Coordinate,
    ) -> Result<Either<Seat, Standings>, PlayError> {
        if self.phase != Phase::InProgress {
            return Err(PlayError::WrongPhase { phase: self.phase });
        }

        let seat = self.current_seat;
        let index = seat as usize;
        self.board
            .place_piece(seat, self.players[index].current_piece(), (row, col))
            .map_err(|reasons| PlayError::Placement { reasons })?;
        self.players[index]
            .confirm_placement()
            .map_err(|error| PlayError::Selection { error })?;
        self.board.clear_shadow();

        self.advance_turn();

        if self.phase == Phase::Finished {
            Ok(Either::Right(self.standings()))
        } else {
            Ok(Either::Left(self.current_seat))
        }
    }
}
