use crate::{seats, Board, Coordinate, Direction, Flip, Player, Rotation, Seat};

pub use game_view::*;
pub use play::*;
pub use score::*;

mod game_view;
mod play;
mod score;
#[cfg(test)]
mod test_setup;
mod turn;

/// The screen the game currently shows.
///
/// # See Also
///
/// * [Game::phase]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// The title screen before a match begins.
    Start,
    /// The rules overlay shown over the title screen.
    RulesOverlay,
    /// A match underway with seats taking turns.
    InProgress,
    /// A finished match showing final standings.
    Finished,
}

/// Describes the reasons why a phase command could not be executed.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum PhaseError {
    /// Attempting a command which the current phase does not accept.
    WrongPhase {
        /// The phase the game was in when the command arrived.
        phase: Phase,
    },
}

/// Owns the board and all four players and implements methods. Created from
/// [Game::new].
#[derive(Debug)]
pub struct Game {
    /// The screen the game currently shows.
    phase: Phase,
    /// The shared board grids.
    board: Board,
    /// An array of players indexed by [seat](Seat) discriminant.
    players: [Player; Seat::SEATS_LEN],
    /// The seat whose turn it is.
    current_seat: Seat,
    /// Whether each seat can still take turns, indexed by [seat](Seat)
    /// discriminant.
    can_move: [bool; Seat::SEATS_LEN],
}

impl Game {
    /// # Returns
    ///
    /// A [Game] struct on the title screen with a vacant board, four fresh
    /// players, and the first seat ready to move.
    pub fn new() -> Game {
        Game {
            phase: Phase::Start,
            board: Board::new(),
            players: seats().map(Player::new),
            current_seat: Seat::Blue,
            can_move: [true; Seat::SEATS_LEN],
        }
    }

    /// # Returns
    ///
    /// The screen the game currently shows.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// # Returns
    ///
    /// The shared board grids.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// # Arguments
    ///
    /// * `seat`: The requested seat.
    ///
    /// # Returns
    ///
    /// The player seated at the requested seat.
    #[inline]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat as usize]
    }

    /// # Returns
    ///
    /// The player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> &Player {
        self.player(self.current_seat)
    }

    /// # Returns
    ///
    /// The seat whose turn it is.
    #[inline]
    pub fn current_seat(&self) -> Seat {
        self.current_seat
    }

    /// # Returns
    ///
    /// Whether each seat can still take turns, indexed by [seat](Seat)
    /// discriminant.
    #[inline]
    pub fn can_move(&self) -> [bool; Seat::SEATS_LEN] {
        self.can_move
    }

    /// Checks whether the title screen is showing and returns the found
    /// error. Otherwise, shows the rules overlay.
    ///
    /// # Errors
    ///
    /// * [PhaseError::WrongPhase] Attempting a command which the current
    /// phase does not accept.
    pub fn open_rules(&mut self) -> Result<(), PhaseError> {
        if self.phase != Phase::Start {
            return Err(PhaseError::WrongPhase { phase: self.phase });
        }

        self.phase = Phase::RulesOverlay;
        Ok(())
    }

    /// Checks whether the rules overlay is showing and returns the found
    /// error. Otherwise, returns to the title screen.
    ///
    /// # Errors
    ///
    /// * [PhaseError::WrongPhase] Attempting a command which the current
    /// phase does not accept.
    pub fn close_rules(&mut self) -> Result<(), PhaseError> {
        if self.phase != Phase::RulesOverlay {
            return Err(PhaseError::WrongPhase { phase: self.phase });
        }

        self.phase = Phase::Start;
        Ok(())
    }

    /// Checks whether the title screen is showing and returns the found
    /// error. Otherwise, begins the match with the first seat to move.
    ///
    /// # Errors
    ///
    /// * [PhaseError::WrongPhase] Attempting a command which the current
    /// phase does not accept.
    pub fn start_match(&mut self) -> Result<(), PhaseError> {
        if self.phase != Phase::Start {
            return Err(PhaseError::WrongPhase { phase: self.phase });
        }

        self.phase = Phase::InProgress;
        Ok(())
    }

    /// Checks whether the match has finished and returns the found error.
    /// Otherwise, discards the finished match and returns to the title
    /// screen with a vacant board and fresh players.
    ///
    /// # Errors
    ///
    /// * [PhaseError::WrongPhase] Attempting a command which the current
    /// phase does not accept.
    pub fn return_home(&mut self) -> Result<(), PhaseError> {
        if self.phase != Phase::Finished {
            return Err(PhaseError::WrongPhase { phase: self.phase });
        }

        *self = Game::new();
        Ok(())
    }

    /// Checks whether a match is underway and returns the found error.
    /// Otherwise, turns the current seat's selected piece a quarter turn in
    /// the argument direction.
    ///
    /// # Arguments
    ///
    /// * `rotation`: The direction of the quarter turn.
    ///
    /// # Errors
    ///
    /// * [PhaseError::WrongPhase] Attempting a command which the current
    /// phase does not accept.
    ///
    /// # See Also
    ///
    /// * [Player::rotate_selected]
    pub fn handle_rotate(&mut self, rotation: Rotation) -> Result<(), PhaseError> {
        self.check_in_progress()?;

        let index = self.current_seat as usize;
        self.players[index].rotate_selected(rotation);
        Ok(())
    }

    /// Checks whether a match is underway and returns the found error.
    /// Otherwise, mirrors the current seat's selected piece across the
    /// argument axis.
    ///
    /// # Arguments
    ///
    /// * `flip`: The axis of the mirror.
    ///
    /// # Errors
    ///
    /// * [PhaseError::WrongPhase] Attempting a command which the current
    /// phase does not accept.
    ///
    /// # See Also
    ///
    /// * [Player::flip_selected]
    pub fn handle_flip(&mut self, flip: Flip) -> Result<(), PhaseError> {
        self.check_in_progress()?;

        let index = self.current_seat as usize;
        self.players[index].flip_selected(flip);
        Ok(())
    }

    /// Checks whether a match is underway and returns the found error.
    /// Otherwise, walks the current seat's cursor through the tray grid.
    ///
    /// # Arguments
    ///
    /// * `direction`: The direction to walk the cursor.
    ///
    /// # Errors
    ///
    /// * [PhaseError::WrongPhase] Attempting a command which the current
    /// phase does not accept.
    ///
    /// # See Also
    ///
    /// * [Player::cycle_selection]
    ///
    /// # Returns
    ///
    /// Whether the cursor moved to another available piece.
    pub fn handle_selection_move(&mut self, direction: Direction) -> Result<bool, PhaseError> {
        self.check_in_progress()?;

        let index = self.current_seat as usize;
        Ok(self.players[index].cycle_selection(direction))
    }

    /// Checks whether a match is underway and returns the found error.
    /// Otherwise, redraws the board preview with the current seat's selected
    /// piece over the argument coordinate.
    ///
    /// # Arguments
    ///
    /// * `(row, col)`: The coordinate taken by the top left cell of the
    /// piece's grid.
    ///
    /// # Errors
    ///
    /// * [PhaseError::WrongPhase] Attempting a command which the current
    /// phase does not accept.
    ///
    /// # See Also
    ///
    /// * [Board::update_shadow]
    pub fn preview_placement(&mut self, (row, col): Coordinate) -> Result<(), PhaseError> {
        self.check_in_progress()?;

        let seat = self.current_seat;
        self.board
            .update_shadow(seat, self.players[seat as usize].current_piece(), (row, col));
        Ok(())
    }

    /// Returns [PhaseError::WrongPhase] unless a match is underway.
    fn check_in_progress(&self) -> Result<(), PhaseError> {
        if self.phase != Phase::InProgress {
            return Err(PhaseError::WrongPhase { phase: self.phase });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mirror, ShadowCell, BOARD_LEN, PIECES_LEN, STARTING_SQUARES};

    #[test]
    fn new_game_shows_title_screen() {
        let game = Game::new();

        assert_eq!(Phase::Start, game.phase());
        assert_eq!(Seat::Blue, game.current_seat());
        assert_eq!([true; Seat::SEATS_LEN], game.can_move());
        assert!(game.board().opening_phase());
        for seat in seats() {
            assert_eq!(seat, game.player(seat).seat());
            assert_eq!(PIECES_LEN, game.player(seat).available().len());
        }
    }

    #[test]
    fn open_rules_shows_overlay() {
        let mut game = Game::new();

        game.open_rules().unwrap();

        assert_eq!(Phase::RulesOverlay, game.phase());
    }

    #[test]
    fn close_rules_returns_to_title_screen() {
        let mut game = Game::new();
        game.open_rules().unwrap();

        game.close_rules().unwrap();

        assert_eq!(Phase::Start, game.phase());
    }

    #[test]
    fn rules_commands_reject_wrong_phase() {
        let mut game = Game::started_game();

        assert_eq!(
            Err(PhaseError::WrongPhase {
                phase: Phase::InProgress
            }),
            game.open_rules()
        );
        assert_eq!(
            Err(PhaseError::WrongPhase {
                phase: Phase::InProgress
            }),
            game.close_rules()
        );
    }

    #[test]
    fn start_match_begins_play() {
        let mut game = Game::new();

        game.start_match().unwrap();

        assert_eq!(Phase::InProgress, game.phase());
        assert_eq!(Seat::Blue, game.current_seat());
    }

    #[test]
    fn start_match_rejects_wrong_phase() {
        let mut game = Game::started_game();

        assert_eq!(
            Err(PhaseError::WrongPhase {
                phase: Phase::InProgress
            }),
            game.start_match()
        );
    }

    #[test]
    fn return_home_rebuilds_game() {
        let mut game = Game::started_game();
        game.handle_placement_attempt((0, BOARD_LEN - 1)).unwrap();
        *game.mut_phase() = Phase::Finished;

        game.return_home().unwrap();

        assert_eq!(Phase::Start, game.phase());
        assert_eq!(Seat::Blue, game.current_seat());
        assert!(game.board().opening_phase());
        assert_eq!(Some(None), game.board().get_cell((0, BOARD_LEN - 1)));
        assert_eq!(STARTING_SQUARES, game.player(Seat::Blue).squares_left());
    }

    #[test]
    fn return_home_rejects_wrong_phase() {
        let mut game = Game::new();

        assert_eq!(
            Err(PhaseError::WrongPhase { phase: Phase::Start }),
            game.return_home()
        );
    }

    #[test]
    fn handle_rotate_turns_current_piece() {
        let mut game = Game::started_game();

        game.handle_rotate(Rotation::Clockwise).unwrap();

        assert_eq!(1, game.current_player().current_piece().orientation());
    }

    #[test]
    fn handle_flip_mirrors_current_piece() {
        let mut game = Game::started_game();

        game.handle_flip(Flip::Horizontal).unwrap();

        assert_eq!(
            Mirror::Horizontal,
            game.current_player().current_piece().mirror()
        );
    }

    #[test]
    fn handle_selection_move_walks_tray() {
        let mut game = Game::started_game();

        assert_eq!(Ok(true), game.handle_selection_move(Direction::Right));
        assert_eq!(2, game.current_player().selected());

        assert_eq!(Ok(false), game.handle_selection_move(Direction::Up));
        assert_eq!(2, game.current_player().selected());
    }

    #[test]
    fn preview_placement_redraws_shadow() {
        let mut game = Game::started_game();

        game.preview_placement((0, BOARD_LEN - 1)).unwrap();

        assert_eq!(
            Some(ShadowCell::Legal(Seat::Blue)),
            game.board().get_shadow_cell((0, BOARD_LEN - 1))
        );
    }

    #[test]
    fn piece_commands_reject_wrong_phase() {
        let mut game = Game::new();
        let expected = Err(PhaseError::WrongPhase { phase: Phase::Start });

        assert_eq!(expected, game.handle_rotate(Rotation::Clockwise));
        assert_eq!(expected, game.handle_flip(Flip::Vertical));
        assert_eq!(
            expected,
            game.handle_selection_move(Direction::Left).map(|_| ())
        );
        assert_eq!(expected, game.preview_placement((0, 0)));
    }
}
