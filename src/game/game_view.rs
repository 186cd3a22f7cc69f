use crate::{seats, BoardCells, Game, Phase, PlayerView, Seat, ShadowCells, Standings};

/// An immutable view of [Game] for rendering.
///
/// While the match is [finished](Phase::Finished), carries the final
/// [Standings] as well.
///
/// # See Also
///
/// * [Game::game_view]
#[derive(Debug)]
pub struct GameView<'a> {
    /// Behaves like [Game::phase].
    pub phase: Phase,
    /// Behaves like [Game::current_seat].
    pub current_seat: Seat,
    /// Behaves like [Game::can_move].
    pub can_move: [bool; Seat::SEATS_LEN],
    /// Behaves like [Board::cells](crate::Board::cells).
    pub board: &'a BoardCells,
    /// Behaves like [Board::shadow](crate::Board::shadow).
    pub shadow: &'a ShadowCells,
    /// Behaves like [Player::player_view](crate::Player::player_view) for
    /// each seat indexed by [Seat].
    pub players: [PlayerView<'a>; Seat::SEATS_LEN],
    /// Behaves like [Game::standings] once the match is finished.
    pub standings: Option<Standings>,
}

impl<'a> Game {
    /// Creates an immutable view of [Game] for rendering.
    ///
    /// # Returns
    ///
    /// An instance of [GameView] from properties of [Game].
    pub fn game_view(&'a self) -> GameView<'a> {
        GameView {
            phase: self.phase,
            current_seat: self.current_seat,
            can_move: self.can_move,
            board: self.board.cells(),
            shadow: self.board.shadow(),
            players: seats().map(|seat| self.players[seat as usize].player_view()),
            standings: (self.phase == Phase::Finished).then(|| self.standings()),
        }
    }
}
