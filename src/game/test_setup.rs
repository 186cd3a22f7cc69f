use crate::{Board, Game, Phase, Player, Seat};

impl Game {
    /// Creates a game whose match is already underway.
    ///
    /// # Returns
    ///
    /// An instance of [Game] in the [Phase::InProgress] phase.
    pub fn started_game() -> Game {
        let mut game = Game::new();
        game.phase = Phase::InProgress;
        game
    }

    /// A mutable reference to `self.phase`.
    pub fn mut_phase(&mut self) -> &mut Phase {
        &mut self.phase
    }

    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A mutable reference to the given seat's player.
    pub fn mut_player(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat as usize]
    }

    /// A mutable reference to `self.current_seat`.
    pub fn mut_current_seat(&mut self) -> &mut Seat {
        &mut self.current_seat
    }

    /// A mutable reference to `self.can_move`.
    pub fn mut_can_move(&mut self) -> &mut [bool; Seat::SEATS_LEN] {
        &mut self.can_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seats;

    #[test]
    fn started_game_is_in_progress() {
        let game = Game::started_game();

        assert_eq!(Phase::InProgress, game.phase());
        assert_eq!(Seat::Blue, game.current_seat());
        assert!(game.board().opening_phase());
    }

    #[test]
    fn mut_player_reaches_every_seat() {
        let mut game = Game::started_game();

        for seat in seats() {
            assert_eq!(seat, game.mut_player(seat).seat());
        }
    }

    #[test]
    fn mut_can_move_overwrites_flags() {
        let mut game = Game::started_game();

        *game.mut_can_move() = [false; Seat::SEATS_LEN];

        assert_eq!([false; Seat::SEATS_LEN], game.can_move());
    }
}
