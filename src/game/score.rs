use crate::{seats, Game, Player, Scores, Seat, FULL_SET_BONUS, MONOMINO_FINISH_BONUS};
use std::cmp;
use std::collections::BTreeSet;

/// The final outcome of a match once no seat can place another piece.
///
/// # See Also
///
/// * [Game::standings]
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Standings {
    /// Each seat's final score indexed by [Seat].
    pub scores: Scores,
    /// Every seat which earned the highest score.
    pub winners: BTreeSet<Seat>,
}

/// Sums the given player's penalties and bonuses.
///
/// Each square left in the tray costs one point. Emptying the tray earns
/// [FULL_SET_BONUS], and emptying it on the monomino earns
/// [MONOMINO_FINISH_BONUS] on top.
fn final_score(player: &Player) -> i32 {
    let mut score = -(player.squares_left() as i32);
    if player.all_pieces_used() {
        score += FULL_SET_BONUS;
        if player
            .get_piece(player.last_placed())
            .map_or(false, |piece| piece.square_count() == 1)
        {
            score += MONOMINO_FINISH_BONUS;
        }
    }
    score
}

impl Game {
    /// Computes each seat's final score and collects the highest scoring
    /// seats as winners. Ties share the victory.
    ///
    /// # See Also
    ///
    /// * [Game::handle_placement_attempt]
    ///
    /// # Returns
    ///
    /// The final [Standings] for every seat.
    pub fn standings(&self) -> Standings {
        let scores = seats().map(|seat| final_score(&self.players[seat as usize]));
        let highest = scores.into_iter().fold(i32::MIN, cmp::max);
        let winners = seats()
            .into_iter()
            .filter(|&seat| scores[seat as usize] == highest)
            .collect();
        Standings { scores, winners }
    }
}
