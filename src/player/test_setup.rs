use crate::{random_available_gaps, random_selection, PieceId, PieceSet, Pieces, Player};
use rand::Rng;

impl Player {
    /// A mutable reference to `self.pieces`.
    pub fn mut_pieces(&mut self) -> &mut Pieces {
        &mut self.pieces
    }

    /// A mutable reference to `self.available`.
    pub fn mut_available(&mut self) -> &mut PieceSet {
        &mut self.available
    }

    /// A mutable reference to `self.selected`.
    pub fn mut_selected(&mut self) -> &mut PieceId {
        &mut self.selected
    }

    /// A mutable reference to `self.squares_left`.
    pub fn mut_squares_left(&mut self) -> &mut usize {
        &mut self.squares_left
    }

    /// A mutable reference to `self.all_pieces_used`.
    pub fn mut_all_pieces_used(&mut self) -> &mut bool {
        &mut self.all_pieces_used
    }

    /// A mutable reference to `self.last_placed`.
    pub fn mut_last_placed(&mut self) -> &mut PieceId {
        &mut self.last_placed
    }

    /// It removes a random, small, non-zero number of pieces from the tray.
    ///
    /// # Returns
    ///
    /// The number of removed pieces.
    pub fn random_available_gaps<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_available_gaps(rng, &mut self.available)
    }

    /// Moves the cursor to a random available piece or
    /// [Piece::SENTINEL_ID](crate::Piece::SENTINEL_ID) once the tray is
    /// empty.
    ///
    /// # Returns
    ///
    /// The identity of the piece under the cursor.
    pub fn random_selection<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PieceId {
        self.selected = random_selection(rng, &self.available);
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Piece, Seat, PIECES_LEN};

    #[test]
    fn random_available_gaps() {
        let mut rng = rand::thread_rng();
        let mut player = Player::new(Seat::Blue);

        let gaps = player.random_available_gaps(&mut rng);

        assert!(gaps > 0);
        assert_eq!(PIECES_LEN - gaps, player.available().len());
    }

    #[test]
    fn random_selection_lands_on_available_piece() {
        let mut rng = rand::thread_rng();
        let mut player = Player::new(Seat::Blue);
        player.random_available_gaps(&mut rng);

        let selected = player.random_selection(&mut rng);

        assert!(player.available().contains(&selected));
    }

    #[test]
    fn random_selection_with_empty_tray_is_sentinel() {
        let mut rng = rand::thread_rng();
        let mut player = Player::new(Seat::Blue);
        player.mut_available().clear();

        let selected = player.random_selection(&mut rng);

        assert_eq!(Piece::SENTINEL_ID, selected);
    }
}
