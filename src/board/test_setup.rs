use crate::{random_claimed_cells, Board, BoardCells, ShadowCells};
use rand::Rng;

impl Board {
    /// A mutable reference to `self.cells`.
    pub fn mut_cells(&mut self) -> &mut BoardCells {
        &mut self.cells
    }

    /// A mutable reference to `self.shadow`.
    pub fn mut_shadow(&mut self) -> &mut ShadowCells {
        &mut self.shadow
    }

    /// A mutable reference to `self.opening_phase`.
    pub fn mut_opening_phase(&mut self) -> &mut bool {
        &mut self.opening_phase
    }

    /// It claims a random, small, non-zero number of distinct cells for
    /// random seats.
    ///
    /// # Returns
    ///
    /// The number of claimed cells.
    pub fn random_claimed_cells<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_claimed_cells(rng, &mut self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_claimed_cells() {
        let mut rng = rand::thread_rng();
        let mut board = Board::new();

        let claimed = board.random_claimed_cells(&mut rng);

        let counted = board
            .cells()
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count();

        assert!(claimed > 0);
        assert_eq!(claimed, counted);
    }

    #[test]
    fn mut_opening_phase() {
        let mut board = Board::new();

        *board.mut_opening_phase() = false;

        assert!(!board.opening_phase());
    }
}
