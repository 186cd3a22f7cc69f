use crate::{
    standard_pieces, BoardCells, Flip, Piece, PieceId, PieceSet, Rotation, Seat, BOARD_LEN,
    PIECES_LEN,
};
use rand::seq::{index, IteratorRandom};
use rand::Rng;
use tap::Tap;

/// A random [piece](Piece) from the catalog with a random, small number of
/// rotations and flips applied.
pub fn random_transformed_piece<R: Rng + ?Sized>(rng: &mut R) -> Piece {
    standard_pieces()[rng.gen_range(0..PIECES_LEN)]
        .clone()
        .tap_mut(|piece| {
            for _ in 0..rng.gen_range(0..8) {
                *piece = if rng.gen() {
                    piece.rotated(rng.gen::<Rotation>())
                } else {
                    piece.flipped(rng.gen::<Flip>())
                };
            }
        })
}

/// It removes a random, small, non-zero number of pieces from the tray.
///
/// # Returns
///
/// The number of removed pieces.
pub fn random_available_gaps<R: Rng + ?Sized>(rng: &mut R, available: &mut PieceSet) -> usize {
    let gaps = rng.gen_range(1..=PIECES_LEN / 4);
    let removed = available.iter().copied().choose_multiple(rng, gaps);
    for id in &removed {
        available.remove(id);
    }

    removed.len()
}

/// A random available piece or [Piece::SENTINEL_ID] once the tray is empty.
pub fn random_selection<R: Rng + ?Sized>(rng: &mut R, available: &PieceSet) -> PieceId {
    available
        .iter()
        .copied()
        .choose(rng)
        .unwrap_or(Piece::SENTINEL_ID)
}

/// It claims a random, small, non-zero number of distinct cells for random
/// [seats](Seat).
///
/// # Returns
///
/// The number of claimed cells.
pub fn random_claimed_cells<R: Rng + ?Sized>(rng: &mut R, cells: &mut BoardCells) -> usize {
    let claimed = rng.gen_range(1..=2 * BOARD_LEN);
    for cell in index::sample(rng, BOARD_LEN * BOARD_LEN, claimed) {
        cells[cell / BOARD_LEN][cell % BOARD_LEN] = Some(rng.gen::<Seat>());
    }

    claimed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn random_transformed_piece_stays_in_catalog() {
        let mut rng = rand::thread_rng();

        let piece = random_transformed_piece(&mut rng);

        assert!((1..=PIECES_LEN).contains(&piece.id()));
        assert_eq!(
            standard_pieces()[piece.id() - 1].square_count(),
            piece.square_count()
        );
    }

    #[test]
    fn random_available_gaps_from_full_tray() {
        let mut rng = rand::thread_rng();
        let mut available: PieceSet = (1..=PIECES_LEN).collect();

        let gaps = random_available_gaps(&mut rng, &mut available);

        assert!(gaps > 0);
        assert_eq!(PIECES_LEN - gaps, available.len());
    }

    #[test]
    fn random_selection_from_full_tray_is_available() {
        let mut rng = rand::thread_rng();
        let available: PieceSet = (1..=PIECES_LEN).collect();

        let selection = random_selection(&mut rng, &available);

        assert!(available.contains(&selection));
    }

    #[test]
    fn random_claimed_cells_stay_in_range() {
        let mut rng = rand::thread_rng();
        let mut board = Board::new();

        let claimed = random_claimed_cells(&mut rng, board.mut_cells());

        assert!((1..=2 * BOARD_LEN).contains(&claimed));
        let counted = board
            .cells()
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count();
        assert_eq!(claimed, counted);
    }
}
