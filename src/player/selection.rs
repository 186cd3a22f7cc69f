use crate::{Piece, PieceId, Player, TrayLayout, TraySlot, PIECES_LEN, TRAY_COLS};
use num_derive::FromPrimitive;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// Describes the reasons why [Player::select] could not be executed.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum SelectError {
    /// Attempting to select an identity outside the catalog.
    OutOfRange {
        /// The requested identity which no catalog piece carries.
        piece_id: PieceId,
    },
    /// Attempting to select or place a piece which is no longer available.
    Unavailable {
        /// The requested identity whose piece has already been placed.
        piece_id: PieceId,
    },
}

/// A direction for moving the cursor one slot through the tray grid.
///
/// Each direction is mapped to a `usize` discriminant to support conversion
/// through [FromPrimitive](num::FromPrimitive).
///
/// # See Also
///
/// * [Player::cycle_selection]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, FromPrimitive)]
pub enum Direction {
    /// One column towards the start of the row.
    Left = 0,
    /// One column towards the end of the row.
    Right = 1,
    /// One row towards the top of the tray.
    Up = 2,
    /// One row towards the bottom of the tray.
    Down = 3,
}

impl Direction {
    /// The number of [directions](Direction).
    pub const DIRECTIONS_LEN: usize = 4;
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        let index = rng.gen_range(0..Direction::DIRECTIONS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index);
            unreachable!("From primitive should produce some direction from index");
        })
    }
}

/// Arranges the full catalog into a grid of [TRAY_COLS] columns in ascending
/// order by [identity](PieceId). The grid is fixed so placed pieces leave
/// gaps rather than shifting their neighbours.
///
/// # See Also
///
/// * [Player::cycle_selection]
///
/// # Returns
///
/// A bimap of [piece identities](PieceId) to their [slots](TraySlot).
pub fn tray_layout() -> TrayLayout {
    (1..=PIECES_LEN)
        .map(|piece_id| (piece_id, ((piece_id - 1) / TRAY_COLS, (piece_id - 1) % TRAY_COLS)))
        .collect()
}

/// Finds the neighbouring slot in the argument direction or `None` past the
/// left, right, or top edge of the tray grid. Slots below the grid exist here
/// and miss in [tray_layout] instead.
fn step((row, col): TraySlot, direction: Direction) -> Option<TraySlot> {
    match direction {
        Direction::Left => col.checked_sub(1).map(|col| (row, col)),
        Direction::Right => (col + 1 < TRAY_COLS).then_some((row, col + 1)),
        Direction::Up => row.checked_sub(1).map(|row| (row, col)),
        Direction::Down => Some((row + 1, col)),
    }
}

impl Player {
    /// Checks whether the requested piece can take the cursor and returns the
    /// found error. Otherwise, moves the cursor to the requested piece.
    ///
    /// # Arguments
    ///
    /// * `piece_id`: The [identity](PieceId) of the requested piece.
    ///
    /// # Errors
    ///
    /// * [SelectError::OutOfRange] Attempting to select an identity outside
    /// the catalog.
    /// * [SelectError::Unavailable] Attempting to select a piece which is no
    /// longer available.
    pub fn select(&mut self, piece_id: PieceId) -> Result<(), SelectError> {
        if piece_id == Piece::SENTINEL_ID || piece_id > PIECES_LEN {
            return Err(SelectError::OutOfRange { piece_id });
        }
        if !self.available.contains(&piece_id) {
            return Err(SelectError::Unavailable { piece_id });
        }

        self.selected = piece_id;
        Ok(())
    }

    /// Walks the cursor one slot at a time in the argument direction until an
    /// available piece takes it. Gaps left by placed pieces are stepped over
    /// while the edges of the tray grid stop the walk with the cursor
    /// unmoved.
    ///
    /// # Arguments
    ///
    /// * `direction`: The direction to walk the cursor.
    ///
    /// # See Also
    ///
    /// * [tray_layout]
    ///
    /// # Returns
    ///
    /// Whether the cursor moved to another available piece.
    pub fn cycle_selection(&mut self, direction: Direction) -> bool {
        let layout = tray_layout();
        let mut slot = match layout.get_by_left(&self.selected) {
            Some(&slot) => slot,
            None => return false,
        };

        while let Some(next_slot) = step(slot, direction) {
            slot = next_slot;
            match layout.get_by_right(&slot) {
                Some(&piece_id) if self.available.contains(&piece_id) => {
                    self.selected = piece_id;
                    return true;
                }
                Some(_) => continue,
                None => return false,
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seat;
    use itertools::Itertools;

    #[test]
    fn tray_layout_matches_pieces_len() {
        assert_eq!(PIECES_LEN, tray_layout().len());
    }

    #[test]
    fn tray_layout_fills_rows_in_identity_order() {
        let layout = tray_layout();

        assert_eq!(Some(&(0, 0)), layout.get_by_left(&1));
        assert_eq!(Some(&(0, TRAY_COLS - 1)), layout.get_by_left(&5));
        assert_eq!(Some(&(1, 0)), layout.get_by_left(&6));
        assert_eq!(Some(&(4, 0)), layout.get_by_left(&PIECES_LEN));
        assert_eq!(Some(&3), layout.get_by_right(&(0, 2)));
        assert_eq!(None, layout.get_by_right(&(4, 1)));
    }

    #[test]
    fn tray_layout_stays_within_columns() {
        let layout = tray_layout();
        let out_of_columns = layout
            .right_values()
            .filter(|(_, col)| *col >= TRAY_COLS)
            .collect_vec();

        assert!(out_of_columns.is_empty());
    }

    #[test]
    fn select_moves_cursor() {
        let mut player = Player::new(Seat::Blue);

        player.select(7).unwrap();

        assert_eq!(7, player.selected());
        assert_eq!(7, player.current_piece().id());
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut player = Player::new(Seat::Blue);

        assert_eq!(
            Err(SelectError::OutOfRange {
                piece_id: PIECES_LEN + 1
            }),
            player.select(PIECES_LEN + 1)
        );
        assert_eq!(
            Err(SelectError::OutOfRange {
                piece_id: Piece::SENTINEL_ID
            }),
            player.select(Piece::SENTINEL_ID)
        );
        assert_eq!(1, player.selected());
    }

    #[test]
    fn select_rejects_unavailable() {
        let mut player = Player::new(Seat::Blue);
        player.mut_available().remove(&5);

        assert_eq!(
            Err(SelectError::Unavailable { piece_id: 5 }),
            player.select(5)
        );
        assert_eq!(1, player.selected());
    }

    #[test]
    fn cycle_selection_moves_one_slot() {
        let mut player = Player::new(Seat::Blue);

        assert!(player.cycle_selection(Direction::Right));

        assert_eq!(2, player.selected());
    }

    #[test]
    fn cycle_selection_skips_gaps() {
        let mut player = Player::new(Seat::Blue);
        player.mut_available().remove(&2);

        assert!(player.cycle_selection(Direction::Right));

        assert_eq!(3, player.selected());
    }

    #[test]
    fn cycle_selection_moves_between_rows() {
        let mut player = Player::new(Seat::Blue);
        player.select(3).unwrap();

        assert!(player.cycle_selection(Direction::Down));

        assert_eq!(8, player.selected());
    }

    #[test]
    fn cycle_selection_skips_gaps_between_rows() {
        let mut player = Player::new(Seat::Blue);
        player.select(3).unwrap();
        player.mut_available().remove(&8);

        assert!(player.cycle_selection(Direction::Down));

        assert_eq!(13, player.selected());
    }

    #[test]
    fn cycle_selection_stops_at_edges() {
        let mut player = Player::new(Seat::Blue);

        assert!(!player.cycle_selection(Direction::Left));
        assert!(!player.cycle_selection(Direction::Up));
        assert_eq!(1, player.selected());

        player.select(5).unwrap();

        assert!(!player.cycle_selection(Direction::Right));
        assert_eq!(5, player.selected());

        player.select(PIECES_LEN).unwrap();

        assert!(!player.cycle_selection(Direction::Down));
        assert_eq!(PIECES_LEN, player.selected());
    }

    #[test]
    fn cycle_selection_stops_below_short_row() {
        let mut player = Player::new(Seat::Blue);
        player.select(17).unwrap();

        assert!(!player.cycle_selection(Direction::Down));

        assert_eq!(17, player.selected());
    }

    #[test]
    fn cycle_selection_with_empty_tray_returns_false() {
        let mut player = Player::new(Seat::Blue);
        for _ in 0..PIECES_LEN {
            player.confirm_placement().unwrap();
        }

        assert!(!player.cycle_selection(Direction::Right));

        assert_eq!(Piece::SENTINEL_ID, player.selected());
    }

    #[test]
    fn cycle_selection_lands_on_available_piece() {
        let mut rng = rand::thread_rng();
        let mut player = Player::new(Seat::Blue);
        player.random_available_gaps(&mut rng);

        let direction: Direction = rng.gen();

        if player.cycle_selection(direction) {
            assert!(player.available().contains(&player.selected()));
        }
    }
}
