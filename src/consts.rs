use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of real pieces dealt to each seat. `21` pieces from the monomino up to
/// the twelve pentominoes.
///
/// # See Also
///
/// * [standard_pieces](crate::standard_pieces)
/// * [Player](crate::Player)
pub const PIECES_LEN: usize = 21;
/// The side length of the largest bounding box of any [piece](crate::Piece) in
/// [the standard set](crate::standard_pieces). `5` cells.
///
/// # See Also
///
/// * [BOARD_LEN]
pub const PIECE_SPAN: usize = 5;
/// The total number of cells covered by [the standard set](crate::standard_pieces).
/// `89` squares.
///
/// # See Also
///
/// * [Player::squares_left](crate::Player::squares_left)
pub const STARTING_SQUARES: usize = 89;
/// The number of columns in the tray that lays out each seat's pieces for selection.
/// `5` columns of ascending ids.
///
/// # See Also
///
/// * [tray_layout](crate::tray_layout)
/// * [Player::cycle_selection](crate::Player::cycle_selection)
pub const TRAY_COLS: usize = 5;
/// The amount of extra points given to a seat which has placed
/// [every piece](crate::Player::all_pieces_used). `15` additional points.
///
/// # See Also
///
/// * [Game::standings](crate::Game::standings)
pub const FULL_SET_BONUS: i32 = 15;
/// The amount of extra points given on top of the [full set bonus](FULL_SET_BONUS) to a seat
/// whose [last placed piece](crate::Player::last_placed) was the single square piece.
/// `5` additional points.
///
/// # See Also
///
/// * [Game::standings](crate::Game::standings)
pub const MONOMINO_FINISH_BONUS: i32 = 5;
/// The side length of the square board. If the environment variable named `BOARD_LEN` is
/// present at compile time and is able to be parsed into a `usize`, set to the value of
/// the environment variable. Otherwise, it is set to `20`.
///
/// Board rows are stored inline, so a large `BOARD_LEN` grows every board on the stack.
///
/// # Panics
///
/// * When the given value is less than `2 *` [PIECE_SPAN], so that the bounding box of any
/// piece fits on the board and opening placements anchored at distinct corners can never
/// reach each other
///
/// # See Also
///
/// * [Coordinate](crate::Coordinate)
/// * [Board](crate::Board)
/// * [Seat::starting_corner](crate::Seat::starting_corner)
pub const BOARD_LEN: usize = option::unwrap_or!(
    option::and_then!(option_env!("BOARD_LEN"), |str| result::ok!(parse_usize(
        str
    ))),
    20
);
const _: () = assert!(BOARD_LEN >= 2 * PIECE_SPAN);
