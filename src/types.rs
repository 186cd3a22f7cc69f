use crate::{Piece, PieceId, Seat, ShadowCell, BOARD_LEN, PIECES_LEN, PIECE_SPAN};
use bimap::BiBTreeMap;
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// A row of occupied and vacant cells within the grid of a [piece](Piece).
///
/// # See Also
///
/// * [ShapeCells]
pub type ShapeRow = SmallVec<[bool; PIECE_SPAN]>;
/// A grid of cells which gives a [piece](Piece) its shape. Rows are stored in
/// row major order and share one width.
///
/// # See Also
///
/// * [Piece::cells]
/// * [PIECE_SPAN]
pub type ShapeCells = SmallVec<[ShapeRow; PIECE_SPAN]>;

/// A vector of [pieces](Piece) indexed directly by [identity](PieceId) where
/// position `0` holds [Piece::sentinel].
///
/// # See Also
///
/// * [standard_pieces](crate::standard_pieces)
/// * [Player::current_piece](crate::Player::current_piece)
pub type Pieces = SmallVec<[Piece; PIECES_LEN + 1]>;
/// An ordered set of [piece identities](PieceId) which have not been placed
/// on the board.
///
/// # See Also
///
/// * [Player::available](crate::Player::available)
pub type PieceSet = BTreeSet<PieceId>;

/// One position on the board which either belongs to the [seat](Seat) whose
/// piece covers it or remains vacant.
///
/// # See Also
///
/// * [BoardRow]
pub type Cell = Option<Seat>;
/// A row of [cells](Cell) across the full width of the board.
///
/// # See Also
///
/// * [BoardCells]
pub type BoardRow = SmallVec<[Cell; BOARD_LEN]>;
/// A square grid of [cells](Cell) in row major order with [BOARD_LEN] rows
/// and columns.
///
/// # See Also
///
/// * [Board::cells](crate::Board::cells)
pub type BoardCells = SmallVec<[BoardRow; BOARD_LEN]>;

/// A row of [shadow cells](ShadowCell) across the full width of the board.
///
/// # See Also
///
/// * [ShadowCells]
pub type ShadowRow = SmallVec<[ShadowCell; BOARD_LEN]>;
/// A square grid of [shadow cells](ShadowCell) in row major order which
/// previews a placement over the settled grid.
///
/// # See Also
///
/// * [Board::shadow](crate::Board::shadow)
/// * [Board::update_shadow](crate::Board::update_shadow)
pub type ShadowCells = SmallVec<[ShadowRow; BOARD_LEN]>;

/// A tuple with row then column position within the tray grid of unplaced
/// [pieces](Piece).
///
/// # See Also
///
/// * [TRAY_COLS](crate::TRAY_COLS)
pub type TraySlot = (usize, usize);
/// A bimap of [piece identities](PieceId) to their [slots](TraySlot) in the
/// tray grid.
///
/// # See Also
///
/// * [tray_layout](crate::tray_layout)
/// * [Player::cycle_selection](crate::Player::cycle_selection)
pub type TrayLayout = BiBTreeMap<PieceId, TraySlot>;

/// An array of final scores indexed by [seat](Seat) discriminant.
///
/// # See Also
///
/// * [Standings](crate::Standings)
pub type Scores = [i32; Seat::SEATS_LEN];
