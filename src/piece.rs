use crate::{ShapeCells, PIECES_LEN};
use num_derive::FromPrimitive;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// A number which identifies one [piece](Piece) within a player's set. Catalog
/// identities run from `1` to [PIECES_LEN] inclusive while
/// [Piece::SENTINEL_ID] marks the absence of a selection.
///
/// # See Also
///
/// * [standard_pieces]
/// * [Player](crate::Player)
pub type PieceId = usize;

/// A direction for a quarter turn of a [piece](Piece).
///
/// Each rotation is mapped to a `usize` discriminant to support conversion
/// through [FromPrimitive](num::FromPrimitive).
///
/// # See Also
///
/// * [Piece::rotated]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, FromPrimitive)]
pub enum Rotation {
    /// A quarter turn to the right.
    Clockwise = 0,
    /// A quarter turn to the left.
    Counterclockwise = 1,
}

impl Rotation {
    /// The number of [rotations](Rotation).
    pub const ROTATIONS_LEN: usize = 2;
}

impl Distribution<Rotation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rotation {
        let index = rng.gen_range(0..Rotation::ROTATIONS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index);
            unreachable!("From primitive should produce some rotation from index");
        })
    }
}

/// An axis for mirroring a [piece](Piece).
///
/// Each flip is mapped to a `usize` discriminant to support conversion through
/// [FromPrimitive](num::FromPrimitive).
///
/// # See Also
///
/// * [Piece::flipped]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, FromPrimitive)]
pub enum Flip {
    /// A mirror across the horizontal axis which reverses the order of rows.
    Vertical = 0,
    /// A mirror across the vertical axis which reverses each row.
    Horizontal = 1,
}

impl Flip {
    /// The number of [flips](Flip).
    pub const FLIPS_LEN: usize = 2;
}

impl Distribution<Flip> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Flip {
        let index = rng.gen_range(0..Flip::FLIPS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index);
            unreachable!("From primitive should produce some flip from index");
        })
    }
}

/// A record of which mirror, if any, the orientation counters carry.
///
/// Two mirrors across the same axis cancel while two mirrors across different
/// axes compose into a half turn.
///
/// # See Also
///
/// * [Piece::mirror]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mirror {
    /// No mirror.
    None,
    /// A mirror across the horizontal axis.
    Vertical,
    /// A mirror across the vertical axis.
    Horizontal,
}

/// A polyomino with its identity and accumulated transform counters. The grid
/// of cells is the authority on shape while the counters only describe how the
/// current grid was reached from the catalog grid.
///
/// # See Also
///
/// * [standard_pieces]
/// * [Player::current_piece](crate::Player::current_piece)
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    /// The identity of the piece within [standard_pieces].
    id: PieceId,
    /// The grid of occupied cells in row major order.
    cells: ShapeCells,
    /// The number of quarter turns to the right from the catalog grid modulo
    /// `4`.
    orientation: u8,
    /// The mirror carried by the current grid.
    mirror: Mirror,
}

impl Piece {
    /// The [identity](PieceId) reserved for [Piece::sentinel].
    pub const SENTINEL_ID: PieceId = 0;

    /// Creates an empty piece which stands in when no catalog piece is
    /// selected.
    ///
    /// # See Also
    ///
    /// * [Player::confirm_placement](crate::Player::confirm_placement)
    ///
    /// # Returns
    ///
    /// A piece with no occupied cells and the [Piece::SENTINEL_ID] identity.
    pub fn sentinel() -> Piece {
        Piece {
            id: Piece::SENTINEL_ID,
            cells: ShapeCells::new(),
            orientation: 0,
            mirror: Mirror::None,
        }
    }

    /// Parses rows of `#` and `.` characters into a catalog piece.
    fn from_rows(id: PieceId, rows: &[&str]) -> Piece {
        let cells = rows
            .iter()
            .map(|row| row.chars().map(|cell| cell == '#').collect())
            .collect();

        Piece {
            id,
            cells,
            orientation: 0,
            mirror: Mirror::None,
        }
    }

    /// Finds the identity of `self`.
    ///
    /// # Returns
    ///
    /// The [identity](PieceId) of `self` within [standard_pieces].
    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Finds the grid of occupied cells of `self`.
    ///
    /// # Returns
    ///
    /// The grid of occupied cells in row major order.
    #[inline]
    pub fn cells(&self) -> &ShapeCells {
        &self.cells
    }

    /// Finds the number of quarter turns to the right from the catalog grid.
    ///
    /// # Returns
    ///
    /// A count of quarter turns in the range `0..4`.
    #[inline]
    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    /// Finds the mirror carried by the current grid.
    ///
    /// # Returns
    ///
    /// The accumulated [mirror](Mirror) of `self`.
    #[inline]
    pub fn mirror(&self) -> Mirror {
        self.mirror
    }

    /// Finds the number of rows in the grid of `self`.
    ///
    /// # Returns
    ///
    /// The number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Finds the number of columns in the grid of `self`.
    ///
    /// # Returns
    ///
    /// The number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }

    /// Counts the occupied cells of `self`.
    ///
    /// # See Also
    ///
    /// * [Player::squares_left](crate::Player::squares_left)
    ///
    /// # Returns
    ///
    /// The number of occupied cells.
    pub fn square_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&occupied| occupied)
            .count()
    }

    /// Tests whether the grid of `self` occupies the argument position.
    ///
    /// # Arguments
    ///
    /// * `row`: The row within the grid of `self`.
    /// * `col`: The column within the grid of `self`.
    ///
    /// # Panics
    ///
    /// If `row` is not less than [height](Piece::height) or `col` is not less
    /// than [width](Piece::width).
    ///
    /// # Returns
    ///
    /// Whether the position is occupied.
    #[inline]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Finds the positions within the grid of `self` which are occupied.
    ///
    /// # See Also
    ///
    /// * [Board::check_placement](crate::Board::check_placement)
    ///
    /// # Returns
    ///
    /// An [iterator](Iterator) of row then column positions in row major
    /// order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &occupied)| occupied)
                .map(move |(col, _)| (row, col))
        })
    }

    /// Turns the grid of `self` a quarter turn to the right and advances the
    /// orientation counter.
    ///
    /// # See Also
    ///
    /// * [Piece::rotated]
    ///
    /// # Returns
    ///
    /// The turned piece.
    pub fn rotated_clockwise(&self) -> Piece {
        let height = self.height();
        let width = self.width();
        let cells = (0..width)
            .map(|row| {
                (0..height)
                    .map(|col| self.cells[height - 1 - col][row])
                    .collect()
            })
            .collect();

        Piece {
            id: self.id,
            cells,
            orientation: (self.orientation + 1) % 4,
            mirror: self.mirror,
        }
    }

    /// Turns the grid of `self` a quarter turn to the left and rewinds the
    /// orientation counter.
    ///
    /// # See Also
    ///
    /// * [Piece::rotated]
    ///
    /// # Returns
    ///
    /// The turned piece.
    pub fn rotated_counterclockwise(&self) -> Piece {
        let height = self.height();
        let width = self.width();
        let cells = (0..width)
            .map(|row| {
                (0..height)
                    .map(|col| self.cells[col][width - 1 - row])
                    .collect()
            })
            .collect();

        Piece {
            id: self.id,
            cells,
            orientation: (self.orientation + 3) % 4,
            mirror: self.mirror,
        }
    }

    /// Mirrors the grid of `self` across the horizontal axis by reversing the
    /// order of rows. A second vertical mirror cancels the first while a
    /// vertical mirror over a horizontal one becomes a half turn.
    ///
    /// # See Also
    ///
    /// * [Piece::flipped]
    ///
    /// # Returns
    ///
    /// The mirrored piece.
    pub fn flipped_vertically(&self) -> Piece {
        let cells = self.cells.iter().rev().cloned().collect();
        let (orientation, mirror) = match self.mirror {
            Mirror::None => (self.orientation, Mirror::Vertical),
            Mirror::Vertical => (self.orientation, Mirror::None),
            Mirror::Horizontal => ((self.orientation + 2) % 4, Mirror::None),
        };

        Piece {
            id: self.id,
            cells,
            orientation,
            mirror,
        }
    }

    /// Mirrors the grid of `self` across the vertical axis by reversing each
    /// row. A second horizontal mirror cancels the first while a horizontal
    /// mirror over a vertical one becomes a half turn.
    ///
    /// # See Also
    ///
    /// * [Piece::flipped]
    ///
    /// # Returns
    ///
    /// The mirrored piece.
    pub fn flipped_horizontally(&self) -> Piece {
        let cells = self
            .cells
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        let (orientation, mirror) = match self.mirror {
            Mirror::None => (self.orientation, Mirror::Horizontal),
            Mirror::Horizontal => (self.orientation, Mirror::None),
            Mirror::Vertical => ((self.orientation + 2) % 4, Mirror::None),
        };

        Piece {
            id: self.id,
            cells,
            orientation,
            mirror,
        }
    }

    /// Turns the grid of `self` a quarter turn in the argument direction.
    ///
    /// # Arguments
    ///
    /// * `rotation`: The direction of the quarter turn.
    ///
    /// # Returns
    ///
    /// The turned piece.
    #[inline]
    pub fn rotated(&self, rotation: Rotation) -> Piece {
        match rotation {
            Rotation::Clockwise => self.rotated_clockwise(),
            Rotation::Counterclockwise => self.rotated_counterclockwise(),
        }
    }

    /// Mirrors the grid of `self` across the argument axis.
    ///
    /// # Arguments
    ///
    /// * `flip`: The axis of the mirror.
    ///
    /// # Returns
    ///
    /// The mirrored piece.
    #[inline]
    pub fn flipped(&self, flip: Flip) -> Piece {
        match flip {
            Flip::Vertical => self.flipped_vertically(),
            Flip::Horizontal => self.flipped_horizontally(),
        }
    }
}

/// Creates the catalog of every polyomino with one through five squares in
/// ascending order by [identity](PieceId).
///
/// # See Also
///
/// * [PIECES_LEN]
/// * [STARTING_SQUARES](crate::STARTING_SQUARES)
///
/// # Returns
///
/// An array of all [pieces](Piece) in their catalog grids.
pub fn standard_pieces() -> [Piece; PIECES_LEN] {
    [
        // monomino
        Piece::from_rows(1, &["#"]),
        // domino
        Piece::from_rows(2, &["##"]),
        // I tromino
        Piece::from_rows(3, &["###"]),
        // L tromino
        Piece::from_rows(4, &[".#", "##"]),
        // S tetromino
        Piece::from_rows(5, &[".#", "##", "#."]),
        // O tetromino
        Piece::from_rows(6, &["##", "##"]),
        // T tetromino
        Piece::from_rows(7, &[".#.", "###"]),
        // L tetromino
        Piece::from_rows(8, &["###", "..#"]),
        // I tetromino
        Piece::from_rows(9, &["####"]),
        // P pentomino
        Piece::from_rows(10, &[".#", "##", "##"]),
        // U pentomino
        Piece::from_rows(11, &["##", "#.", "##"]),
        // T pentomino
        Piece::from_rows(12, &["..#", "###", "..#"]),
        // N pentomino
        Piece::from_rows(13, &[".#", ".#", "##", "#."]),
        // Z pentomino
        Piece::from_rows(14, &[".##", ".#.", "##."]),
        // F pentomino
        Piece::from_rows(15, &[".#.", ".##", "##."]),
        // L pentomino
        Piece::from_rows(16, &["####", "...#"]),
        // W pentomino
        Piece::from_rows(17, &[".##", "##.", "#.."]),
        // X pentomino
        Piece::from_rows(18, &[".#.", "###", ".#."]),
        // I pentomino
        Piece::from_rows(19, &["#####"]),
        // V pentomino
        Piece::from_rows(20, &["..#", "..#", "###"]),
        // Y pentomino
        Piece::from_rows(21, &[".#..", "####"]),
    ]
}
