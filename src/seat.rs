use crate::{Coordinate, BOARD_LEN};
use num_derive::FromPrimitive;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// One of four positions around the board. Each seat owns a colour, a starting
/// corner, and a place in the fixed turn order.
///
/// Each seat is mapped to a `usize` discriminant to support conversion through
/// [FromPrimitive](num::FromPrimitive). Discriminants follow turn order.
///
/// # See Also
///
/// * [seats]
/// * [Player](crate::Player)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, FromPrimitive)]
pub enum Seat {
    /// Moves first and opens from the top right corner.
    Blue = 0,
    /// Moves second and opens from the bottom right corner.
    Yellow = 1,
    /// Moves third and opens from the bottom left corner.
    Red = 2,
    /// Moves fourth and opens from the top left corner.
    Green = 3,
}

impl Seat {
    /// The number of [seats](Seat).
    pub const SEATS_LEN: usize = 4;

    /// Finds the [seat](Seat) which takes a turn after `self`. After the last
    /// [seat](Seat) in turn order, play returns to the first.
    ///
    /// # See Also
    ///
    /// * [Game::handle_placement_attempt](crate::Game::handle_placement_attempt)
    ///
    /// # Returns
    ///
    /// The next [seat](Seat) in turn order.
    #[inline]
    pub fn next(&self) -> Seat {
        match self {
            Seat::Blue => Seat::Yellow,
            Seat::Yellow => Seat::Red,
            Seat::Red => Seat::Green,
            Seat::Green => Seat::Blue,
        }
    }

    /// Finds the board corner which the first placement from `self` must
    /// cover.
    ///
    /// # See Also
    ///
    /// * [Board::check_placement](crate::Board::check_placement)
    ///
    /// # Returns
    ///
    /// The [coordinate](Coordinate) of the corner cell assigned to `self`.
    #[inline]
    pub fn starting_corner(&self) -> Coordinate {
        match self {
            Seat::Blue => (0, BOARD_LEN - 1),
            Seat::Yellow => (BOARD_LEN - 1, BOARD_LEN - 1),
            Seat::Red => (BOARD_LEN - 1, 0),
            Seat::Green => (0, 0),
        }
    }
}

/// Finds all [seats](Seat) in ascending order by discriminant.
///
/// # See Also
///
/// * [Seat::SEATS_LEN]
///
/// # Returns
///
/// An array of all [seats](Seat) in turn order.
pub fn seats() -> [Seat; Seat::SEATS_LEN] {
    [Seat::Blue, Seat::Yellow, Seat::Red, Seat::Green]
}

impl Distribution<Seat> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Seat {
        let index = rng.gen_range(0..Seat::SEATS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index);
            unreachable!("From primitive should produce some seat from index");
        })
    }
}
