use crate::BOARD_LEN;

/// A tuple with row then column position on the board. Both components lie in
/// the range `0`..[BOARD_LEN].
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [PlacementError](crate::PlacementError)
pub type Coordinate = (usize, usize);

/// Finds the adjacent [coordinates](Coordinate) on the board from the argument
/// [coordinate](Coordinate) where adjacent is 4 directional and not diagonal.
/// Neighbours past an edge of the board do not exist and are not produced.
///
/// # Arguments
///
/// * `(row, col)`: The [coordinate](Coordinate) whose neighbours are produced.
///
/// # See Also
///
/// * [Board::check_placement](crate::Board::check_placement)
///
/// # Returns
///
/// An [iterator](Iterator) of at most 4 in bounds [coordinates](Coordinate) in natural
/// lexicographic order.
pub fn adjacent_coordinates((row, col): Coordinate) -> impl Iterator<Item = Coordinate> {
    let above = row.checked_sub(1).map(|above| (above, col));
    let left = col.checked_sub(1).map(|left| (row, left));
    let right = (col + 1 < BOARD_LEN).then_some((row, col + 1));
    let below = (row + 1 < BOARD_LEN).then_some((row + 1, col));

    [above, left, right, below].into_iter().flatten()
}

/// Finds the diagonal [coordinates](Coordinate) on the board from the argument
/// [coordinate](Coordinate). Neighbours past an edge of the board do not exist and
/// are not produced.
///
/// # Arguments
///
/// * `(row, col)`: The [coordinate](Coordinate) whose neighbours are produced.
///
/// # See Also
///
/// * [Board::check_placement](crate::Board::check_placement)
///
/// # Returns
///
/// An [iterator](Iterator) of at most 4 in bounds [coordinates](Coordinate) in natural
/// lexicographic order.
pub fn diagonal_coordinates((row, col): Coordinate) -> impl Iterator<Item = Coordinate> {
    let above = row.checked_sub(1);
    let below = (row + 1 < BOARD_LEN).then_some(row + 1);
    let left = col.checked_sub(1);
    let right = (col + 1 < BOARD_LEN).then_some(col + 1);

    [
        above.zip(left),
        above.zip(right),
        below.zip(left),
        below.zip(right),
    ]
    .into_iter()
    .flatten()
}
