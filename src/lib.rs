//! Concrete structs to represent and protect the state of a four seat piece
//! placement game with methods to progress through the phases of a session.
//!
//! ## Summary
//!
//! Four [seats](Seat) share a [BOARD_LEN] by [BOARD_LEN] [board](Board) and
//! identical trays of the `21` standard [pieces](Piece). A session opens at a
//! title screen, runs a match where seats take turns placing [pieces](Piece),
//! and ends with [standings](Standings) once no seat can move. Placed
//! [pieces](Piece) claim cells for their [seat](Seat). Each placement after a
//! seat's first must touch one of that seat's claimed cells diagonally without
//! sharing an edge with any of them. Seats which cannot place any remaining
//! piece are passed over until the match ends. The seat with the highest final
//! score wins.
//!
//! ## What are the phases of a session?
//!
//! * `Start`: The title screen before and between matches. Represented by
//! [Phase::Start].
//! * `RulesOverlay`: The title screen with the rules shown over it.
//! Represented by [Phase::RulesOverlay].
//! * `InProgress`: A running match where seats take turns. Represented by
//! [Phase::InProgress].
//! * `Finished`: A completed match showing its [standings](Standings).
//! Represented by [Phase::Finished].
//!
//! ## How is the game created?
//!
//! [Game::new] creates the game at the title screen with a vacant
//! [board](Board), a full tray for each [seat](Seat), and [Seat::Blue] as the
//! current seat. [Game::return_home] recreates it once a match has finished.
//!
//! ## How is the game advanced?
//!
//! The current seat prepares its selected [piece](Piece) by
//! [rotating](Game::handle_rotate) and [flipping](Game::handle_flip) it and by
//! [moving the selection cursor](Game::handle_selection_move) around its tray.
//! [Game::preview_placement] paints the piece's shadow on the [board](Board)
//! without settling anything. [Game::handle_placement_attempt] settles the
//! piece, removes it from the tray, and passes the turn to the next seat which
//! still has a legal move. A seat's first placement must cover its
//! [starting corner](Seat::starting_corner).
//!
//! ## How are placements checked?
//!
//! [Board::check_placement] collects every broken rule instead of stopping at
//! the first: the piece must fit inside the board, must not overlap claimed
//! cells, must not share an edge with the placing seat's cells, and must touch
//! one of the placing seat's cells diagonally. During the opening round the
//! corner contact rule is replaced by covering the seat's
//! [starting corner](Seat::starting_corner).
//!
//! ## How are scores calculated?
//!
//! Each square left in a seat's tray costs one point. Emptying the tray earns
//! [FULL_SET_BONUS] extra points, and emptying it with the monomino as the
//! last placed piece earns [MONOMINO_FINISH_BONUS] more. [Game::standings]
//! collects the scores and every highest scoring seat as a winner.
//!
//! ## How is the game viewed?
//!
//! [Game::game_view] offers an immutable [view](GameView) of the whole game
//! for rendering, including a [view](PlayerView) of each seat's tray and the
//! [shadow](ShadowCell) painted by [Game::preview_placement].
//!
//! ## How is the game driven?
//!
//! The [Frontend] boundary separates the game from whatever draws it and
//! collects input. [run] presents [views](GameView), applies
//! [commands](Command), and reports [rejections](Rejection) until the frontend
//! asks to [quit](Command::Quit).
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. Each
//! state struct implements methods to get mutable references to their
//! properties, helper methods to add random data to specific properties, and
//! methods to set properties for common scenarios.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use board::*;
pub use consts::*;
pub use coordinate::*;
pub use game::*;
pub use piece::*;
pub use player::*;
#[cfg(test)]
pub use random::*;
pub use runtime::*;
pub use seat::*;
pub use types::*;

mod board;
mod consts;
mod coordinate;
mod game;
mod piece;
mod player;
#[cfg(test)]
mod random;
mod runtime;
mod seat;
mod types;
