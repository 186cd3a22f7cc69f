use crate::{Direction, Flip, GameView, PhaseError, PlayError, Rotation};
use async_trait::async_trait;
pub use driver::*;

mod driver;

/// An input intent collected by a [Frontend].
///
/// # See Also
///
/// * [Frontend::next_command]
/// * [process_input]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    /// Asks to start a match from the title screen.
    StartMatch,
    /// Asks to show the rules overlay.
    OpenRules,
    /// Asks to dismiss the rules overlay.
    CloseRules,
    /// Asks to leave a finished match for the title screen.
    ReturnHome,
    /// Asks to rotate the current seat's selected piece.
    Rotate(Rotation),
    /// Asks to flip the current seat's selected piece.
    Flip(Flip),
    /// Asks to move the current seat's selection cursor.
    MoveSelection(Direction),
    /// Asks to preview the selected piece on the board.
    Preview {
        /// The row taken by the top left cell of the piece's grid.
        row: usize,
        /// The column taken by the top left cell of the piece's grid.
        col: usize,
    },
    /// Asks to place the selected piece on the board.
    Place {
        /// The row taken by the top left cell of the piece's grid.
        row: usize,
        /// The column taken by the top left cell of the piece's grid.
        col: usize,
    },
    /// Asks to end the session.
    Quit,
}

/// Describes the reasons why a [Command] could not be executed.
///
/// # See Also
///
/// * [Frontend::present_rejection]
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Rejection {
    /// Attempting a command outside its phase.
    Phase {
        /// The found phase error.
        error: PhaseError,
    },
    /// Attempting a placement which could not be executed.
    Play {
        /// The found play error.
        error: PlayError,
    },
}

/// Defines the boundary between the game and whatever draws it and collects
/// input.
///
/// [Frontend::next_command] blocks execution until getting input.
/// [Frontend::present_rejection] blocks execution until updating output.
/// [Frontend::present] may execute in parallel with other frontend work.
///
/// # Errors
///
/// The implementor of [Frontend] is responsible for returning an error to
/// prevent the runtime from running indefinitely whether from no response or
/// repeated invalid inputs. When a method call fails, the runtime is stopped,
/// and an error is returned and propagated out of the runtime and back to the
/// calling client code.
#[async_trait]
pub trait Frontend<E> {
    /// Gets the next [Command] from the person at the controls.
    fn next_command(&self) -> Result<Command, E>;

    /// Updates the display with the state of the game.
    async fn present<'a>(&self, game_view: &'a GameView<'a>) -> Result<(), E>;

    /// When a [Command] could not be executed, updates the display with the
    /// reasons why.
    fn present_rejection(&self, rejection: &Rejection) -> Result<(), E>;
}
