use crate::{Command, Frontend, Game, Rejection};

/// It repeatedly asks the frontend for a command, and if the command is
/// invalid, it tells the frontend about the error and asks again. If the
/// command is valid, stops asking and applies the command to the game.
///
/// Calls [Frontend::next_command] for an input. Attempts the matching [Game]
/// operation, and if the input is invalid, calls
/// [Frontend::present_rejection].
///
/// # Arguments
///
/// * `frontend`: The boundary which collects input and draws output.
/// * `game`: The current state of the game.
///
/// # Errors
///
/// When the frontend fails to send input or receive an error update.
///
/// # Returns
///
/// Whether the session should keep running.
pub fn process_input<F, E>(frontend: &F, game: &mut Game) -> Result<bool, E>
where
    F: Frontend<E>,
{
    loop {
        let command = frontend.next_command()?;
        let outcome = match command {
            Command::Quit => return Ok(false),
            Command::StartMatch => game.start_match().map_err(|error| Rejection::Phase { error }),
            Command::OpenRules => game.open_rules().map_err(|error| Rejection::Phase { error }),
            Command::CloseRules => game.close_rules().map_err(|error| Rejection::Phase { error }),
            Command::ReturnHome => game.return_home().map_err(|error| Rejection::Phase { error }),
            Command::Rotate(rotation) => game
                .handle_rotate(rotation)
                .map_err(|error| Rejection::Phase { error }),
            Command::Flip(flip) => game
                .handle_flip(flip)
                .map_err(|error| Rejection::Phase { error }),
            Command::MoveSelection(direction) => game
                .handle_selection_move(direction)
                .map(|_| ())
                .map_err(|error| Rejection::Phase { error }),
            Command::Preview { row, col } => game
                .preview_placement((row, col))
                .map_err(|error| Rejection::Phase { error }),
            Command::Place { row, col } => game
                .handle_placement_attempt((row, col))
                .map(|_| ())
                .map_err(|error| Rejection::Play { error }),
        };
        match outcome {
            Ok(()) => return Ok(true),
            Err(rejection) => frontend.present_rejection(&rejection)?,
        }
    }
}

/// Runs a full session from the title screen until the frontend asks to
/// quit.
///
/// Presents the state of the game with [Frontend::present], applies one
/// valid command with [process_input], and repeats until the frontend sends
/// [Command::Quit].
///
/// # Arguments
///
/// * `frontend`: The boundary which collects input and draws output.
///
/// # Errors
///
/// When the frontend fails to send input or receive an update.
pub async fn run<F, E>(frontend: &F) -> Result<(), E>
where
    F: Frontend<E>,
{
    let mut game = Game::new();

    loop {
        frontend.present(&game.game_view()).await?;
        if !process_input(frontend, &mut game)? {
            return Ok(());
        }
    }
}
