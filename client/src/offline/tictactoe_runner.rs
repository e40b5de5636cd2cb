use std::io::{self, BufRead, Write};
use tictactoe_common::games::tictactoe::{
    Board, GameError, Mark, MoveSource, Outcome, TicTacToeGameState, TurnSummary, best_move,
    calculate_move, evaluate,
};
use tictactoe_common::{log, log_warn};

use crate::config::Config;
use crate::game_ui::tictactoe::{TicTacToeGameUi, end_game_message};
use crate::input::{Command, parse_command};

const PROMPT: &str = "Your move (1-9): ";
const FINISHED_PROMPT: &str = "Press n for a new game or q to quit: ";

fn describe_error(error: &GameError) -> String {
    match error {
        GameError::CellOccupied(index) => {
            format!("Cell {} is already taken", TicTacToeGameUi::cell_label(*index))
        }
        GameError::IndexOutOfRange(index) => {
            format!("Cell {} does not exist", TicTacToeGameUi::cell_label(*index))
        }
        GameError::GameOver => "The game is over, press n for a new game or q to quit".to_string(),
        other => other.to_string(),
    }
}

fn write_board<W: Write>(
    output: &mut W,
    ui: &TicTacToeGameUi,
    game: &TicTacToeGameState,
) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", ui.render_board(game.board(), game.winning_line()))?;
    writeln!(output)
}

fn write_turn<W: Write>(output: &mut W, turn: &TurnSummary, config: &Config) -> io::Result<()> {
    let Some(reply) = turn.computer_move else {
        return Ok(());
    };
    writeln!(output, "Computer plays {}", TicTacToeGameUi::cell_label(reply.index))?;
    if config.show_search_stats {
        match reply.source {
            MoveSource::Opening => writeln!(output, "(opening reply, no search)")?,
            MoveSource::Search(result) => writeln!(
                output,
                "(searched {} positions, score {})",
                result.nodes,
                result.score.value()
            )?,
        }
    }
    Ok(())
}

/// Interactive game loop: the human is X and moves first, every accepted move
/// is answered by the computer. Returns on `q` or end of input.
pub fn run_tictactoe_game<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &Config,
) -> io::Result<()> {
    let ui = TicTacToeGameUi::new(config.symbols.clone());
    let mut game = TicTacToeGameState::new(config.bot_settings());
    let mut games_played = 0u32;

    writeln!(output, "{}", ui.help_text())?;
    write_board(output, &ui, &game)?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                write!(output, "{}", if game.is_over() { FINISHED_PROMPT } else { PROMPT })?;
                output.flush()?;
                continue;
            }
        };

        match command {
            Command::Quit => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            Command::Help => writeln!(output, "{}", ui.help_text())?,
            Command::NewGame => {
                game = TicTacToeGameState::new(config.bot_settings());
                log!("New game started");
                write_board(output, &ui, &game)?;
            }
            Command::Place(index) => match game.play_human_move(index) {
                Ok(turn) => {
                    write_turn(output, &turn, config)?;
                    write_board(output, &ui, &game)?;
                    if let Some(message) = end_game_message(turn.status) {
                        games_played += 1;
                        writeln!(output, "{}", message)?;
                        if config.show_search_stats {
                            writeln!(
                                output,
                                "Computer searched {} positions this game",
                                game.search_stats()
                            )?;
                        }
                    }
                }
                Err(error) => {
                    log_warn!("Rejected move at {}: {}", index, error);
                    writeln!(output, "{}", describe_error(&error))?;
                }
            },
        }

        write!(output, "{}", if game.is_over() { FINISHED_PROMPT } else { PROMPT })?;
        output.flush()?;
    }

    writeln!(output)?;
    log!("Session finished after {} completed games", games_played);
    Ok(())
}

/// Plays the computer against a full-depth X searcher and prints every move.
pub fn run_self_play<W: Write>(output: &mut W, config: &Config) -> io::Result<Outcome> {
    let ui = TicTacToeGameUi::new(config.symbols.clone());
    let settings = config.bot_settings();
    let mut board = Board::new();
    let mut side = Mark::X;

    let outcome = loop {
        let outcome = evaluate(&board);
        if outcome.is_terminal() {
            break outcome;
        }

        let chosen = match side {
            Mark::X => best_move(&board, Mark::X).map(|result| result.index),
            Mark::O => calculate_move(&board, &settings).map(|reply| reply.index),
        };
        let index = chosen.map_err(io::Error::other)?;
        board.place(index, side).map_err(io::Error::other)?;

        writeln!(
            output,
            "{} plays {}",
            config.symbols.for_mark(side),
            TicTacToeGameUi::cell_label(index)
        )?;
        side = side.opponent();
    };

    writeln!(output, "{}", ui.render_board(&board, board.winning_line()))?;
    writeln!(output, "Result: {}", outcome)?;
    log!("Self-play finished: {}", outcome);
    Ok(outcome)
}
