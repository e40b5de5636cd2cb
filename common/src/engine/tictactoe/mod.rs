//! The surface a front end needs to drive a game: start a board, apply moves,
//! ask for the outcome and ask for the computer's reply.

use crate::games::tictactoe::{BotSettings, calculate_move};

pub use crate::games::tictactoe::{Board, GameError, Mark, Outcome, WinningLine};

pub fn new_game() -> Board {
    Board::new()
}

pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, GameError> {
    board.with_move(index, mark)
}

pub fn evaluate(board: &Board) -> Outcome {
    board.evaluate()
}

/// O's reply: the fixed opening answer on a one-mark board, full minimax
/// otherwise. Fails on a board that is already decided.
pub fn compute_reply(board: &Board) -> Result<usize, GameError> {
    calculate_move(board, &BotSettings::default()).map(|reply| reply.index)
}
