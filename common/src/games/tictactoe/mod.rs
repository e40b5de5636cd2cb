mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT};
pub use bot_controller::{
    BotMove, BotSettings, MoveSource, SearchResult, best_move, calculate_move, opening_reply,
};
pub use error::GameError;
pub use game_state::{TicTacToeGameState, TurnSummary};
pub use types::{Cell, Mark, Move, Outcome, Score, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line, evaluate};
