mod tictactoe_runner;

pub use tictactoe_runner::{run_self_play, run_tictactoe_game};
