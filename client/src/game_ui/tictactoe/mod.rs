use tictactoe_common::games::tictactoe::{BOARD_SIZE, Board, Outcome, WinningLine};

use crate::config::SymbolsConfig;

const ROW_SEPARATOR: &str = "---+---+---";

pub struct TicTacToeGameUi {
    symbols: SymbolsConfig,
}

impl TicTacToeGameUi {
    pub fn new(symbols: SymbolsConfig) -> Self {
        Self { symbols }
    }

    /// Empty squares show their 1-based number; squares of a completed line
    /// are wrapped in brackets.
    pub fn render_board(&self, board: &Board, highlight: Option<WinningLine>) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);
        for (row, chunk) in board.cells().chunks(BOARD_SIZE).enumerate() {
            let squares: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let index = row * BOARD_SIZE + col;
                    let symbol = match cell.mark() {
                        Some(mark) => self.symbols.for_mark(mark),
                        None => char::from_digit((index + 1) as u32, 10).unwrap_or('?'),
                    };
                    if highlight.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect();
            rows.push(squares.join("|"));
        }
        rows.join(&format!("\n{}\n", ROW_SEPARATOR))
    }

    pub fn cell_label(index: usize) -> usize {
        index + 1
    }

    pub fn help_text(&self) -> String {
        format!(
            "You play {} and move first, the computer plays {}.\n\
             Commands: 1-9 place your mark, n new game, h help, q quit.",
            self.symbols.human, self.symbols.computer
        )
    }
}

pub fn end_game_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::XWon => Some("Congratulations, you have won!"),
        Outcome::OWon => Some("Sorry, you have been defeated!"),
        Outcome::Draw => Some("Tie game!"),
        Outcome::InProgress => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::Mark;

    fn ui() -> TicTacToeGameUi {
        TicTacToeGameUi::new(SymbolsConfig::default())
    }

    #[test]
    fn test_empty_board_shows_numbers() {
        let text = ui().render_board(&Board::new(), None);
        assert_eq!(
            text,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let board: Board = "OXX/XO_/__O".parse().unwrap();
        let text = ui().render_board(&board, board.winning_line());
        let first_row = text.lines().next().unwrap();
        assert_eq!(first_row, "[O]| X | X ");
        assert!(text.ends_with(" 7 | 8 |[O]"));
    }

    #[test]
    fn test_custom_symbols() {
        let ui = TicTacToeGameUi::new(SymbolsConfig {
            human: '@',
            computer: '#',
        });
        let board = Board::new().with_move(0, Mark::X).unwrap().with_move(4, Mark::O).unwrap();
        let text = ui.render_board(&board, None);
        assert!(text.starts_with(" @ | 2 | 3 "));
        assert!(text.contains(" 4 | # | 6 "));
    }

    #[test]
    fn test_end_game_messages() {
        assert_eq!(end_game_message(Outcome::XWon), Some("Congratulations, you have won!"));
        assert_eq!(end_game_message(Outcome::OWon), Some("Sorry, you have been defeated!"));
        assert_eq!(end_game_message(Outcome::Draw), Some("Tie game!"));
        assert_eq!(end_game_message(Outcome::InProgress), None);
    }
}
