use crate::{log, log_debug};
use super::board::Board;
use super::bot_controller::{BotMove, BotSettings, calculate_move};
use super::error::GameError;
use super::types::{Mark, Move, Outcome, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    pub human_move: usize,
    pub computer_move: Option<BotMove>,
    pub status: Outcome,
}

/// One game of human (X) against computer (O). The human always moves first
/// and every accepted human move is answered immediately.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    status: Outcome,
    history: Vec<Move>,
    settings: BotSettings,
    nodes_searched: u64,
}

impl TicTacToeGameState {
    pub fn new(settings: BotSettings) -> Self {
        Self {
            board: Board::new(),
            status: Outcome::InProgress,
            history: Vec::new(),
            settings,
            nodes_searched: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        if self.is_over() {
            check_win_with_line(&self.board)
        } else {
            None
        }
    }

    /// Positions visited by all searches in this game so far.
    pub fn search_stats(&self) -> u64 {
        self.nodes_searched
    }

    pub fn play_human_move(&mut self, index: usize) -> Result<TurnSummary, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        self.board.place(index, Mark::X)?;
        self.history.push(Move::new(index, Mark::X));
        self.status = evaluate(&self.board);

        let computer_move = if self.status == Outcome::InProgress {
            let reply = calculate_move(&self.board, &self.settings)?;
            self.board.place(reply.index, Mark::O)?;
            self.history.push(Move::new(reply.index, Mark::O));
            self.nodes_searched += reply.nodes();
            self.status = evaluate(&self.board);
            log_debug!("X played {}, O replied {}", index, reply.index);
            Some(reply)
        } else {
            None
        };

        if self.is_over() {
            log!("Game over after {} moves: {}", self.history.len(), self.status);
        }

        Ok(TurnSummary {
            human_move: index,
            computer_move,
            status: self.status,
        })
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(BotSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut TicTacToeGameState, moves: &[usize]) -> Vec<TurnSummary> {
        moves
            .iter()
            .map(|&index| game.play_human_move(index).unwrap())
            .collect()
    }

    #[test]
    fn test_human_move_is_answered() {
        let mut game = TicTacToeGameState::default();
        let turn = game.play_human_move(0).unwrap();

        assert_eq!(turn.human_move, 0);
        assert_eq!(turn.computer_move.map(|m| m.index), Some(4));
        assert_eq!(turn.status, Outcome::InProgress);
        assert_eq!(game.history(), &[Move::new(0, Mark::X), Move::new(4, Mark::O)]);
        assert_eq!(game.board().filled_count(), 2);
    }

    #[test]
    fn test_occupied_cell_leaves_state_untouched() {
        let mut game = TicTacToeGameState::default();
        game.play_human_move(0).unwrap();
        let before = *game.board();

        assert_eq!(game.play_human_move(4), Err(GameError::CellOccupied(4)));
        assert_eq!(game.play_human_move(12), Err(GameError::IndexOutOfRange(12)));
        assert_eq!(game.board(), &before);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_computer_wins_on_diagonal() {
        let mut game = TicTacToeGameState::default();
        let turns = play_all(&mut game, &[1, 2, 3]);

        let last = turns.last().unwrap();
        assert_eq!(last.computer_move.map(|m| m.index), Some(8));
        assert_eq!(game.status(), Outcome::OWon);
        assert_eq!(game.winning_line(), Some(WinningLine::new(Mark::O, [0, 4, 8])));
        assert!(game.search_stats() > 0);
    }

    #[test]
    fn test_draw_ends_on_human_move() {
        let mut game = TicTacToeGameState::default();
        let turns = play_all(&mut game, &[0, 1, 6, 5, 8]);

        let last = turns.last().unwrap();
        assert_eq!(last.computer_move, None);
        assert_eq!(last.status, Outcome::Draw);
        assert_eq!(game.board().to_string(), "XXO/OOX/XOX");
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut game = TicTacToeGameState::default();
        play_all(&mut game, &[1, 2, 3]);
        assert!(game.is_over());
        assert_eq!(game.play_human_move(5), Err(GameError::GameOver));
    }

    #[test]
    fn test_history_alternates_marks() {
        let mut game = TicTacToeGameState::default();
        play_all(&mut game, &[0, 1, 6, 5, 8]);
        for (i, mv) in game.history().iter().enumerate() {
            let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(mv.mark, expected);
        }
    }

    fn explore(game: &TicTacToeGameState, outcomes: &mut Vec<Outcome>) {
        for index in game.board().legal_moves() {
            let mut next = game.clone();
            let turn = next.play_human_move(index).unwrap();
            if turn.status.is_terminal() {
                outcomes.push(turn.status);
            } else {
                explore(&next, outcomes);
            }
        }
    }

    #[test]
    fn test_computer_never_loses() {
        let mut outcomes = Vec::new();
        explore(&TicTacToeGameState::default(), &mut outcomes);

        assert_eq!(outcomes.len(), 657);
        assert!(!outcomes.contains(&Outcome::XWon));
        assert_eq!(outcomes.iter().filter(|o| **o == Outcome::Draw).count(), 117);
    }
}
