use crate::log_debug;
use super::board::Board;
use super::error::GameError;
use super::types::{Mark, Outcome, Score};
use super::win_detector::evaluate;

const CENTER: usize = 4;
const TOP_LEFT: usize = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub index: usize,
    pub score: Score,
    /// Tentative placements made while searching.
    pub nodes: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveSource {
    Opening,
    Search(SearchResult),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotMove {
    pub index: usize,
    pub source: MoveSource,
}

impl BotMove {
    pub fn nodes(&self) -> u64 {
        match self.source {
            MoveSource::Opening => 0,
            MoveSource::Search(result) => result.nodes,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotSettings {
    pub opening_shortcut: bool,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            opening_shortcut: true,
        }
    }
}

/// O's reply to a lone opening mark: the center, or the top-left corner when
/// the center is taken. Both are optimal and skip the deepest search.
pub fn opening_reply(board: &Board) -> Option<usize> {
    if board.filled_count() != 1 {
        return None;
    }
    if board.cells()[CENTER].is_empty() {
        Some(CENTER)
    } else {
        Some(TOP_LEFT)
    }
}

/// Computer reply for O on a board still in progress.
pub fn calculate_move(board: &Board, settings: &BotSettings) -> Result<BotMove, GameError> {
    if evaluate(board).is_terminal() {
        return Err(GameError::PreconditionViolated("game is already decided"));
    }

    if settings.opening_shortcut
        && let Some(index) = opening_reply(board)
    {
        log_debug!("Opening reply at cell {}", index);
        return Ok(BotMove {
            index,
            source: MoveSource::Opening,
        });
    }

    let result = best_move(board, Mark::O)?;
    log_debug!(
        "Searched reply at cell {} (score {}, {} nodes)",
        result.index,
        result.score.value(),
        result.nodes
    );
    Ok(BotMove {
        index: result.index,
        source: MoveSource::Search(result),
    })
}

/// Exhaustive minimax for `side` to move. O maximizes the score, X minimizes
/// it, and the lowest index wins among equally scored moves.
///
/// The caller is expected to check for a finished game first; only a board
/// without empty cells is rejected here.
pub fn best_move(board: &Board, side: Mark) -> Result<SearchResult, GameError> {
    let mut search = Minimax {
        board: *board,
        nodes: 0,
    };
    let (index, score) = search
        .search(side)
        .ok_or(GameError::PreconditionViolated("no legal moves"))?;
    Ok(SearchResult {
        index,
        score,
        nodes: search.nodes,
    })
}

struct Minimax {
    board: Board,
    nodes: u64,
}

impl Minimax {
    fn search(&mut self, side: Mark) -> Option<(usize, Score)> {
        let mut best: Option<(usize, Score)> = None;

        for index in self.board.legal_moves() {
            self.nodes += 1;
            // Legal moves are empty cells, so this cannot fail.
            let _ = self.board.place(index, side);

            let score = match evaluate(&self.board) {
                Outcome::InProgress => self.search(side.opponent()).map(|(_, score)| score),
                outcome => Score::from_outcome(outcome),
            };

            self.board.clear(index);

            let Some(score) = score else {
                continue;
            };

            let improves = match best {
                None => true,
                Some((_, best_score)) => match side {
                    Mark::O => score > best_score,
                    Mark::X => score < best_score,
                },
            };
            if improves {
                best = Some((index, score));
            }
        }

        best
    }
}
