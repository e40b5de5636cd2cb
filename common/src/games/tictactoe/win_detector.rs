use super::board::Board;
use super::types::{Cell, Mark, Outcome, WinningLine};

/// Rows, then columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First complete line in `LINES` order, if any.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a].mark()?;
        if cells[b] == cells[a] && cells[c] == cells[a] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn evaluate(board: &Board) -> Outcome {
    match check_win(board) {
        Some(Mark::X) => Outcome::XWon,
        Some(Mark::O) => Outcome::OWon,
        None if board.cells().iter().all(|cell| *cell != Cell::Empty) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
