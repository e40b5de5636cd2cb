use std::fmt;
use std::str::FromStr;

use super::error::GameError;
use super::types::{Cell, Mark, Outcome, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 3x3 board, cells in row-major order:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn occupied(&self, index: usize) -> Result<Cell, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::IndexOutOfRange(index))
    }

    /// Indices of empty cells in ascending order. The search relies on this
    /// order to prefer lower indices among equally good moves.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Puts `mark` on an empty cell. Turn order is not checked here.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        if !self.occupied(index)?.is_empty() {
            return Err(GameError::CellOccupied(index));
        }
        self.cells[index] = mark.into();
        Ok(())
    }

    pub fn with_move(&self, index: usize, mark: Mark) -> Result<Board, GameError> {
        let mut next = *self;
        next.place(index, mark)?;
        Ok(next)
    }

    // Only the search reverts cells; a real game never empties a cell again.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    pub fn evaluate(&self) -> Outcome {
        evaluate(self)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(self)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn count(&self, mark: Mark) -> usize {
        let target = Cell::from(mark);
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells written as `X`, `O` and `_` (`.` or `-` also mean empty).
/// Rows may be separated by `/` or whitespace: `"XX_/OO_/___"`.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for ch in s.chars().filter(|ch| *ch != '/' && !ch.is_whitespace()) {
            let cell = match ch {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '_' | '.' | '-' => Cell::Empty,
                other => {
                    return Err(GameError::InvalidBoard(format!(
                        "unexpected character '{}'",
                        other
                    )));
                }
            };
            if count == CELL_COUNT {
                return Err(GameError::InvalidBoard(format!(
                    "more than {} cells",
                    CELL_COUNT
                )));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(GameError::InvalidBoard(format!(
                "expected {} cells, found {}",
                CELL_COUNT, count
            )));
        }

        Ok(Self { cells })
    }
}
