use std::fmt;

/// The mark a player puts on the board. X is the human and always moves first,
/// O is the computer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::XWon => Some(Mark::X),
            Outcome::OWon => Some(Mark::O),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::InProgress => "in progress",
            Outcome::XWon => "X won",
            Outcome::OWon => "O won",
            Outcome::Draw => "draw",
        };
        write!(f, "{}", text)
    }
}

/// Game-theoretic value of a position, always from O's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    XWins = -1,
    Draw = 0,
    OWins = 1,
}

impl Score {
    pub fn value(&self) -> i8 {
        *self as i8
    }

    /// Score of a finished game, `None` while it is still in progress.
    pub fn from_outcome(outcome: Outcome) -> Option<Score> {
        match outcome {
            Outcome::XWon => Some(Score::XWins),
            Outcome::OWon => Some(Score::OWins),
            Outcome::Draw => Some(Score::Draw),
            Outcome::InProgress => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub index: usize,
    pub mark: Mark,
}

impl Move {
    pub fn new(index: usize, mark: Mark) -> Self {
        Self { index, mark }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps_marks() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_cell_from_mark() {
        assert_eq!(Cell::from(Mark::X), Cell::X);
        assert_eq!(Cell::from(Mark::O).mark(), Some(Mark::O));
        assert_eq!(Cell::Empty.mark(), None);
    }

    #[test]
    fn test_score_ordering_follows_o_perspective() {
        assert!(Score::XWins < Score::Draw);
        assert!(Score::Draw < Score::OWins);
        assert_eq!(Score::XWins.value(), -1);
        assert_eq!(Score::Draw.value(), 0);
        assert_eq!(Score::OWins.value(), 1);
    }

    #[test]
    fn test_score_from_outcome() {
        assert_eq!(Score::from_outcome(Outcome::XWon), Some(Score::XWins));
        assert_eq!(Score::from_outcome(Outcome::OWon), Some(Score::OWins));
        assert_eq!(Score::from_outcome(Outcome::Draw), Some(Score::Draw));
        assert_eq!(Score::from_outcome(Outcome::InProgress), None);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::XWon.winner(), Some(Mark::X));
        assert_eq!(Outcome::OWon.winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
    }
}
