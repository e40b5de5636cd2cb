/// Errors returned by board, search and session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell index {0} is out of range (expected 0..=8)")]
    IndexOutOfRange(usize),

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("precondition violated: {0}")]
    PreconditionViolated(&'static str),

    #[error("game is already over")]
    GameOver,

    #[error("invalid board: {0}")]
    InvalidBoard(String),
}
