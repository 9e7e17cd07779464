use super::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    GameOver,
    NotYourTurn { expected: Mark, got: Mark },
    OutOfRange { index: usize },
    CellOccupied { index: usize },
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::GameOver => write!(f, "Game is already over"),
            InvalidMove::NotYourTurn { expected, got } => {
                write!(f, "Not your turn: {} to move, got {}", expected, got)
            }
            InvalidMove::OutOfRange { index } => {
                write!(f, "Cell {} is out of range", index)
            }
            InvalidMove::CellOccupied { index } => {
                write!(f, "Cell {} is already marked", index)
            }
        }
    }
}

impl std::error::Error for InvalidMove {}
