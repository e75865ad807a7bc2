use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidPlayer,
    OutOfBounds { row: usize, col: usize },
    CellOccupied { row: usize, col: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidPlayer => write!(f, "Only X or O can be placed"),
            MoveError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            MoveError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already marked", row, col)
            }
        }
    }
}

impl std::error::Error for MoveError {}
