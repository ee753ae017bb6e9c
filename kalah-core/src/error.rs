use crate::board::Player;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Board seeded with the wrong number of counts
    #[error("invalid counts to set board: expected {expected}, got {got}")]
    InvalidCounts { expected: usize, got: usize },

    #[error("total piece count exceeds {}", u32::MAX)]
    TooManyPieces,

    #[error("no store slot for {0}")]
    MissingStore(Player),

    /// Slot does not belong to this board (usually a slot taken from another fork)
    #[error("slot at position {position} is not on this board")]
    ForeignSlot { position: usize },

    #[error("position out of range: {position}")]
    PositionOutOfRange { position: usize },

    #[error("unknown player: {0:?}")]
    UnknownPlayer(String),
}

#[cfg(feature = "python")]
impl From<BoardError> for pyo3::PyErr {
    fn from(err: BoardError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            BoardError::InvalidCounts { expected: 14, got: 3 }.to_string(),
            "invalid counts to set board: expected 14, got 3"
        );
        assert_eq!(
            BoardError::MissingStore(Player::Two).to_string(),
            "no store slot for player2"
        );
        assert_eq!(
            BoardError::UnknownPlayer("player3".to_string()).to_string(),
            "unknown player: \"player3\""
        );
    }
}
