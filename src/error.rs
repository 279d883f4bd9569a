use crate::types::{Color, Position};

/// Errors surfaced by the rules engine.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    /// Board size is even or smaller than 5; no hexagon can be built from it.
    #[error("board size must be odd and at least 5, got {size}")]
    InvalidConfiguration { size: usize },

    /// An operation that needs a player was given `Color::Empty`.
    #[error("operation requires black or white, got empty")]
    InvalidColor,

    /// A pass was requested while the player still had a legal move.
    #[error("{0} player has valid moves left")]
    IllegalPass(Color),

    #[error("game is already over")]
    GameAlreadyOver,

    /// The tracker was asked to play a move that captures nothing.
    #[error("illegal move at {0}")]
    IllegalMove(Position),

    /// A mutation targeted a position outside the hexagon.
    #[error("position {0} is not on the board")]
    OffBoard(Position),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Rejects `Color::Empty` for operations that need a definite player.
pub(crate) fn require_player(color: Color) -> Result<Color> {
    if color.is_player() {
        Ok(color)
    } else {
        Err(EngineError::InvalidColor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            EngineError::InvalidConfiguration { size: 4 }.to_string(),
            "board size must be odd and at least 5, got 4"
        );
        assert_eq!(
            EngineError::IllegalPass(Color::White).to_string(),
            "white player has valid moves left"
        );
        assert_eq!(
            EngineError::OffBoard(Position::new(3, 3)).to_string(),
            "position (3, 3) is not on the board"
        );
    }

    #[test]
    fn require_player_rejects_empty() {
        assert_eq!(require_player(Color::Empty), Err(EngineError::InvalidColor));
        assert_eq!(require_player(Color::Black), Ok(Color::Black));
    }
}
