//! One-ply greedy move selection.

use std::str::FromStr;

use crate::board::Board;
use crate::error::{Result, require_player};
use crate::game::MoveSelector;
use crate::types::{Color, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Largest immediate capture; earliest in row-major order on ties.
    MaxCapture,
    /// Best legal hexagon vertex, else [`Strategy::MaxCapture`] over the whole board.
    CornerPreference,
}

impl Strategy {
    pub fn select(self, board: &Board, color: Color) -> Result<Option<Move>> {
        match self {
            Self::MaxCapture => max_capture(board, color),
            Self::CornerPreference => corner_preference(board, color),
        }
    }
}

impl MoveSelector for Strategy {
    fn select_move(&self, board: &Board, color: Color) -> Result<Option<Move>> {
        self.select(board, color)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown strategy {0:?} (expected \"capture\" or \"corner\")")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "capture" => Ok(Self::MaxCapture),
            "corner" => Ok(Self::CornerPreference),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

pub fn max_capture(board: &Board, color: Color) -> Result<Option<Move>> {
    Ok(best_of(board.legal_moves(color)?))
}

pub fn corner_preference(board: &Board, color: Color) -> Result<Option<Move>> {
    let color = require_player(color)?;

    let mut corners = Vec::new();
    for position in board.layout().corners() {
        if board.is_valid_move(position, color)? {
            let captures = board.capture_count(position, color)?;
            corners.push(Move { position, captures });
        }
    }

    match best_of(corners) {
        Some(mv) => Ok(Some(mv)),
        None => max_capture(board, color),
    }
}

/// First move with the strictly highest capture count.
fn best_of(moves: Vec<Move>) -> Option<Move> {
    moves.into_iter().fold(None, |best, mv| match best {
        Some(current) if current.captures >= mv.captures => Some(current),
        _ => Some(mv),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::types::Position;

    fn cleared_board(size: usize) -> Board {
        let mut board = Board::new(size).unwrap();
        let positions: Vec<Position> = board.layout().positions().collect();
        for pos in positions {
            board.set_cell(pos, Color::Empty).unwrap();
        }
        board
    }

    #[test]
    fn parses_strategy_names() {
        assert_eq!("capture".parse::<Strategy>(), Ok(Strategy::MaxCapture));
        assert_eq!(" Corner ".parse::<Strategy>(), Ok(Strategy::CornerPreference));
        assert_eq!(
            "minimax".parse::<Strategy>(),
            Err(ParseStrategyError("minimax".to_string()))
        );
    }

    #[test]
    fn max_capture_prefers_larger_yield() {
        let mut board = cleared_board(7);
        // (-3, 0) encloses one white piece, (3, -1) encloses two.
        board.set_cell(Position::new(-2, 0), Color::White).unwrap();
        board.set_cell(Position::new(-1, 0), Color::Black).unwrap();
        board.set_cell(Position::new(2, -1), Color::White).unwrap();
        board.set_cell(Position::new(1, -1), Color::White).unwrap();
        board.set_cell(Position::new(0, -1), Color::Black).unwrap();

        let mv = max_capture(&board, Color::Black).unwrap().unwrap();
        assert_eq!(mv.position, Position::new(3, -1));
        assert_eq!(mv.captures, 2);
    }

    #[test]
    fn max_capture_breaks_ties_by_scan_order() {
        let board = Board::new(5).unwrap();
        let first = board.legal_moves(Color::Black).unwrap()[0];
        assert_eq!(max_capture(&board, Color::Black).unwrap(), Some(first));
    }

    #[test]
    fn corner_preference_takes_legal_corner_over_bigger_capture() {
        let mut board = cleared_board(7);
        // Corner (3, 0) encloses one piece.
        board.set_cell(Position::new(2, 0), Color::White).unwrap();
        board.set_cell(Position::new(1, 0), Color::Black).unwrap();
        // Interior cell (-1, 2) encloses two.
        board.set_cell(Position::new(-1, 1), Color::White).unwrap();
        board.set_cell(Position::new(-1, 0), Color::White).unwrap();
        board.set_cell(Position::new(-1, -1), Color::Black).unwrap();

        assert_eq!(max_capture(&board, Color::Black).unwrap().unwrap().captures, 2);

        let mv = corner_preference(&board, Color::Black).unwrap().unwrap();
        assert_eq!(mv.position, Position::new(3, 0));
        assert_eq!(mv.captures, 1);
    }

    #[test]
    fn corner_preference_picks_the_corner_with_most_captures() {
        let mut board = cleared_board(7);
        // Corner (3, 0) encloses one piece.
        board.set_cell(Position::new(2, 0), Color::White).unwrap();
        board.set_cell(Position::new(1, 0), Color::Black).unwrap();
        // Corner (0, -3), later in vertex order, encloses two.
        board.set_cell(Position::new(0, -2), Color::White).unwrap();
        board.set_cell(Position::new(0, -1), Color::White).unwrap();
        board.set_cell(Position::new(0, 0), Color::Black).unwrap();

        let mv = corner_preference(&board, Color::Black).unwrap().unwrap();
        assert_eq!(mv.position, Position::new(0, -3));
        assert_eq!(mv.captures, 2);
    }

    #[test]
    fn corner_preference_breaks_ties_by_vertex_order() {
        let mut board = cleared_board(7);
        board.set_cell(Position::new(2, 0), Color::White).unwrap();
        board.set_cell(Position::new(1, 0), Color::Black).unwrap();
        board.set_cell(Position::new(0, -2), Color::White).unwrap();
        board.set_cell(Position::new(0, -1), Color::Black).unwrap();

        assert!(board.is_valid_move(Position::new(0, -3), Color::Black).unwrap());
        let mv = corner_preference(&board, Color::Black).unwrap().unwrap();
        assert_eq!(mv.position, Position::new(3, 0));
        assert_eq!(mv.captures, 1);
    }

    #[test]
    fn corner_preference_falls_back_to_max_capture() {
        let board = Board::new(7).unwrap();
        assert_eq!(
            corner_preference(&board, Color::Black).unwrap(),
            max_capture(&board, Color::Black).unwrap()
        );
    }

    #[test]
    fn no_moves_selects_nothing() {
        let mut board = cleared_board(5);
        board.set_cell(Position::new(0, 0), Color::Black).unwrap();
        assert_eq!(Strategy::MaxCapture.select(&board, Color::Black).unwrap(), None);
        assert_eq!(Strategy::CornerPreference.select(&board, Color::White).unwrap(), None);
    }

    #[test]
    fn empty_color_is_rejected() {
        let board = Board::new(5).unwrap();
        assert_eq!(
            Strategy::MaxCapture.select(&board, Color::Empty),
            Err(EngineError::InvalidColor)
        );
        assert_eq!(
            Strategy::CornerPreference.select(&board, Color::Empty),
            Err(EngineError::InvalidColor)
        );
    }
}
