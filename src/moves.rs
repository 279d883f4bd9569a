use crate::board::Board;
use crate::error::{Result, require_player};
use crate::types::{Color, Move};

impl Board {
    /// Every legal move for `color` with its capture yield, in row-major
    /// order. Recomputed on each call.
    pub fn legal_moves(&self, color: Color) -> Result<Vec<Move>> {
        let color = require_player(color)?;
        let mut moves = Vec::new();

        for position in self.layout().positions() {
            if self.cell(position) != Some(Color::Empty) {
                continue;
            }
            let captures = self.capture_count(position, color)?;
            if captures > 0 {
                moves.push(Move { position, captures });
            }
        }

        Ok(moves)
    }

    pub fn has_legal_move(&self, color: Color) -> Result<bool> {
        let color = require_player(color)?;
        for position in self.layout().positions() {
            if self.is_valid_move(position, color)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::types::Position;

    #[test]
    fn opening_moves_on_size_five() {
        let board = Board::new(5).unwrap();
        let moves = board.legal_moves(Color::Black).unwrap();

        // Each white piece touches two black pieces, so it can be enclosed
        // from two cells.
        assert_eq!(moves.len(), 6);
        assert!(moves.iter().all(|mv| mv.captures == 1));
        assert_eq!(moves[0].position, Position::new(1, -2));

        for mv in &moves {
            assert!(board.is_valid_move(mv.position, Color::Black).unwrap());
        }
    }

    #[test]
    fn moves_are_in_row_major_order() {
        let board = Board::new(7).unwrap();
        let moves = board.legal_moves(Color::White).unwrap();
        let keys: Vec<(i32, i32)> = moves
            .iter()
            .map(|mv| (mv.position.r, mv.position.q))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn enumeration_matches_legality_everywhere() {
        let board = Board::new(7).unwrap();
        for color in [Color::Black, Color::White] {
            let moves = board.legal_moves(color).unwrap();
            let legal: Vec<Position> = board
                .layout()
                .positions()
                .filter(|&pos| board.is_valid_move(pos, color).unwrap())
                .collect();
            let listed: Vec<Position> = moves.iter().map(|mv| mv.position).collect();
            assert_eq!(listed, legal);
            assert_eq!(board.has_legal_move(color).unwrap(), !moves.is_empty());
        }
    }

    #[test]
    fn empty_color_is_rejected() {
        let board = Board::new(5).unwrap();
        assert_eq!(board.legal_moves(Color::Empty), Err(EngineError::InvalidColor));
        assert_eq!(board.has_legal_move(Color::Empty), Err(EngineError::InvalidColor));
    }
}
