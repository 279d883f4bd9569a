//! Sandwich-capture rule.
//!
//! From a target cell, each of the six directions is walked while the cells
//! belong to the opponent. The run counts only when the walk stops on a cell
//! of the mover's color; running off the hexagon or onto an empty cell
//! captures nothing in that direction. Legality, capture counting and
//! flipping all share [`Board::captures`], so they always agree.

use crate::board::Board;
use crate::error::{EngineError, Result, require_player};
use crate::hex::DIRECTIONS;
use crate::types::{Color, Position};

impl Board {
    /// Opponent cells that `color` would enclose by occupying `pos`, grouped
    /// direction by direction in [`DIRECTIONS`] order.
    ///
    /// Pure: the board is not modified. The occupant of `pos` itself is not
    /// inspected, so this also describes the flips owed after a placement.
    /// Positions outside the hexagon capture nothing.
    pub fn captures(&self, pos: Position, color: Color) -> Result<Vec<Position>> {
        let color = require_player(color)?;
        if self.cell(pos).is_none() {
            return Ok(Vec::new());
        }

        let opponent = color.next_player();
        let mut captured = Vec::new();

        for (dq, dr) in DIRECTIONS {
            let mut run = Vec::new();
            let mut next = pos.offset(dq, dr);

            while self.cell(next) == Some(opponent) {
                run.push(next);
                next = next.offset(dq, dr);
            }

            if !run.is_empty() && self.cell(next) == Some(color) {
                captured.extend(run);
            }
        }

        Ok(captured)
    }

    /// Whether `color` may play at `pos`: the cell is on the board, empty, and
    /// encloses at least one opponent run.
    pub fn is_valid_move(&self, pos: Position, color: Color) -> Result<bool> {
        require_player(color)?;
        if self.cell(pos) != Some(Color::Empty) {
            return Ok(false);
        }
        Ok(!self.captures(pos, color)?.is_empty())
    }

    /// Number of opponent pieces `color` would capture at `pos`.
    pub fn capture_count(&self, pos: Position, color: Color) -> Result<usize> {
        Ok(self.captures(pos, color)?.len())
    }

    /// Turns every enclosed opponent piece around `pos` into `color` and
    /// returns the flipped positions. No other cell changes.
    pub fn flip(&mut self, pos: Position, color: Color) -> Result<Vec<Position>> {
        if self.cell(pos).is_none() {
            return Err(EngineError::OffBoard(pos));
        }

        let flipped = self.captures(pos, color)?;
        for &captured in &flipped {
            self.set_cell(captured, color)?;
        }
        Ok(flipped)
    }
}
