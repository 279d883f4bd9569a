//! Hexagon-in-square coordinate system.
//!
//! A regular hexagon of radius `s` is stored in a square array of side
//! `2s + 1`. Array slot `(row, col)` corresponds to the centered position
//! `q = col - s`, `r = row - s`, and it belongs to the hexagon only when
//! `|q|`, `|r|` and `|q + r|` are all at most `s`. The remaining slots in two
//! opposite corners of the square are never allocated.

use crate::types::Position;

/// The six axial neighbor steps `(dq, dr)`.
pub const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Geometry of one board: translation between centered positions and array indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexLayout {
    size: usize,
}

impl HexLayout {
    /// Caller contract: `size` is odd and at least 5 (see `GameConfig::validate`).
    pub(crate) const fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Half the board size; also the hexagon's radius.
    pub fn mid_point(&self) -> i32 {
        (self.size / 2) as i32
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Array-bounds check on raw `(col, row)` indices. Says nothing about the hexagon.
    pub fn is_valid_coordinate(&self, col: i32, row: i32) -> bool {
        let size = self.size as i32;
        (0..size).contains(&col) && (0..size).contains(&row)
    }

    /// Same value as [`HexLayout::mid_point`]: cells from the center to an edge.
    pub fn radius(&self) -> i32 {
        self.mid_point()
    }

    /// Whether a centered position lies inside the hexagon. Any `i32` pair is
    /// accepted; the arithmetic is widened so extreme values cannot overflow.
    pub fn contains(&self, pos: Position) -> bool {
        let s = i64::from(self.mid_point());
        let (q, r) = (i64::from(pos.q), i64::from(pos.r));
        q.abs() <= s && r.abs() <= s && (q + r).abs() <= s
    }

    /// Row-major array index for a position inside the hexagon.
    pub fn to_index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        let s = self.mid_point();
        let (col, row) = (pos.q + s, pos.r + s);
        debug_assert!(self.is_valid_coordinate(col, row));
        Some(row as usize * self.size + col as usize)
    }

    /// Centered position of an array index. Does not check hexagon membership.
    pub fn to_position(&self, index: usize) -> Position {
        let s = self.mid_point();
        let row = (index / self.size) as i32;
        let col = (index % self.size) as i32;
        Position::new(col - s, row - s)
    }

    /// Every position inside the hexagon, in row-major array order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cell_count())
            .map(|idx| self.to_position(idx))
            .filter(|&pos| self.contains(pos))
    }

    /// The six vertices of the hexagon, walking around from `(s, 0)`.
    pub fn corners(&self) -> [Position; 6] {
        let s = self.mid_point();
        DIRECTIONS.map(|(dq, dr)| Position::new(dq * s, dr * s))
    }
}
