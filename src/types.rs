use std::fmt;

use serde::Serialize;

/// Occupant of a hex cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    Empty,
    Black,
    White,
}

impl Color {
    /// Returns the opposing player. `Empty` has no opponent and maps to itself.
    pub fn next_player(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
            Self::Empty => Self::Empty,
        }
    }

    pub fn is_player(self) -> bool {
        self != Self::Empty
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Black => "black",
            Self::White => "white",
        };
        f.write_str(name)
    }
}

/// A board coordinate, centered on the middle cell.
///
/// `q` is the column offset and `r` the row offset from the center, so the
/// center itself is `(0, 0)` and a board of radius `s` spans `-s..=s` on both
/// axes (restricted further to `|q + r| <= s` by the hexagon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub q: i32,
    pub r: i32,
}

impl Position {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub const fn offset(self, dq: i32, dr: i32) -> Self {
        Self {
            q: self.q + dq,
            r: self.r + dr,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((q, r): (i32, i32)) -> Self {
        Self { q, r }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// A legal destination together with the number of pieces it would capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub position: Position,
    pub captures: usize,
}

/// Final decision once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Winner(Color),
    Tie,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub board_size: usize,
    /// Row-major cells; `None` marks array slots outside the hexagon.
    pub cells: Vec<Option<Color>>,
    pub current_player: Color,
    pub black_count: usize,
    pub white_count: usize,
    pub black_passed: bool,
    pub white_passed: bool,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` when the previous action was a placement (or nothing yet).
    pub is_pass: bool,
    /// Contract:
    /// - Placement: positions flipped by that placement.
    /// - Pass: must be an empty list.
    pub flipped: Vec<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub black_count: usize,
    pub white_count: usize,
}
