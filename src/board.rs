use std::fmt::{self, Write};
use std::rc::Rc;

use crate::config::{DEFAULT_BOARD_SIZE, GameConfig};
use crate::error::{EngineError, Result, require_player};
use crate::events::{GameEvent, Observer, Observers};
use crate::hex::{DIRECTIONS, HexLayout};
use crate::types::{Color, Outcome, Position};

/// Hexagonal Reversi board: cells, turn, pass flags and game-over state.
///
/// Cells live in a row-major square array; slots outside the hexagon hold
/// `None` and are never treated as board positions.
#[derive(Debug)]
pub struct Board {
    layout: HexLayout,
    cells: Vec<Option<Color>>,
    current_turn: Color,
    black_passed: bool,
    white_passed: bool,
    game_over: bool,
    observers: Observers,
}

impl Board {
    /// Creates the opening position: the six cells around the center
    /// alternate black/white, everything else in the hexagon is empty.
    pub fn new(size: usize) -> Result<Self> {
        Self::from_config(&GameConfig::with_board_size(size)?)
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::opening(HexLayout::new(config.board_size)))
    }

    fn opening(layout: HexLayout) -> Self {
        let mut cells = vec![None; layout.cell_count()];
        for pos in layout.positions() {
            let color = match DIRECTIONS.iter().position(|&step| step == (pos.q, pos.r)) {
                Some(i) if i % 2 == 0 => Color::Black,
                Some(_) => Color::White,
                None => Color::Empty,
            };
            if let Some(idx) = layout.to_index(pos) {
                cells[idx] = Some(color);
            }
        }

        Self {
            layout,
            cells,
            current_turn: Color::Black,
            black_passed: false,
            white_passed: false,
            game_over: false,
            observers: Observers::new(),
        }
    }

    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    pub fn size(&self) -> usize {
        self.layout.size()
    }

    pub fn mid_point(&self) -> i32 {
        self.layout.mid_point()
    }

    /// Distance from the center cell to any edge; equal to [`Board::mid_point`].
    pub fn radius(&self) -> i32 {
        self.layout.radius()
    }

    /// Occupant of `pos`, or `None` when the position is not on the board.
    pub fn cell(&self, pos: Position) -> Option<Color> {
        self.layout.to_index(pos).and_then(|idx| self.cells[idx])
    }

    /// Row-major view of the backing array, absent slots included.
    pub fn cells(&self) -> &[Option<Color>] {
        &self.cells
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    /// Puts `color` on `pos`, clears both pass flags and refreshes game over.
    ///
    /// Does not flip or switch turns, and does not check legality: callers
    /// validate with [`Board::is_valid_move`] first, then [`Board::flip`] and
    /// [`Board::switch_turn`].
    pub fn place_piece(&mut self, pos: Position, color: Color) -> Result<()> {
        require_player(color)?;
        if self.game_over {
            return Err(EngineError::GameAlreadyOver);
        }

        self.set_cell(pos, color)?;
        self.black_passed = false;
        self.white_passed = false;
        self.refresh_game_over();
        Ok(())
    }

    /// Records a pass for `color`. Rejected while `color` still has a legal move.
    /// Does not switch turns.
    pub fn player_pass(&mut self, color: Color) -> Result<()> {
        require_player(color)?;
        if self.game_over {
            return Err(EngineError::GameAlreadyOver);
        }
        if self.has_legal_move(color)? {
            return Err(EngineError::IllegalPass(color));
        }

        match color {
            Color::Black => self.black_passed = true,
            _ => self.white_passed = true,
        }
        self.refresh_game_over();
        Ok(())
    }

    /// Clears one color's pass flag.
    pub fn reset_pass(&mut self, color: Color) -> Result<()> {
        match require_player(color)? {
            Color::Black => self.black_passed = false,
            _ => self.white_passed = false,
        }
        Ok(())
    }

    pub fn has_player_passed(&self, color: Color) -> bool {
        match color {
            Color::Black => self.black_passed,
            Color::White => self.white_passed,
            Color::Empty => false,
        }
    }

    /// Hands the turn to the other player and notifies observers.
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.next_player();
        self.notify_turn_changed();
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(color)).count()
    }

    pub fn score(&self, color: Color) -> usize {
        self.count_pieces(color)
    }

    pub fn empty_count(&self) -> usize {
        self.count_pieces(Color::Empty)
    }

    pub fn is_board_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Once true, stays true for the lifetime of this board.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Winner by strict piece count, available only after the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            return None;
        }
        let black = self.count_pieces(Color::Black);
        let white = self.count_pieces(Color::White);
        Some(if black > white {
            Outcome::Winner(Color::Black)
        } else if white > black {
            Outcome::Winner(Color::White)
        } else {
            Outcome::Tie
        })
    }

    /// Independent copy of cells, turn and pass flags with no observers.
    pub fn deep_copy(&self) -> Self {
        Self {
            layout: self.layout,
            cells: self.cells.clone(),
            current_turn: self.current_turn,
            black_passed: self.black_passed,
            white_passed: self.white_passed,
            game_over: self.game_over,
            observers: Observers::new(),
        }
    }

    pub fn add_observer<O: Observer + 'static>(&mut self, observer: &Rc<O>) {
        self.observers.subscribe(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn notify_turn_changed(&mut self) {
        let event = GameEvent::TurnChanged(self.current_turn);
        self.observers.emit(&event);
    }

    /// Emits `GameOver` with the current outcome. No-op while the game is running.
    pub fn notify_game_over(&mut self) {
        if let Some(outcome) = self.outcome() {
            self.observers.emit(&GameEvent::GameOver(outcome));
        }
    }

    pub(crate) fn set_cell(&mut self, pos: Position, color: Color) -> Result<()> {
        let idx = self
            .layout
            .to_index(pos)
            .ok_or(EngineError::OffBoard(pos))?;
        self.cells[idx] = Some(color);
        Ok(())
    }

    fn refresh_game_over(&mut self) {
        if self.is_board_full() || (self.black_passed && self.white_passed) {
            self.game_over = true;
        }
    }
}

impl Default for Board {
    /// A board of the default size (7) in the opening position.
    fn default() -> Self {
        Self::opening(HexLayout::new(DEFAULT_BOARD_SIZE))
    }
}

/// Draws the hexagon one row at a time, shifting each row by its distance
/// from the center: `X` black, `O` white, `.` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.mid_point();
        for r in -s..=s {
            for _ in 0..r.abs() {
                f.write_char(' ')?;
            }
            let row = (-s..=s)
                .filter_map(|q| self.cell(Position::new(q, r)))
                .map(|cell| match cell {
                    Color::Black => "X",
                    Color::White => "O",
                    Color::Empty => ".",
                })
                .collect::<Vec<_>>()
                .join(" ");
            f.write_str(&row)?;
            f.write_char('\n')?;
        }
        Ok(())
    }
}
