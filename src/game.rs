//! Turn and termination tracking on top of [`Board`].
//!
//! [`Game`] drives the place → flip → switch-turn sequence, validates passes,
//! and announces the end of the game to the board's observers exactly once.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{EngineError, Result};
use crate::events::Observer;
use crate::types::{Color, GameResult, GameState, Move, Outcome, Position};

/// Picks a move for `color`, or `None` when it has nothing to play.
pub trait MoveSelector {
    fn select_move(&self, board: &Board, color: Color) -> Result<Option<Move>>;
}

/// Plays the first legal move in row-major order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&self, board: &Board, color: Color) -> Result<Option<Move>> {
        Ok(board.legal_moves(color)?.into_iter().next())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver(Outcome),
}

/// One game of hexagonal Reversi.
#[derive(Debug)]
pub struct Game {
    board: Board,
    is_pass: bool,
    flipped: Vec<Position>,
    announced: bool,
}

impl Game {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self::from_board(Board::new(size)?))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Ok(Self::from_board(Board::from_config(config)?))
    }

    /// Continues from an existing board, keeping its turn and pass flags.
    pub fn from_board(board: Board) -> Self {
        Self {
            announced: board.is_game_over(),
            board,
            is_pass: false,
            flipped: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn add_observer<O: Observer + 'static>(&mut self, observer: &Rc<O>) {
        self.board.add_observer(observer);
    }

    pub fn current_player(&self) -> Color {
        self.board.current_turn()
    }

    pub fn status(&self) -> GameStatus {
        match self.board.outcome() {
            Some(outcome) => GameStatus::GameOver(outcome),
            None => GameStatus::Playing,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Winner by strict piece count; `None` while the game is running.
    pub fn winner(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    pub fn legal_moves(&self) -> Result<Vec<Move>> {
        self.board.legal_moves(self.current_player())
    }

    /// Whether the player to move has no legal placement and must pass.
    pub fn must_pass(&self) -> Result<bool> {
        Ok(!self.board.has_legal_move(self.current_player())?)
    }

    /// Positions flipped by the last placement; empty after a pass.
    pub fn last_flipped(&self) -> &[Position] {
        &self.flipped
    }

    /// Plays `pos` for the player to move and returns the number of captured pieces.
    pub fn play(&mut self, pos: Position) -> Result<usize> {
        if self.board.is_game_over() {
            return Err(EngineError::GameAlreadyOver);
        }

        let color = self.current_player();
        if !self.board.is_valid_move(pos, color)? {
            return Err(EngineError::IllegalMove(pos));
        }

        self.board.place_piece(pos, color)?;
        self.flipped = self.board.flip(pos, color)?;
        self.is_pass = false;
        debug!(%color, %pos, captures = self.flipped.len(), "placed piece");

        self.board.switch_turn();
        self.announce_game_over();
        Ok(self.flipped.len())
    }

    /// Passes for the player to move. Rejected while that player can still place.
    pub fn pass(&mut self) -> Result<()> {
        let color = self.current_player();
        self.board.player_pass(color)?;
        self.is_pass = true;
        self.flipped.clear();
        debug!(%color, "player passed");

        self.board.switch_turn();
        self.announce_game_over();
        Ok(())
    }

    /// Lets `selector` choose for the player to move, passing when it finds
    /// nothing. Returns the move played, or `None` for a pass.
    pub fn play_selected(&mut self, selector: &dyn MoveSelector) -> Result<Option<Move>> {
        if self.board.is_game_over() {
            return Err(EngineError::GameAlreadyOver);
        }

        let color = self.current_player();
        match selector.select_move(&self.board, color)? {
            Some(mv) => {
                trace!(%color, position = %mv.position, "selector chose move");
                self.play(mv.position)?;
                Ok(Some(mv))
            }
            None => {
                self.pass()?;
                Ok(None)
            }
        }
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board_size: self.board.size(),
            cells: self.board.cells().to_vec(),
            current_player: self.current_player(),
            black_count: self.board.count_pieces(Color::Black),
            white_count: self.board.count_pieces(Color::White),
            black_passed: self.board.has_player_passed(Color::Black),
            white_passed: self.board.has_player_passed(Color::White),
            is_game_over: self.board.is_game_over(),
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    /// Final result, available once the game is over.
    pub fn to_game_result(&self) -> Option<GameResult> {
        self.board.outcome().map(|outcome| GameResult {
            outcome,
            black_count: self.board.count_pieces(Color::Black),
            white_count: self.board.count_pieces(Color::White),
        })
    }

    fn announce_game_over(&mut self) {
        if self.announced || !self.board.is_game_over() {
            return;
        }
        self.announced = true;
        debug!(outcome = ?self.board.outcome(), "game over");
        self.board.notify_game_over();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}
