//! Browser-facing session handle.
//!
//! Coordinates are centered `(q, r)` pairs, the same convention as
//! [`Position`]. Structured values cross the boundary through
//! `serde-wasm-bindgen`.

use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::ai::Strategy;
use crate::config::GameConfig;
use crate::game::Game;
use crate::types::Position;

#[wasm_bindgen]
pub struct HexReversi {
    game: Game,
}

#[wasm_bindgen]
impl HexReversi {
    #[wasm_bindgen(constructor)]
    pub fn new(board_size: usize) -> Result<HexReversi, JsError> {
        let config = GameConfig::with_board_size(board_size)?;
        Ok(Self::start(&config)?)
    }

    /// Builds a game from a `{ board_size }` object; `undefined` uses defaults.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config: JsValue) -> Result<HexReversi, JsError> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self::start(&config)?)
    }

    #[wasm_bindgen(js_name = boardSize)]
    pub fn board_size(&self) -> usize {
        self.game.board().size()
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_state())?)
    }

    /// `null` while the game is running.
    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_result())?)
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.legal_moves()?)?)
    }

    #[wasm_bindgen(js_name = mustPass)]
    pub fn must_pass(&self) -> Result<bool, JsError> {
        Ok(self.game.must_pass()?)
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Plays `(q, r)` for the player to move; returns the number of flipped pieces.
    pub fn place(&mut self, q: i32, r: i32) -> Result<usize, JsError> {
        Ok(self.game.play(Position::new(q, r))?)
    }

    pub fn pass(&mut self) -> Result<(), JsError> {
        Ok(self.game.pass()?)
    }

    /// Plays for the current player with `"capture"` or `"corner"`. Returns
    /// the chosen move, or `null` when the player had to pass.
    #[wasm_bindgen(js_name = aiMove)]
    pub fn ai_move(&mut self, strategy: &str) -> Result<JsValue, JsError> {
        let strategy: Strategy = strategy.parse()?;
        let played = self.game.play_selected(&strategy)?;
        Ok(serde_wasm_bindgen::to_value(&played)?)
    }

    /// Text rendering of the board, one hexagon row per line.
    pub fn render(&self) -> String {
        self.game.board().to_string()
    }
}

impl HexReversi {
    fn start(config: &GameConfig) -> crate::error::Result<Self> {
        let game = Game::from_config(config)?;
        debug!(board_size = config.board_size, "started session");
        Ok(Self { game })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }
}
