//! Reversi on a hexagonal board stored in a square array.
//!
//! [`Board`] owns the cells, turn and pass state; the capture rule and move
//! enumeration are implemented on it in [`capture`] and [`moves`]. [`Game`]
//! sequences placements and passes and decides when the game ends.

use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod capture;
pub mod config;
pub mod error;
pub mod events;
pub mod game;
pub mod hex;
pub mod moves;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::GameConfig;
pub use error::{EngineError, Result};
pub use game::{Game, GameStatus, MoveSelector};
pub use types::{Color, Move, Outcome, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
