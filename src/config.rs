use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub const DEFAULT_BOARD_SIZE: usize = 7;
pub const MIN_BOARD_SIZE: usize = 5;

/// Settings for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the square backing array; the hexagon's diameter in cells.
    pub board_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl GameConfig {
    pub fn with_board_size(board_size: usize) -> Result<Self> {
        let config = Self { board_size };
        config.validate()?;
        Ok(config)
    }

    /// A hexagon needs an odd side count of at least 5 cells.
    pub fn validate(&self) -> Result<()> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size % 2 == 0 {
            return Err(EngineError::InvalidConfiguration {
                size: self.board_size,
            });
        }
        Ok(())
    }
}
