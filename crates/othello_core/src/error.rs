use thiserror::Error;

use crate::types::Player;

/// Failures surfaced by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A coordinate outside the 9x7 grid. Indicates a caller bug.
    #[error("position ({col}, {row}) is outside the board")]
    OutOfBounds { col: i8, row: i8 },

    /// The placement fails the sandwich test for this player.
    #[error("{player:?} cannot play at ({col}, {row})")]
    IllegalMove { col: i8, row: i8, player: Player },

    #[error("the game is already over")]
    GameOver,

    /// A cell listing or grid that does not describe a valid board.
    #[error("malformed save data: {0}")]
    MalformedSaveData(String),
}
