//! Saved-game record.
//!
//! Holds everything needed to resume a game. It derives serde so the
//! persistence layer can choose any format; this crate writes no files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::clock::GameClock;
use crate::encoding::CellRecord;
use crate::error::GameError;
use crate::game::GameEngine;
use crate::types::Player;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// Whether the automated player was enabled
    pub ai_enabled: bool,
    pub active_player: Player,
    pub elapsed_white_secs: u64,
    pub elapsed_black_secs: u64,
    /// Every cell of the board
    pub cells: Vec<CellRecord>,
}

impl SavedGame {
    pub fn capture(game: &GameEngine, clock: &GameClock, ai_enabled: bool) -> Self {
        Self {
            ai_enabled,
            active_player: game.last_active(),
            elapsed_white_secs: clock.elapsed(Player::White).as_secs(),
            elapsed_black_secs: clock.elapsed(Player::Black).as_secs(),
            cells: game.board().cell_listing(),
        }
    }

    /// Rebuild the game and a stopped clock. The caller decides when to start
    /// the clock again.
    pub fn restore(&self) -> Result<(GameEngine, GameClock), GameError> {
        let board = Board::from_cell_listing(&self.cells)?;
        let game = GameEngine::resume(board, self.active_player);
        let clock = GameClock::with_elapsed(
            Duration::from_secs(self.elapsed_white_secs),
            Duration::from_secs(self.elapsed_black_secs),
        );
        Ok((game, clock))
    }
}

#[cfg(test)]
#[path = "save_tests.rs"]
mod save_tests;
