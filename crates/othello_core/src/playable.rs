//! Narrow facade for presentation layers.
//!
//! Everything crossing this boundary uses plain integers: cells use the
//! encoding from [`crate::encoding`], coordinates are `(column, row)` and the
//! pass move is `(-1, -1)`. Rule violations come back as `false` rather than
//! errors so a UI can simply refuse the click.

use tracing::warn;

use crate::board::Board;
use crate::encoding::Grid;
use crate::game::GameEngine;
use crate::rules::is_legal;
use crate::types::{Player, Position};
use crate::Engine;

/// Coordinates returned when the automated player has to pass.
pub const PASS_COORDS: (i32, i32) = (-1, -1);

/// A game in progress plus the engine that plays automated turns.
pub struct PlayableBoard {
    game: GameEngine,
    engine: Box<dyn Engine>,
}

impl PlayableBoard {
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self::with_game(GameEngine::new(), engine)
    }

    /// Wrap an existing game, e.g. one restored from a save.
    pub fn with_game(game: GameEngine, engine: Box<dyn Engine>) -> Self {
        Self { game, engine }
    }

    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Start over from the initial layout.
    pub fn reset(&mut self) {
        self.game = GameEngine::new();
        self.engine.new_game();
    }

    pub fn get_board(&self) -> Grid {
        self.game.board().to_grid()
    }

    /// Whether the given side could place a pawn on `(col, row)` right now,
    /// regardless of whose turn it is.
    pub fn is_playable(&self, col: i32, row: i32, is_white: bool) -> bool {
        Position::from_coords(col, row).is_some_and(|pos| {
            is_legal(self.game.board(), pos, Player::from_is_white(is_white))
        })
    }

    /// Play for the given side. Refused when it is not that side's turn, the
    /// square is not legal, or the game is over.
    pub fn play_move(&mut self, col: i32, row: i32, is_white: bool) -> bool {
        let Some(pos) = Position::from_coords(col, row) else {
            warn!(col, row, "move outside the board refused");
            return false;
        };
        if self.game.active_player() != Some(Player::from_is_white(is_white)) {
            return false;
        }
        self.game.play_move(pos).is_ok()
    }

    /// Ask the engine for a move on an arbitrary grid.
    pub fn get_next_move(&mut self, grid: &Grid, depth: u8, white_turn: bool) -> (i32, i32) {
        let board = match Board::from_grid(grid) {
            Ok(b) => b,
            Err(e) => {
                warn!(error = %e, "cannot search an invalid grid");
                return PASS_COORDS;
            }
        };
        let result = self
            .engine
            .search(&board, Player::from_is_white(white_turn), depth);
        result
            .best_move
            .map_or(PASS_COORDS, |p| (p.col as i32, p.row as i32))
    }

    pub fn white_score(&self) -> usize {
        self.game.score(Player::White)
    }

    pub fn black_score(&self) -> usize {
        self.game.score(Player::Black)
    }
}

#[cfg(test)]
#[path = "playable_tests.rs"]
mod playable_tests;
