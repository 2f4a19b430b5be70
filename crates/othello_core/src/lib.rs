pub mod board;
pub mod clock;
pub mod encoding;
pub mod error;
pub mod executor;
pub mod game;
pub mod playable;
pub mod rules;
pub mod save;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::Board;
pub use clock::GameClock;
pub use encoding::*;
pub use error::GameError;
pub use executor::*;
pub use game::*;
pub use playable::*;
pub use rules::*;
pub use save::SavedGame;
pub use types::*;

// =============================================================================
// Engine trait implemented by every automated player
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None means pass)
    pub best_move: Option<Position>,
    /// Evaluation score from the searching player's perspective
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

impl SearchResult {
    /// A pass with no search behind it.
    pub fn pass(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            nodes: 0,
        }
    }
}

/// Trait that all automated players must implement.
///
/// Searches are blocking and run for as long as the depth requires; callers
/// that need a responsive thread move the engine elsewhere, hence `Send`.
pub trait Engine: Send {
    /// Choose a move for `to_move` on `board`, looking `depth` plies ahead.
    fn search(&mut self, board: &Board, to_move: Player, depth: u8) -> SearchResult;

    /// Returns the engine's name for reports
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "ArcOthello"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
