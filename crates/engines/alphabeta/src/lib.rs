//! Alpha-Beta Othello Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over the 9x7 board, scoring
//! leaves with pawn count, mobility and corner control.

mod eval;
mod node;
mod search;

use othello_core::{Board, Engine, Player, SearchResult};

pub use eval::{Evaluator, Heuristic, CORNER_WEIGHT, LOSS_SCORE, MOBILITY_WEIGHT, WIN_SCORE};
pub use node::SearchNode;
pub use search::{best_move, SearchOutcome};

/// Othello engine using alpha-beta minimax.
///
/// This engine uses:
/// - Maximize/minimize alpha-beta search, no iterative deepening
/// - Row-major move ordering with first-found tie-breaking
/// - A pluggable evaluator, [`Heuristic`] by default
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaEngine<E = Heuristic> {
    evaluator: E,
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self::with_evaluator(Heuristic)
    }
}

impl<E: Evaluator> AlphaBetaEngine<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }

    /// Nodes created by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl<E: Evaluator + Send> Engine for AlphaBetaEngine<E> {
    fn search(&mut self, board: &Board, to_move: Player, depth: u8) -> SearchResult {
        let outcome = best_move(board, depth, to_move, &self.evaluator);
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth,
            nodes: outcome.nodes,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
