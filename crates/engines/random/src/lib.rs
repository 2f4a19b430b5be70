//! Random Move Othello Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (the alpha-beta engine should easily beat this)
//! - Stress testing move generation over many complete games

use othello_core::{legal_moves, Board, Engine, Player, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An Othello engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves, or passes when there is none.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, to_move: Player, _depth: u8) -> SearchResult {
        let moves = legal_moves(board, to_move);
        self.nodes = 1;

        let Some(&best_move) = moves.choose(&mut self.rng) else {
            return SearchResult::pass(1);
        };

        SearchResult {
            best_move: Some(best_move),
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
