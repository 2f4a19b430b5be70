//! Minimax search with alpha-beta pruning
//!
//! Written as a pair of mutually recursive functions. `maximize` runs on
//! nodes where the searching player moves, `minimize` where the opponent
//! does; after a forced pass the same side can move twice in a row, so the
//! layer is chosen from the child's mover rather than by strict alternation.

use othello_core::{Board, Player, Position};
use tracing::debug;

use crate::eval::Evaluator;
use crate::node::SearchNode;

/// Upper bound passed to the root: no value can exceed it, so the root never
/// cuts.
const NO_UPPER_BOUND: i32 = i32::MAX;
const NO_LOWER_BOUND: i32 = i32::MIN;

/// Result of a search from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Chosen move, `None` when the root must pass or depth is 0
    pub best_move: Option<Position>,
    /// Value of the chosen line for the searching player
    pub score: i32,
    /// Nodes created during the search
    pub nodes: u64,
}

struct Search<'a, E: Evaluator> {
    evaluator: &'a E,
    for_player: Player,
    nodes: u64,
}

/// Searches `depth` plies ahead and returns the best move for `for_player`.
///
/// Moves are tried in row-major order and the first move reaching the best
/// value is kept, so results are deterministic.
pub fn best_move<E: Evaluator>(
    board: &Board,
    depth: u8,
    for_player: Player,
    evaluator: &E,
) -> SearchOutcome {
    let mut search = Search {
        evaluator,
        for_player,
        nodes: 1,
    };
    let root = SearchNode::root(*board, for_player);
    let (score, best_move) = search.maximize(&root, NO_UPPER_BOUND, depth);

    debug!(
        ?for_player,
        depth,
        nodes = search.nodes,
        score,
        best = ?best_move,
        "search finished"
    );
    SearchOutcome {
        best_move,
        score,
        nodes: search.nodes,
    }
}

impl<E: Evaluator> Search<'_, E> {
    fn leaf(&self, node: &SearchNode) -> (i32, Option<Position>) {
        (self.evaluator.evaluate(node, self.for_player), None)
    }

    fn expand(&mut self, node: &SearchNode, pos: Position) -> SearchNode {
        self.nodes += 1;
        match node.child(pos) {
            Ok(child) => child,
            // moves come from the node's own legal list
            Err(e) => unreachable!("legal move {pos} rejected: {e}"),
        }
    }

    /// Keeps the child with the strictly greatest value and stops as soon as
    /// that value exceeds `bound`, the best the minimizing caller already has.
    fn maximize(&mut self, node: &SearchNode, bound: i32, depth: u8) -> (i32, Option<Position>) {
        if depth == 0 || node.is_terminal() || node.moves().is_empty() {
            return self.leaf(node);
        }

        let mut best: Option<(i32, Position)> = None;
        for &pos in node.moves() {
            let child = self.expand(node, pos);
            let current = best.map_or(NO_LOWER_BOUND, |(v, _)| v);
            let value = if child.to_move() == self.for_player {
                // opponent passed: still our layer, still our caller's bound
                self.maximize(&child, bound, depth - 1).0
            } else {
                self.minimize(&child, current, depth - 1).0
            };
            if best.is_none() || value > current {
                best = Some((value, pos));
                if value > bound {
                    break;
                }
            }
        }
        best.map_or_else(|| self.leaf(node), |(v, p)| (v, Some(p)))
    }

    /// Mirror of [`Self::maximize`]: keeps the smallest value and stops once
    /// it falls below `bound`.
    fn minimize(&mut self, node: &SearchNode, bound: i32, depth: u8) -> (i32, Option<Position>) {
        if depth == 0 || node.is_terminal() || node.moves().is_empty() {
            return self.leaf(node);
        }

        let mut best: Option<(i32, Position)> = None;
        for &pos in node.moves() {
            let child = self.expand(node, pos);
            let current = best.map_or(NO_UPPER_BOUND, |(v, _)| v);
            let value = if child.to_move() == self.for_player {
                self.maximize(&child, current, depth - 1).0
            } else {
                self.minimize(&child, bound, depth - 1).0
            };
            if best.is_none() || value < current {
                best = Some((value, pos));
                if value < bound {
                    break;
                }
            }
        }
        best.map_or_else(|| self.leaf(node), |(v, p)| (v, Some(p)))
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
