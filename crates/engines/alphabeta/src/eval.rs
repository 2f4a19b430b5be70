//! Heuristic position evaluation.

use othello_core::Player;

use crate::node::SearchNode;

/// Weight of one unit of mobility change relative to one pawn.
pub const MOBILITY_WEIGHT: i32 = 5;
/// Weight of one corner relative to one pawn.
pub const CORNER_WEIGHT: i32 = 200;
/// Score of a finished game won by the evaluating player.
pub const WIN_SCORE: i32 = i32::MAX;
/// Score of a finished game lost by the evaluating player.
pub const LOSS_SCORE: i32 = i32::MIN;

/// Scores search nodes for the alpha-beta search.
///
/// Larger is better for `for_player`.
pub trait Evaluator {
    fn evaluate(&self, node: &SearchNode, for_player: Player) -> i32;
}

/// Pawn count, mobility and corner control.
///
/// `pawns + 5 * mobility + 200 * corners`, each term taken as
/// "own minus opponent" for `for_player`. The mobility term is the change in
/// mobility seen by the player to move; it counts against `for_player` when
/// the opponent is the one to move.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Evaluator for Heuristic {
    fn evaluate(&self, node: &SearchNode, for_player: Player) -> i32 {
        let board = node.board();
        let opponent = for_player.opponent();

        let pawns = board.score(for_player) as i32 - board.score(opponent) as i32;

        if node.is_terminal() {
            // The game is decided by the final pawn count
            return match pawns.signum() {
                1 => WIN_SCORE,
                -1 => LOSS_SCORE,
                _ => 0,
            };
        }

        let mobility = if node.to_move() == for_player {
            node.mobility_delta()
        } else {
            -node.mobility_delta()
        };
        let corners = board.corners(for_player) as i32 - board.corners(opponent) as i32;

        pawns + MOBILITY_WEIGHT * mobility + CORNER_WEIGHT * corners
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
