//! Search tree nodes.

use othello_core::{apply_move, legal_moves, Board, GameError, Player, Position};

/// A board in the search tree, the player to move on it, and the mobility
/// figures the evaluator needs.
#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Board,
    to_move: Player,
    moves: Vec<Position>,
    /// Mobility of the player to move at the parent node
    previous_mobility: usize,
    terminal: bool,
}

impl SearchNode {
    /// The root of a search. There is no parent, so previous mobility is 0.
    pub fn root(board: Board, to_move: Player) -> Self {
        Self::new(board, to_move, 0)
    }

    fn new(board: Board, to_move: Player, previous_mobility: usize) -> Self {
        let moves = legal_moves(&board, to_move);
        let terminal = moves.is_empty() && legal_moves(&board, to_move.opponent()).is_empty();
        Self {
            board,
            to_move,
            moves,
            previous_mobility,
            terminal,
        }
    }

    /// The node reached by playing `pos`. The turn passes to the opponent
    /// unless the opponent has no move and the mover still does.
    pub fn child(&self, pos: Position) -> Result<SearchNode, GameError> {
        let board = apply_move(&self.board, pos, self.to_move)?;
        let opponent = self.to_move.opponent();
        let child = Self::new(board, opponent, self.mobility());
        if child.moves.is_empty() && !child.terminal {
            return Ok(Self::new(board, self.to_move, self.mobility()));
        }
        Ok(child)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Legal moves of the player to move, in row-major order.
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    pub fn mobility(&self) -> usize {
        self.moves.len()
    }

    /// Current mobility minus the mobility recorded at the parent.
    pub fn mobility_delta(&self) -> i32 {
        self.mobility() as i32 - self.previous_mobility as i32
    }

    /// Neither side has a legal move.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod node_tests;
