//! Move legality: the directional sandwich test and legal move enumeration.

use crate::board::Board;
use crate::types::*;

/// Walks from `pos` one step at a time along `dir` and reports whether the
/// walk crosses at least one opponent pawn and then lands on one of
/// `player`'s pawns before leaving the board.
pub fn captures_in_direction(board: &Board, pos: Position, player: Player, dir: (i8, i8)) -> bool {
    if dir == (0, 0) {
        return false;
    }
    let own = player.cell();
    let opponent = player.opponent().cell();

    let mut cur = pos.step(dir);
    let mut found_opponent = false;
    while let Some(cell) = board.cell(cur) {
        if cell == opponent {
            found_opponent = true;
            cur = cur.step(dir);
        } else {
            return cell == own && found_opponent;
        }
    }
    // walked off the edge
    false
}

/// Directions from `pos` along which a pawn of `player` would capture.
/// Empty when the square is occupied or off the board.
pub fn capture_directions(board: &Board, pos: Position, player: Player) -> Vec<(i8, i8)> {
    if board.cell(pos) != Some(Cell::Empty) {
        return Vec::new();
    }
    DIRECTIONS
        .iter()
        .copied()
        .filter(|&dir| captures_in_direction(board, pos, player, dir))
        .collect()
}

/// Whether `player` may place a pawn on `pos`.
pub fn is_legal(board: &Board, pos: Position, player: Player) -> bool {
    board.cell(pos) == Some(Cell::Empty)
        && DIRECTIONS
            .iter()
            .any(|&dir| captures_in_direction(board, pos, player, dir))
}

/// Every legal square for `player`, in row-major scan order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Position> {
    let mut moves = Vec::with_capacity(16);
    legal_moves_into(board, player, &mut moves);
    moves
}

/// Same as [`legal_moves`] but reuses the caller's buffer.
pub fn legal_moves_into(board: &Board, player: Player, moves: &mut Vec<Position>) {
    moves.clear();
    moves.extend(Position::all().filter(|&p| is_legal(board, p, player)));
}

/// Number of legal moves available to `player`.
pub fn mobility(board: &Board, player: Player) -> usize {
    Position::all().filter(|&p| is_legal(board, p, player)).count()
}

pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Position::all().any(|p| is_legal(board, p, player))
}

/// A board is terminal when neither side can move.
pub fn is_terminal(board: &Board) -> bool {
    board.is_full() || Player::ALL.iter().all(|&p| !has_legal_move(board, p))
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
