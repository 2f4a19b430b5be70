//! Applying a placement: set the square, flip every captured run.

use tracing::trace;

use crate::board::Board;
use crate::error::GameError;
use crate::rules::captures_in_direction;
use crate::types::*;

/// Opponent pawns that a placement by `player` on `pos` would flip, grouped
/// direction by direction in `DIRECTIONS` order.
pub fn flips(board: &Board, pos: Position, player: Player) -> Vec<Position> {
    let opponent = player.opponent().cell();
    let mut flipped = Vec::new();

    for dir in DIRECTIONS {
        if !captures_in_direction(board, pos, player, dir) {
            continue;
        }
        let mut cur = pos.step(dir);
        while board.cell(cur) == Some(opponent) {
            flipped.push(cur);
            cur = cur.step(dir);
        }
    }
    flipped
}

/// Play `player` on `pos` and return the resulting board. The input board
/// is not modified.
pub fn apply_move(board: &Board, pos: Position, player: Player) -> Result<Board, GameError> {
    apply_move_with_flips(board, pos, player).map(|(next, _)| next)
}

/// Like [`apply_move`], also returning the squares that changed owner.
pub fn apply_move_with_flips(
    board: &Board,
    pos: Position,
    player: Player,
) -> Result<(Board, Vec<Position>), GameError> {
    let cell = board.get(pos)?;
    let flipped = if cell.is_empty() {
        flips(board, pos, player)
    } else {
        Vec::new()
    };
    if flipped.is_empty() {
        return Err(GameError::IllegalMove {
            col: pos.col,
            row: pos.row,
            player,
        });
    }

    let mut next = *board;
    next.put(pos, player.cell());
    for &sq in &flipped {
        next.put(sq, player.cell());
    }
    trace!(%pos, ?player, flipped = flipped.len(), "applied move");
    Ok((next, flipped))
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod executor_tests;
