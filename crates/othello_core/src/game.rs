//! Turn state machine for interactive play.

use tracing::{debug, info};

use crate::board::Board;
use crate::error::GameError;
use crate::executor::apply_move_with_flips;
use crate::rules::{has_legal_move, is_legal, legal_moves};
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    ActiveTurn(Player),
    GameOver(Outcome),
}

/// Final result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// What happened to the turn after a move was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// The opponent is to move.
    Next(Player),
    /// The opponent had no legal move and was skipped; the mover plays again.
    Pass { skipped: Player },
    /// Neither side can move.
    GameOver(Outcome),
}

/// Owns the board of a game in progress and the player to move.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    to_move: Player,
    over: bool,
}

impl GameEngine {
    /// A fresh game, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            to_move: Player::White,
            over: false,
        }
    }

    /// Rebuild a game from a stored board and the player recorded as active.
    ///
    /// If that player has no move but the opponent does, the turn is handed
    /// over; if neither can move the game is over.
    pub fn resume(board: Board, to_move: Player) -> Self {
        let mut game = Self {
            board,
            to_move,
            over: false,
        };
        if !has_legal_move(&board, to_move) {
            if has_legal_move(&board, to_move.opponent()) {
                game.to_move = to_move.opponent();
            } else {
                game.over = true;
            }
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome() {
            Some(outcome) => GameStatus::GameOver(outcome),
            None => GameStatus::ActiveTurn(self.to_move),
        }
    }

    /// The player to move, `None` once the game is over.
    pub fn active_player(&self) -> Option<Player> {
        (!self.over).then_some(self.to_move)
    }

    /// The player who held the turn last. Stays defined after game over so
    /// a finished game can still be saved.
    pub fn last_active(&self) -> Player {
        self.to_move
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn is_legal(&self, pos: Position) -> bool {
        !self.over && is_legal(&self.board, pos, self.to_move)
    }

    /// Legal squares for the player to move.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.over {
            return Vec::new();
        }
        legal_moves(&self.board, self.to_move)
    }

    /// Play the active player on `pos` and advance the turn.
    pub fn play_move(&mut self, pos: Position) -> Result<Turn, GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }
        let mover = self.to_move;
        if !is_legal(&self.board, pos, mover) {
            return Err(GameError::IllegalMove {
                col: pos.col,
                row: pos.row,
                player: mover,
            });
        }

        let (board, flipped) = apply_move_with_flips(&self.board, pos, mover)?;
        self.board = board;
        debug!(?mover, %pos, flipped = flipped.len(), "move played");

        let next = mover.opponent();
        if has_legal_move(&self.board, next) {
            self.to_move = next;
            return Ok(Turn::Next(next));
        }
        if has_legal_move(&self.board, mover) {
            info!(skipped = ?next, "no legal move, turn passes back");
            return Ok(Turn::Pass { skipped: next });
        }

        self.over = true;
        let outcome = self.final_outcome();
        info!(
            ?outcome,
            white = self.score(Player::White),
            black = self.score(Player::Black),
            "game over"
        );
        Ok(Turn::GameOver(outcome))
    }

    /// Pawns owned by `player`.
    pub fn score(&self, player: Player) -> usize {
        self.board.score(player)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.over.then(|| self.final_outcome())
    }

    fn final_outcome(&self) -> Outcome {
        let white = self.score(Player::White);
        let black = self.score(Player::Black);
        match white.cmp(&black) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::White),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Black),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
