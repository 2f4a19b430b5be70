//! Match runner for playing games between engines

use othello_core::{Engine, GameEngine, Outcome, Player, Turn};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// How one game ended, seen from White.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    /// White pawns minus Black pawns on the final board
    pub pawn_margin: i32,
    /// Turns skipped because the player to move had no legal move
    pub passes: u32,
    /// The game ended on an illegal move or an unjustified pass
    pub forfeit: bool,
}

impl GameRecord {
    fn flipped(self) -> Self {
        Self {
            result: self.result.flipped(),
            pawn_margin: -self.pawn_margin,
            ..self
        }
    }
}

/// Wins, losses and draws of engine1 over a match, plus board figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Sum over games of engine1's pawns minus engine2's at the end
    #[serde(default)]
    pub pawn_margin: i64,
    #[serde(default)]
    pub passes: u32,
    #[serde(default)]
    pub forfeits: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Mean final pawn margin per game in engine1's favour.
    pub fn average_margin(&self) -> f64 {
        match self.total_games() {
            0 => 0.0,
            n => self.pawn_margin as f64 / n as f64,
        }
    }

    fn record(&mut self, game: &GameRecord) {
        match game.result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.pawn_margin += i64::from(game.pawn_margin);
        self.passes += game.passes;
        self.forfeits += u32::from(game.forfeit);
    }
}

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            alternate_colors: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flipped()
            };
            result.record(&game);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                engine1_color = if engine1_white { "white" } else { "black" },
                result = ?game.result,
                margin = game.pawn_margin,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
        }

        result
    }

    /// Play a single game, returns the record from white's perspective
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameRecord {
        let mut game = GameEngine::new();
        let mut passes = 0;
        white.new_game();
        black.new_game();

        while let Some(player) = game.active_player() {
            let engine: &mut dyn Engine = match player {
                Player::White => &mut *white,
                Player::Black => &mut *black,
            };
            let result = engine.search(game.board(), player, self.config.depth);

            // The game engine only hands the turn to a player who can move,
            // so a pass or an illegal answer forfeits the game.
            let played = result.best_move.map(|mv| game.play_move(mv));
            match played {
                Some(Ok(Turn::Pass { .. })) => passes += 1,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!(engine = engine.name(), error = %e, "illegal move, game forfeited");
                    return forfeit(&game, player, passes);
                }
                None => {
                    warn!(engine = engine.name(), "passed with moves available, game forfeited");
                    return forfeit(&game, player, passes);
                }
            }
        }

        let result = match game.outcome() {
            Some(Outcome::Winner(Player::White)) => GameResult::Win,
            Some(Outcome::Winner(Player::Black)) => GameResult::Loss,
            _ => GameResult::Draw,
        };
        GameRecord {
            result,
            pawn_margin: white_margin(&game),
            passes,
            forfeit: false,
        }
    }
}

fn white_margin(game: &GameEngine) -> i32 {
    game.score(Player::White) as i32 - game.score(Player::Black) as i32
}

fn forfeit(game: &GameEngine, loser: Player, passes: u32) -> GameRecord {
    let result = match loser {
        Player::White => GameResult::Loss,
        Player::Black => GameResult::Win,
    };
    GameRecord {
        result,
        pawn_margin: white_margin(game),
        passes,
        forfeit: true,
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
