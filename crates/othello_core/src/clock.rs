//! Per-player play clock.
//!
//! Accumulates how long each side has spent on its turns. The clock is
//! bookkeeping for the presentation and save layers only; search depth is
//! never derived from it.

use std::time::{Duration, Instant};

use crate::types::Player;

#[derive(Debug, Clone, Default)]
pub struct GameClock {
    /// Time banked per player, indexed by `Player::idx()`
    elapsed: [Duration; 2],
    /// Player whose clock is running and when it started
    running: Option<(Player, Instant)>,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stopped clock preloaded with previously played time.
    pub fn with_elapsed(white: Duration, black: Duration) -> Self {
        Self {
            elapsed: [white, black],
            running: None,
        }
    }

    /// Start (or restart) the clock for `player`. Time already running for
    /// anyone is banked first.
    pub fn start(&mut self, player: Player) {
        self.stop();
        self.running = Some((player, Instant::now()));
    }

    /// Hand the running clock to `player`. Switching to the player already
    /// running is a no-op.
    pub fn switch_to(&mut self, player: Player) {
        if self.running() == Some(player) {
            return;
        }
        self.start(player);
    }

    /// Stop the clock, banking the running interval.
    pub fn stop(&mut self) {
        if let Some((player, since)) = self.running.take() {
            self.elapsed[player.idx()] += since.elapsed();
        }
    }

    pub fn running(&self) -> Option<Player> {
        self.running.map(|(p, _)| p)
    }

    /// Total time played by `player`, including the running interval.
    pub fn elapsed(&self, player: Player) -> Duration {
        let banked = self.elapsed[player.idx()];
        match self.running {
            Some((p, since)) if p == player => banked + since.elapsed(),
            _ => banked,
        }
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod clock_tests;
