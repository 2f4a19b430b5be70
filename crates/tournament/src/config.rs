//! Tournament configuration and engine selection

use std::path::Path;

use alphabeta_engine::AlphaBetaEngine;
use othello_core::Engine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

use crate::error::TournamentError;

/// Tournament configuration, loadable from TOML. Missing keys take their
/// default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    pub search_depth: u8,
    /// Swap colours every game
    pub alternate_colors: bool,
    /// Where to write JSON results, if anywhere
    pub results_path: Option<String>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            search_depth: 4,
            alternate_colors: true,
            results_path: None,
        }
    }
}

impl TournamentConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

/// Build an engine from a command-line spec: `alphabeta`, `random` or
/// `random:<seed>`.
pub fn create_engine(spec: &str) -> Result<Box<dyn Engine>, TournamentError> {
    let mut parts = spec.splitn(2, ':');
    let kind = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();

    match (kind.as_str(), arg) {
        ("alphabeta" | "ab", None) => Ok(Box::new(AlphaBetaEngine::new())),
        ("random", None) => Ok(Box::new(RandomEngine::new())),
        ("random", Some(seed)) => seed
            .parse()
            .map(|s| Box::new(RandomEngine::seeded(s)) as Box<dyn Engine>)
            .map_err(|_| TournamentError::UnknownEngine(spec.to_string())),
        _ => Err(TournamentError::UnknownEngine(spec.to_string())),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
