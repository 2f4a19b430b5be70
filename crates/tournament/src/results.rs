//! Match results as JSON, and the text report printed after a run

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::TournamentConfig;
use crate::error::TournamentError;
use crate::match_runner::MatchResult;

/// Everything a run of the CLI produced, as written to the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResults {
    pub name: String,
    /// Engine names as given on the command line
    pub participants: Vec<String>,
    pub matches: Vec<MatchEntry>,
    pub config: TournamentConfig,
}

/// One pairing. `result` is from `engine1`'s side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TournamentError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Plain-text table: record, average final pawn margin, passes and
    /// forfeits for each pairing.
    pub fn generate_report(&self) -> String {
        let mut report = format!("=== Tournament: {} ===\n\n", self.name);
        report += &format!("Participants: {}\n", self.participants.join(", "));
        report += &format!(
            "{} games per match at depth {}{}\n\n",
            self.config.games_per_match,
            self.config.search_depth,
            if self.config.alternate_colors {
                ", colours alternating"
            } else {
                ""
            }
        );

        report += &format!(
            "{:<16} {:<16} {:>3} {:>3} {:>3} {:>8} {:>6} {:>8}\n",
            "Engine", "Opponent", "W", "L", "D", "Margin", "Passes", "Forfeits"
        );
        report += &"-".repeat(70);
        report.push('\n');

        for entry in &self.matches {
            let r = &entry.result;
            report += &format!(
                "{:<16} {:<16} {:>3} {:>3} {:>3} {:>+8.1} {:>6} {:>8}\n",
                entry.engine1,
                entry.engine2,
                r.wins,
                r.losses,
                r.draws,
                r.average_margin(),
                r.passes,
                r.forfeits
            );
        }

        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
