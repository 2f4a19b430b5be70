//! Tournament Runner for ArcOthello
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Loading match settings from TOML
//! - Saving results as JSON and printing reports
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta against the random baseline
//! cargo run -p tournament -- match alphabeta random --games 20 --depth 3
//!
//! # Settings from a file, results written to disk
//! cargo run -p tournament -- match alphabeta random:7 --config tournament.toml --out results.json
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
