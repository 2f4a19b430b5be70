//! Tournament CLI
//!
//! Run matches between Othello engines.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tournament::{
    create_engine, MatchConfig, MatchRunner, TournamentConfig, TournamentError, TournamentResults,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ArcOthello Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D] [--config FILE] [--out FILE]");
    println!();
    println!("Engines:");
    println!("  alphabeta     - Alpha-beta with pawn/mobility/corner eval");
    println!("  random        - Uniformly random legal moves");
    println!("  random:SEED   - Reproducible random moves");
    println!();
    println!("Examples:");
    println!("  tournament match alphabeta random --games 20 --depth 4");
    println!("  tournament match alphabeta random:7 --config tournament.toml");
}

fn run_match(args: &[String]) -> Result<(), TournamentError> {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return Ok(());
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    // Parse optional arguments. A config file sets the baseline, explicit
    // flags override it.
    let mut config = TournamentConfig::default();
    let mut games: Option<u32> = None;
    let mut depth: Option<u8> = None;
    let mut out: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--games" | "-g", Some(v)) => {
                games = v.parse().ok();
                i += 1;
            }
            ("--depth" | "-d", Some(v)) => {
                depth = v.parse().ok();
                i += 1;
            }
            ("--config" | "-c", Some(v)) => {
                config = TournamentConfig::load(Path::new(v))?;
                i += 1;
            }
            ("--out" | "-o", Some(v)) => {
                out = Some(PathBuf::from(v));
                i += 1;
            }
            (other, _) => eprintln!("Ignoring argument: {}", other),
        }
        i += 1;
    }
    if let Some(g) = games {
        config.games_per_match = g;
    }
    if let Some(d) = depth {
        config.search_depth = d;
    }
    let out = out.or_else(|| config.results_path.as_ref().map(PathBuf::from));

    let mut engine1 = create_engine(engine1_spec)?;
    let mut engine2 = create_engine(engine2_spec)?;

    info!(
        engine1 = %engine1_spec,
        engine2 = %engine2_spec,
        games = config.games_per_match,
        depth = config.search_depth,
        "starting match"
    );

    let runner = MatchRunner::new(MatchConfig {
        num_games: config.games_per_match,
        depth: config.search_depth,
        alternate_colors: config.alternate_colors,
    });
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    println!(
        "Average pawn margin: {:+.1}, passes: {}, forfeits: {}",
        result.average_margin(),
        result.passes,
        result.forfeits
    );

    let mut results = TournamentResults::new(
        &format!("{} vs {}", engine1_spec, engine2_spec),
        vec![engine1_spec.clone(), engine2_spec.clone()],
        config,
    );
    results.add_match(engine1_spec, engine2_spec, result);
    println!("{}", results.generate_report());

    if let Some(path) = out {
        results.save(&path)?;
        info!(path = %path.display(), "results saved");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let outcome = match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "tournament failed");
            ExitCode::FAILURE
        }
    }
}
