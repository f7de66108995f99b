//! Tournament CLI
//!
//! Play two engines against each other and optionally save the report.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chess_core::{Engine, SearchConfig};
use clap::Parser;
use classical_engine::ClassicalEngine;
use random_engine::RandomEngine;
use tournament::{MatchConfig, MatchRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Run a match between two engines under king-capture rules.
#[derive(Debug, Parser)]
#[command(name = "tournament", version, about)]
struct Cli {
    /// First engine: classical, random or random:<seed>.
    #[arg(long, default_value = "classical")]
    engine1: String,

    /// Second engine, same forms as --engine1.
    #[arg(long, default_value = "random")]
    engine2: String,

    /// Number of games to play.
    #[arg(short, long)]
    games: Option<u32>,

    /// Search depth for classical engines.
    #[arg(short, long)]
    depth: Option<u8>,

    /// Plies per game before it is scored as a draw.
    #[arg(long)]
    max_plies: Option<u32>,

    /// TOML match configuration; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the match report as JSON.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Suppress per-game progress lines.
    #[arg(short, long, default_value = "false")]
    quiet: bool,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "classical_engine=trace".
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn create_engine(spec: &str, search: SearchConfig) -> Result<Box<dyn Engine>> {
    let (kind, arg) = match spec.split_once(':') {
        Some((kind, arg)) => (kind, Some(arg)),
        None => (spec, None),
    };
    match (kind.to_lowercase().as_str(), arg) {
        ("classical" | "classic", None) => Ok(Box::new(ClassicalEngine::with_config(search))),
        ("random", None) => Ok(Box::new(RandomEngine::new())),
        ("random", Some(seed)) => {
            let seed = seed
                .parse()
                .with_context(|| format!("invalid random seed {seed:?}"))?;
            Ok(Box::new(RandomEngine::with_seed(seed)))
        }
        _ => bail!("unknown engine {spec:?} (expected classical, random or random:<seed>)"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if let Some(games) = cli.games {
        config.num_games = games;
    }
    if let Some(depth) = cli.depth {
        config.search.max_depth = depth;
    }
    if let Some(max_plies) = cli.max_plies {
        config.max_plies = max_plies;
    }
    if cli.quiet {
        config.verbose = false;
    }
    config.search.validate()?;

    let mut engine1 = create_engine(&cli.engine1, config.search)?;
    let mut engine2 = create_engine(&cli.engine2, config.search)?;

    println!("=== Match: {} vs {} ===", cli.engine1, cli.engine2);
    println!(
        "Games: {}, Depth: {}, Max plies: {}",
        config.num_games, config.search.max_depth, config.max_plies
    );
    println!();
    info!(engine1 = %cli.engine1, engine2 = %cli.engine2, "match started");

    let runner = MatchRunner::new(config);
    let mut report = runner.run_match(engine1.as_mut(), engine2.as_mut());
    report.engine1 = cli.engine1.clone();
    report.engine2 = cli.engine2.clone();

    println!();
    report.print_report();

    if let Some(path) = &cli.out {
        report.save(path)?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}
