//! Command-line front end: a UCI engine by default, or a terminal game.

mod play;
mod uci;

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_core::SearchConfig;
use clap::{Parser, Subcommand};
use classical_engine::ClassicalEngine;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chess", version, about)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Search depth in plies (1-8).
    #[arg(short, long, global = true)]
    depth: Option<u8>,

    /// Disable alpha-beta cutoffs.
    #[arg(long, global = true, default_value = "false")]
    no_pruning: bool,

    /// Search root moves in parallel.
    #[arg(long, global = true, default_value = "false")]
    parallel: bool,

    /// TOML search configuration; flags override its values.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter (overrides RUST_LOG). Logs go to stderr.
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Mode {
    /// Speak UCI on stdin/stdout (the default).
    Uci,
    /// Play White against the engine.
    Play,
}

fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn search_config(cli: &Cli) -> Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(depth) = cli.depth {
        config.max_depth = depth;
    }
    if cli.no_pruning {
        config.use_pruning = false;
    }
    if cli.parallel {
        config.parallel_root = true;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref())?;

    let config = search_config(&cli)?;
    debug!(?config, "search configuration");
    let mut engine = ClassicalEngine::with_config(config);

    let stdin = io::stdin();
    let mut stdout = BufWriter::new(io::stdout().lock());
    match cli.mode.unwrap_or(Mode::Uci) {
        Mode::Uci => uci::run_uci(&mut engine, config, stdin.lock(), &mut stdout),
        Mode::Play => play::run_play(&mut engine, stdin.lock(), &mut stdout),
    }
}
