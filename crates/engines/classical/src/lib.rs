//! Classical Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning, scored by the core's
//! material-plus-advancement evaluation.

mod search;

use chess_core::{Board, Color, Engine, MAX_SUPPORTED_DEPTH, SearchConfig, SearchResult};
use tracing::warn;

pub use search::{SearchOutcome, SearchStats, Searcher, search_root};

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Whole-board copies at every node instead of make/unmake
/// - Immediate king capture short-circuits the search
/// - Optional fan-out of root moves across the rayon pool
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    config: SearchConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &mut Board, side: Color) -> SearchResult {
        let outcome = search_root(board, side, &self.config);
        self.nodes = outcome.stats.nodes;

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: self.config.max_depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn author(&self) -> &str {
        "ML-chess"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if name.eq_ignore_ascii_case("depth") {
            match value.trim().parse::<u8>() {
                Ok(d) if (1..=MAX_SUPPORTED_DEPTH).contains(&d) => {
                    self.config.max_depth = d;
                    true
                }
                _ => {
                    warn!(value, "ignoring out-of-range Depth");
                    false
                }
            }
        } else if name.eq_ignore_ascii_case("pruning") {
            match value.trim().parse::<bool>() {
                Ok(on) => {
                    self.config.use_pruning = on;
                    true
                }
                Err(_) => {
                    warn!(value, "ignoring non-boolean Pruning");
                    false
                }
            }
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
