//! Random Move Chess Engine
//!
//! A simple engine that selects moves uniformly at random from all generated moves.
//! Useful for:
//! - Testing the match harness without paying for a search
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use chess_core::{Board, Color, Engine, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A chess engine that plays random moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all generated moves. Seeding it makes a whole match reproducible.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
            nodes: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            nodes: 0,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &mut Board, side: Color) -> SearchResult {
        self.nodes = 1;

        let best_move = if board.is_checkmated(side) {
            None
        } else {
            board.candidate_moves(side).choose(&mut self.rng).copied()
        };
        if let Some(mv) = best_move {
            board.make_move(mv.piece, mv.to);
        }

        SearchResult {
            best_move,
            score: board.black_advantage(),
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reseeded engines replay the same game from the start.
    fn new_game(&mut self) {
        self.nodes = 0;
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}
