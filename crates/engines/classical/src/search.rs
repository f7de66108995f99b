//! Fixed-depth minimax with alpha-beta pruning over board copies.
//!
//! Scores are always black advantage: Black maximises, White minimises.
//! `lower` is the best score Black can already force elsewhere in the tree and
//! `upper` the best White can force; a node stops expanding once they cross.

use chess_core::{Board, Color, Move, SEARCH_BOUND, SearchConfig};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included.
    pub nodes: u64,
    /// Nodes that returned their board unchanged (depth limit, lost king, or no move).
    pub leaves: u64,
    /// Sibling loops stopped by crossed bounds.
    pub cutoffs: u64,
}

impl SearchStats {
    fn absorb(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
    }
}

/// What a root search committed and why.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// The move applied to the searched board, or `None` if the side had no move
    /// (or was already checkmated).
    pub best_move: Option<Move>,
    /// Final board of the predicted line.
    pub predicted: Board,
    /// `predicted.black_advantage()`.
    pub score: i32,
    pub stats: SearchStats,
}

pub struct Searcher {
    config: SearchConfig,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Applies the best move found for `side` to `board` and returns the
    /// predicted line's final board.
    ///
    /// `depth` counts plies already searched above this node; the node is a
    /// leaf once it reaches `max_depth` or `side` has lost its king. A side
    /// without any generated move is also treated as a leaf: nothing is
    /// applied and the board comes back unchanged.
    pub fn make_best_move(
        &mut self,
        board: &mut Board,
        side: Color,
        depth: u8,
        lower: i32,
        upper: i32,
    ) -> Board {
        match self.select(board, side, depth, lower, upper) {
            Some((mv, predicted)) => {
                board.make_move(mv.piece, mv.to);
                predicted
            }
            None => *board,
        }
    }

    fn select(
        &mut self,
        board: &Board,
        side: Color,
        depth: u8,
        mut lower: i32,
        mut upper: i32,
    ) -> Option<(Move, Board)> {
        self.stats.nodes += 1;
        if depth >= self.config.max_depth || board.is_checkmated(side) {
            self.stats.leaves += 1;
            return None;
        }

        let enemy = side.other();
        let mut best: Option<(Move, Board, i32)> = None;

        for mv in board.candidate_moves(side) {
            let mut child = *board;
            child.make_move(mv.piece, mv.to);

            // Taking the king ends the game; no deeper line can beat it.
            if child.is_checkmated(enemy) {
                trace!(%side, %mv, depth, "king capture");
                return Some((mv, child));
            }

            let predicted = self.make_best_move(&mut child, enemy, depth + 1, lower, upper);
            let score = predicted.black_advantage();

            let improves = match best {
                None => true,
                Some((_, _, best_score)) => side.prefers(score, best_score),
            };
            if improves {
                best = Some((mv, predicted, score));
            }

            if self.config.use_pruning {
                // `best` is always set here.
                let best_score = best.map_or(score, |(_, _, s)| s);
                match side {
                    Color::Black => lower = lower.max(best_score),
                    Color::White => upper = upper.min(best_score),
                }
                if lower >= upper {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        match best {
            Some((mv, predicted, _)) => Some((mv, predicted)),
            None => {
                self.stats.leaves += 1;
                None
            }
        }
    }

    /// Root search with every candidate on its own rayon task.
    ///
    /// Each task gets a fresh board copy and the full initial bounds, and the
    /// results are merged in candidate order with the serial rule, so the
    /// chosen move is the one a serial search picks.
    fn select_parallel(&mut self, board: &Board, side: Color) -> Option<(Move, Board)> {
        self.stats.nodes += 1;
        if self.config.max_depth == 0 || board.is_checkmated(side) {
            self.stats.leaves += 1;
            return None;
        }

        let enemy = side.other();
        let moves = board.candidate_moves(side);

        // The root window never closes, so the serial loop always reaches the
        // first king capture.
        for &mv in &moves {
            let mut child = *board;
            child.make_move(mv.piece, mv.to);
            if child.is_checkmated(enemy) {
                trace!(%side, %mv, "king capture at root");
                return Some((mv, child));
            }
        }

        let config = self.config;
        let results: Vec<(Move, Board, SearchStats)> = moves
            .par_iter()
            .map(|&mv| {
                let mut child = *board;
                child.make_move(mv.piece, mv.to);
                let mut worker = Searcher::new(config);
                let predicted =
                    worker.make_best_move(&mut child, enemy, 1, -SEARCH_BOUND, SEARCH_BOUND);
                (mv, predicted, worker.stats)
            })
            .collect();

        let mut best: Option<(Move, Board, i32)> = None;
        for (mv, predicted, stats) in results {
            self.stats.absorb(stats);
            let score = predicted.black_advantage();
            let improves = match best {
                None => true,
                Some((_, _, best_score)) => side.prefers(score, best_score),
            };
            if improves {
                best = Some((mv, predicted, score));
            }
        }

        match best {
            Some((mv, predicted, _)) => Some((mv, predicted)),
            None => {
                self.stats.leaves += 1;
                None
            }
        }
    }
}

/// Searches `board` for `side`, commits the chosen move and reports it.
pub fn search_root(board: &mut Board, side: Color, config: &SearchConfig) -> SearchOutcome {
    let mut searcher = Searcher::new(*config);
    let chosen = if config.parallel_root {
        searcher.select_parallel(board, side)
    } else {
        searcher.select(board, side, 0, -SEARCH_BOUND, SEARCH_BOUND)
    };

    let (best_move, predicted) = match chosen {
        Some((mv, predicted)) => {
            board.make_move(mv.piece, mv.to);
            (Some(mv), predicted)
        }
        None => (None, *board),
    };
    let score = predicted.black_advantage();
    let stats = searcher.stats();

    debug!(
        %side,
        depth = config.max_depth,
        best = ?best_move.map(|m| m.to_string()),
        score,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "search finished"
    );

    SearchOutcome {
        best_move,
        predicted,
        score,
        stats,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
