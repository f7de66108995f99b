//! Search benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p classical_engine -- [depth]
//!
//! Runs the start position with pruning on, pruning off and a parallel root.

use chess_core::{Board, Color, SearchConfig};
use classical_engine::search_root;
use std::env;
use std::time::Instant;

fn main() {
    let depth: u8 = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(4);
    let base = SearchConfig::default().with_depth(depth);

    println!("=== Search Benchmark ===");
    println!("Depth: {depth}");
    println!();

    let variants = [
        ("alpha-beta", base),
        ("minimax", base.with_pruning(false)),
        ("alpha-beta, parallel root", base.with_parallel_root(true)),
    ];

    for (name, config) in variants {
        let mut board = Board::new();

        print!("{name:.<30}");

        let start = Instant::now();
        let outcome = search_root(&mut board, Color::White, &config);
        let elapsed = start.elapsed();

        let best = outcome
            .best_move
            .map_or_else(|| "none".to_string(), |m| m.to_string());
        println!(
            " {best} score {:>6} {:>10} nodes {:>8} cutoffs in {elapsed:>8.3?}",
            outcome.score, outcome.stats.nodes, outcome.stats.cutoffs
        );
    }
}
