//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_core -- [depth]

use chess_core::{Board, Color, perft};
use std::env;
use std::time::{Duration, Instant};

/// Test positions in grid notation, White to move.
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr
         pppppppp
         ********
         ********
         ********
         ********
         PPPPPPPP
         RNBQKBNR",
    ),
    (
        "Open game",
        "r*bqk**r
         pppp*ppp
         **n**n**
         **b*p***
         **B*P***
         *****N**
         PPPP*PPP
         RNBQK**R",
    ),
    (
        "Castling rooks",
        "r***k**r
         pppppppp
         ********
         ********
         ********
         ********
         PPPPPPPP
         R***K**R",
    ),
];

fn main() {
    let depth: u8 = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, grid) in TEST_POSITIONS {
        let board: Board = match grid.parse() {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&board, Color::White, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)", nps(nodes, elapsed));
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}
