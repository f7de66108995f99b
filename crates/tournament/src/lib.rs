//! Match harness for the king-capture engines
//!
//! This crate provides infrastructure for:
//! - Playing engines against each other from the standard position
//! - Recording every game's moves and how it ended
//! - Saving match reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Classical search at depth 3 against a seeded random mover
//! cargo run -p tournament -- --engine1 classical --engine2 random:7 --games 20 --depth 3
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
