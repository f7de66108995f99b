pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod uci;
pub mod validity_map;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use config::*;
pub use error::ChessError;
pub use eval::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;
pub use uci::*;
pub use validity_map::ValidityMap;

// =============================================================================
// Engine trait: implemented by every engine (classical, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The move that was committed (None if the side had no generated move)
    pub best_move: Option<Move>,
    /// Black advantage of the predicted line's final board
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
///
/// Engines play by mutating the board they are handed: on return the chosen
/// move has been applied, which front ends rely on to keep a single board.
pub trait Engine: Send {
    /// Picks a move for `side` and applies it to `board`.
    fn search(&mut self, board: &mut Board, side: Color) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
