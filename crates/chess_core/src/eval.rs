//! Static evaluation: material plus advancement, black minus white.

use crate::{board::Board, types::*};

/// Base values indexed by `PieceKind::idx()`: pawn, knight, bishop, rook, queen, king.
pub const PIECE_VALUES: [i32; 6] = [1, 3, 3, 5, 9, 100];

/// Multiplier applied to base values; advancement adds one point per rank.
pub const MATERIAL_SCALE: i32 = 100;

/// Score a color receives, in place of its material, once its king is captured.
pub const CHECKMATE_SCORE: i32 = -1_000_000;

/// Initial alpha-beta bound magnitude; wider than any reachable score.
pub const SEARCH_BOUND: i32 = 10_000_000;

impl Board {
    /// Black's score minus White's. Black maximises it, White minimises it.
    pub fn black_advantage(&self) -> i32 {
        self.side_score(Color::Black) - self.side_score(Color::White)
    }

    /// Material and advancement of one color, or [`CHECKMATE_SCORE`] if its king is gone.
    pub fn side_score(&self, color: Color) -> i32 {
        if self.is_checkmated(color) {
            return CHECKMATE_SCORE;
        }
        self.pieces(color)
            .iter()
            .filter(|p| p.alive)
            .map(|p| {
                let advancement = (p.square.y() - color.home_rank()).abs() as i32;
                MATERIAL_SCALE * PIECE_VALUES[p.kind.idx()] + advancement
            })
            .sum()
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
