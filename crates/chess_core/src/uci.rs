use tracing::warn;

use crate::{board::Board, error::ChessError, types::*};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = mv.to_string();
    if mv.is_promotion() {
        s.push('q');
    }
    s
}

/// Resolves coordinate text against the moves `side` can actually make.
///
/// Pawns only ever promote to a queen, so a promotion suffix other than `q`
/// matches nothing.
pub fn parse_uci_move(board: &Board, side: Color, txt: &str) -> Option<Move> {
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return None;
    }
    let from: Square = txt[0..2].parse().ok()?;
    let to: Square = txt[2..4].parse().ok()?;
    let promo = txt[4..].chars().next().map(|c| c.to_ascii_lowercase());

    let mv = board
        .candidate_moves(side)
        .into_iter()
        .find(|m| m.from == from && m.to == to)?;
    match promo {
        None => Some(mv),
        Some('q') if mv.is_promotion() => Some(mv),
        Some(_) => None,
    }
}

/// Applies `position startpos [moves ...]` arguments and returns the side to move.
///
/// FEN positions are rejected; a move that does not parse stops the replay
/// with an error and leaves the board at the last applied move.
pub fn set_position_from_uci(board: &mut Board, args: &[&str]) -> Result<Color, ChessError> {
    board.reset();
    let mut side = Color::White;

    let rest = match args.first() {
        None => return Ok(side),
        Some(&"startpos") => &args[1..],
        Some(&"fen") => return Err(ChessError::Unsupported("FEN positions".to_string())),
        Some(other) => {
            return Err(ChessError::Unsupported(format!("position {other}")));
        }
    };

    if let Some((&"moves", moves)) = rest.split_first() {
        for &txt in moves {
            let Some(mv) = parse_uci_move(board, side, txt) else {
                warn!(%side, mv = txt, "rejected move in position command");
                return Err(ChessError::Unsupported(format!("move {txt} for {side}")));
            };
            board.make_move(mv.piece, mv.to);
            side = side.other();
        }
    }
    Ok(side)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
