use crate::{board::Board, types::Color};

/// Pure perft node count.
/// Counts the leaves of the generated move tree `depth` plies below `board`,
/// with `color` to move first. A position with a captured king is a leaf.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.winner().is_some() {
        return 1;
    }

    let mut nodes = 0u64;
    for mv in board.candidate_moves(color) {
        let mut next = *board;
        next.make_move(mv.piece, mv.to);
        nodes += perft(&next, color.other(), depth - 1);
    }
    nodes
}
