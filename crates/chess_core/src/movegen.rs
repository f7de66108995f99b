//! Per-piece move generation.
//!
//! There is no check-legality filter: a move that leaves the mover's own king
//! capturable is generated like any other, and the game ends when a king is
//! actually taken.

use crate::{board::Board, types::*, validity_map::ValidityMap};

/// The two modes of the single generation function.
///
/// `AttacksOnly` drops quiet pawn advances and castling. Attack maps are built
/// in this mode, which is what keeps castling generation (which needs the
/// opponent's attack map) from recursing forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenMode {
    Full,
    AttacksOnly,
}

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

impl Board {
    /// Destination squares for one piece.
    ///
    /// Panics if the piece has been captured.
    pub fn find_valid_moves(&self, id: PieceId, mode: GenMode) -> ValidityMap {
        let p = self.piece(id);
        assert!(p.alive, "requested moves for captured piece {id:?}");

        let mut map = ValidityMap::EMPTY;
        match p.kind {
            PieceKind::Pawn => self.pawn_moves(p, mode, &mut map),
            PieceKind::Knight => self.step_moves(p, &KNIGHT_DELTAS, &mut map),
            PieceKind::Bishop => self.ray_moves(p, &DIAGONALS, &mut map),
            PieceKind::Rook => self.ray_moves(p, &ORTHOGONALS, &mut map),
            PieceKind::Queen => self.ray_moves(p, &ALL_DIRECTIONS, &mut map),
            PieceKind::King => {
                self.step_moves(p, &ALL_DIRECTIONS, &mut map);
                if mode == GenMode::Full {
                    self.castling_moves(p, &mut map);
                }
            }
        }
        map
    }

    /// Union of the capture-only maps of every live piece of `color`.
    pub fn attack_map(&self, color: Color) -> ValidityMap {
        let mut map = ValidityMap::EMPTY;
        for id in self.live_pieces(color) {
            map |= self.find_valid_moves(id, GenMode::AttacksOnly);
        }
        map
    }

    /// Every generated move of `color` in search order: slot order, then
    /// destinations file by file.
    pub fn candidate_moves(&self, color: Color) -> Vec<Move> {
        let mut out = Vec::with_capacity(48);
        for id in self.live_pieces(color) {
            let p = self.piece(id);
            for to in self.find_valid_moves(id, GenMode::Full).squares() {
                out.push(Move {
                    piece: id,
                    kind: p.kind,
                    from: p.square,
                    to,
                });
            }
        }
        out
    }

    fn is_enemy(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some(id) if id.color != color)
    }

    fn pawn_moves(&self, p: &Piece, mode: GenMode, map: &mut ValidityMap) {
        let step = p.color.forward();

        if mode == GenMode::Full
            && let Some(one) = p.square.offset(0, step)
            && self.is_empty(one)
        {
            map.set(one);
            if !p.moved
                && let Some(two) = p.square.offset(0, 2 * step)
                && self.is_empty(two)
            {
                map.set(two);
            }
        }

        for dx in [1, -1] {
            if let Some(to) = p.square.offset(dx, step)
                && self.is_enemy(to, p.color)
            {
                map.set(to);
            }
        }

        self.en_passant_moves(p, map);
    }

    /// Diagonal targets whose square behind holds an enemy pawn that just
    /// advanced two squares. Generated in both modes since it is a capture.
    fn en_passant_moves(&self, pawn: &Piece, map: &mut ValidityMap) {
        let step = pawn.color.forward();
        for dx in [1, -1] {
            let Some(to) = pawn.square.offset(dx, step) else {
                continue;
            };
            let Some(beside) = pawn.square.offset(dx, 0) else {
                continue;
            };
            if let Some(id) = self.piece_at(beside) {
                let enemy = self.piece(id);
                if enemy.color != pawn.color && enemy.kind == PieceKind::Pawn && enemy.double_move {
                    map.set(to);
                }
            }
        }
    }

    /// Fixed-offset moves (knight jumps, king steps) onto empty or enemy squares.
    fn step_moves(&self, p: &Piece, deltas: &[(i8, i8)], map: &mut ValidityMap) {
        for &(dx, dy) in deltas {
            if let Some(to) = p.square.offset(dx, dy) {
                match self.piece_at(to) {
                    None => map.set(to),
                    Some(id) if id.color != p.color => map.set(to),
                    _ => {}
                }
            }
        }
    }

    fn ray_moves(&self, p: &Piece, dirs: &[(i8, i8)], map: &mut ValidityMap) {
        for &(dx, dy) in dirs {
            let mut cur = p.square;
            while let Some(to) = cur.offset(dx, dy) {
                match self.piece_at(to) {
                    None => map.set(to),
                    Some(id) => {
                        if id.color != p.color {
                            map.set(to);
                        }
                        break;
                    }
                }
                cur = to;
            }
        }
    }

    fn castling_moves(&self, king: &Piece, map: &mut ValidityMap) {
        if king.moved {
            return;
        }
        let y = king.color.home_rank();
        assert!(
            king.square == Square::at(4, y),
            "unmoved {} king off its home square: {}",
            king.color,
            king.square
        );

        let long = self.castling_rook_ready(king.color, 0) && self.all_empty(y, &[1, 2, 3]);
        let short = self.castling_rook_ready(king.color, 7) && self.all_empty(y, &[5, 6]);
        if !long && !short {
            return;
        }

        let attacked = self.attack_map(king.color.other());
        let safe = |xs: &[i8]| xs.iter().all(|&x| !attacked.contains(Square::at(x, y)));
        if long && safe(&[2, 3, 4]) {
            map.set(Square::at(2, y));
        }
        if short && safe(&[4, 5, 6]) {
            map.set(Square::at(6, y));
        }
    }

    fn castling_rook_ready(&self, color: Color, x: i8) -> bool {
        match self.piece_at(Square::at(x, color.home_rank())) {
            Some(id) => {
                let rook = self.piece(id);
                id.color == color && rook.kind == PieceKind::Rook && !rook.moved
            }
            None => false,
        }
    }

    fn all_empty(&self, y: i8, xs: &[i8]) -> bool {
        xs.iter().all(|&x| self.is_empty(Square::at(x, y)))
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
