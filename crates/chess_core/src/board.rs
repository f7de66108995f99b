use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;
use crate::movegen::GenMode;
use crate::types::*;

/// The full game state: 16 piece slots per color plus a checkmate flag each.
///
/// A slot keeps its identity for the whole game. Captured pieces stay in
/// their slot with `alive == false` and a stale square, and are never
/// returned by square lookups. `Board` is a plain value; the search copies
/// it at every node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pieces: [[Piece; SLOTS_PER_COLOR]; 2],
    checkmate: [bool; 2],
}

/// Back-rank layout in slot order, paired with the file each piece starts on.
const BACK_RANK: [(usize, PieceKind, i8); 8] = [
    (8, PieceKind::Knight, 1),
    (9, PieceKind::Knight, 6),
    (10, PieceKind::Bishop, 2),
    (11, PieceKind::Bishop, 5),
    (12, PieceKind::Rook, 0),
    (13, PieceKind::Rook, 7),
    (QUEEN_SLOT, PieceKind::Queen, 3),
    (KING_SLOT, PieceKind::King, 4),
];

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        let mut pieces = [
            [Piece::captured(PieceKind::Pawn, Color::White); SLOTS_PER_COLOR],
            [Piece::captured(PieceKind::Pawn, Color::Black); SLOTS_PER_COLOR],
        ];
        for color in Color::ALL {
            let side = &mut pieces[color.idx()];
            for x in 0..8 {
                side[x as usize] = Piece::new(
                    PieceKind::Pawn,
                    color,
                    Square::at(x, color.pawn_rank()),
                );
            }
            for (slot, kind, x) in BACK_RANK {
                side[slot] = Piece::new(kind, color, Square::at(x, color.home_rank()));
            }
        }
        Board {
            pieces,
            checkmate: [false; 2],
        }
    }

    pub fn reset(&mut self) {
        *self = Board::new();
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.color.idx()][id.slot]
    }

    fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.color.idx()][id.slot]
    }

    pub fn pieces(&self, color: Color) -> &[Piece; SLOTS_PER_COLOR] {
        &self.pieces[color.idx()]
    }

    /// Live pieces of `color`, in slot order.
    pub fn live_pieces(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces[color.idx()]
            .iter()
            .enumerate()
            .filter(|(_, p)| p.alive)
            .map(move |(slot, _)| PieceId { color, slot })
    }

    /// The live piece standing on `sq`, if any.
    ///
    /// A linear scan over all 32 slots; move generation calls this for every
    /// candidate square.
    pub fn piece_at(&self, sq: Square) -> Option<PieceId> {
        for color in Color::ALL {
            for (slot, p) in self.pieces[color.idx()].iter().enumerate() {
                if p.alive && p.square == sq {
                    return Some(PieceId { color, slot });
                }
            }
        }
        None
    }

    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// True once `color`'s king has been captured.
    pub fn is_checkmated(&self, color: Color) -> bool {
        self.checkmate[color.idx()]
    }

    /// The side that captured the opposing king, if the game is decided.
    pub fn winner(&self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&c| self.is_checkmated(c))
            .map(Color::other)
    }

    /// Applies a move and all of its side effects.
    ///
    /// `to` must come from [`Board::find_valid_moves`] for this piece; the
    /// geometry alone decides whether the move is an en passant capture, a
    /// castling or a promotion.
    pub fn make_move(&mut self, id: PieceId, to: Square) {
        let mover = *self.piece(id);
        assert!(mover.alive, "cannot move captured piece {id:?}");
        let color = id.color;
        let from = mover.square;

        for p in self.pieces[color.idx()].iter_mut() {
            p.double_move = false;
        }

        if mover.kind == PieceKind::Pawn && (to.y() - from.y()).abs() == 2 {
            self.piece_mut(id).double_move = true;
        }

        // A diagonal pawn step onto an empty square is en passant.
        if mover.kind == PieceKind::Pawn && (to.x() - from.x()).abs() == 1 && self.is_empty(to) {
            let behind = to
                .offset(0, -color.forward())
                .expect("en passant target has no square behind it");
            let victim = self
                .piece_at(behind)
                .expect("en passant without a pawn to capture");
            let v = self.piece(victim);
            assert!(
                v.color != color && v.kind == PieceKind::Pawn && v.double_move,
                "en passant onto {to} against {v:?}"
            );
            self.piece_mut(victim).alive = false;
        }

        // Castling co-moves the rook on the king's side of travel.
        if mover.kind == PieceKind::King && (to.x() - from.x()).abs() == 2 {
            let (rook_x, rook_to_x) = if to.x() < from.x() { (0, 3) } else { (7, 5) };
            let rook = self
                .piece_at(Square::at(rook_x, from.y()))
                .expect("castling without a rook in the corner");
            let r = self.piece(rook);
            assert!(
                rook.color == color && r.kind == PieceKind::Rook,
                "castling with {r:?} in the corner"
            );
            self.make_move(rook, Square::at(rook_to_x, from.y()));
        }

        if let Some(victim) = self.piece_at(to) {
            assert!(
                victim.color != color,
                "{id:?} cannot capture its own piece on {to}"
            );
            let v = self.piece_mut(victim);
            v.alive = false;
            if v.kind == PieceKind::King {
                self.checkmate[victim.color.idx()] = true;
            }
        }

        let p = self.piece_mut(id);
        p.square = to;
        p.moved = true;
        if p.kind == PieceKind::Pawn && to.y() == color.promotion_rank() {
            p.kind = PieceKind::Queen;
        }
    }

    /// Validated [`Board::make_move`] for untrusted input.
    pub fn try_move(&mut self, id: PieceId, to: Square) -> Result<Move, ChessError> {
        let piece = *self.piece(id);
        if !piece.alive {
            return Err(ChessError::EmptySquare(piece.square));
        }
        if let Some(winner) = self.winner() {
            return Err(ChessError::GameOver(winner.other()));
        }
        if !self.find_valid_moves(id, GenMode::Full).contains(to) {
            return Err(ChessError::IllegalMove {
                from: piece.square,
                to,
            });
        }
        self.make_move(id, to);
        Ok(Move {
            piece: id,
            kind: piece.kind,
            from: piece.square,
            to,
        })
    }

    /// Moves `side`'s piece standing on `from` to `to`, checking ownership first.
    pub fn try_move_from(
        &mut self,
        side: Color,
        from: Square,
        to: Square,
    ) -> Result<Move, ChessError> {
        let id = self.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
        if id.color != side {
            return Err(ChessError::WrongColor {
                square: from,
                owner: id.color,
                expected: side,
            });
        }
        self.try_move(id, to)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-width grid, rank 8 first: uppercase White, lowercase Black, `*` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..8).rev() {
            for x in 0..8 {
                let c = match self.piece_at(Square::at(x, y)) {
                    Some(id) => {
                        let p = self.piece(id);
                        p.kind.letter(p.color)
                    }
                    None => '*',
                };
                write!(f, "{c}")?;
            }
            if y > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Parses the grid written by `Display` back into a board.
///
/// Pieces are placed in their role slots; surplus knights, bishops, rooks and
/// queens take free pawn slots as promoted pawns. Only kings, rooks and pawns
/// standing on their setup squares count as unmoved. Checkmate flags start
/// cleared, so each color needs exactly one king.
impl FromStr for Board {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != 8 {
            return Err(ChessError::InvalidGrid(format!(
                "expected 8 rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board {
            pieces: [[Piece::captured(PieceKind::Pawn, Color::White); SLOTS_PER_COLOR]; 2],
            checkmate: [false; 2],
        };
        for color in Color::ALL {
            for (slot, kind, _) in BACK_RANK {
                board.pieces[color.idx()][slot] = Piece::captured(kind, color);
            }
            for slot in PAWN_SLOTS {
                board.pieces[color.idx()][slot] = Piece::captured(PieceKind::Pawn, color);
            }
        }

        let mut pawns: [Vec<Piece>; 2] = [Vec::new(), Vec::new()];
        let mut surplus: [Vec<Piece>; 2] = [Vec::new(), Vec::new()];

        for (row, line) in rows.iter().enumerate() {
            let y = 7 - row as i8;
            if line.chars().count() != 8 {
                return Err(ChessError::InvalidGrid(format!(
                    "row {} has {} squares",
                    row + 1,
                    line.chars().count()
                )));
            }
            for (x, c) in line.chars().enumerate() {
                if c == '*' {
                    continue;
                }
                let (kind, color) = PieceKind::from_letter(c)
                    .ok_or_else(|| ChessError::InvalidGrid(format!("unknown piece {c:?}")))?;
                let square = Square::at(x as i8, y);
                let mut piece = Piece::new(kind, color, square);
                piece.moved = !on_setup_square(&piece);

                if kind == PieceKind::Pawn {
                    pawns[color.idx()].push(piece);
                    continue;
                }
                let side = &mut board.pieces[color.idx()];
                let free = role_slots(kind).find(|&slot| !side[slot].alive);
                match free {
                    Some(slot) => side[slot] = piece,
                    None if kind == PieceKind::King => {
                        return Err(ChessError::InvalidGrid(format!("{color} has two kings")));
                    }
                    None => surplus[color.idx()].push(piece),
                }
            }
        }

        for color in Color::ALL {
            let idx = color.idx();
            if !board.pieces[idx][KING_SLOT].alive {
                return Err(ChessError::InvalidGrid(format!("{color} has no king")));
            }
            let extra = pawns[idx].len() + surplus[idx].len();
            if extra > PAWN_SLOTS.len() {
                return Err(ChessError::InvalidGrid(format!(
                    "{color} has {extra} pawns and promoted pieces"
                )));
            }
            for (slot, piece) in pawns[idx].drain(..).chain(surplus[idx].drain(..)).enumerate() {
                board.pieces[idx][slot] = piece;
            }
        }
        Ok(board)
    }
}

fn role_slots(kind: PieceKind) -> std::ops::Range<usize> {
    match kind {
        PieceKind::Pawn => PAWN_SLOTS,
        PieceKind::Knight => KNIGHT_SLOTS,
        PieceKind::Bishop => BISHOP_SLOTS,
        PieceKind::Rook => ROOK_SLOTS,
        PieceKind::Queen => QUEEN_SLOT..QUEEN_SLOT + 1,
        PieceKind::King => KING_SLOT..KING_SLOT + 1,
    }
}

fn on_setup_square(p: &Piece) -> bool {
    let (x, y) = (p.square.x(), p.square.y());
    match p.kind {
        PieceKind::King => x == 4 && y == p.color.home_rank(),
        PieceKind::Rook => (x == 0 || x == 7) && y == p.color.home_rank(),
        PieceKind::Pawn => y == p.color.pawn_rank(),
        _ => false,
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
