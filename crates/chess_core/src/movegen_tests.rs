use super::*;

fn board(grid: &str) -> Board {
    grid.parse().expect("test grid should parse")
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn play(b: &mut Board, side: Color, from: &str, to: &str) {
    b.try_move_from(side, sq(from), sq(to))
        .unwrap_or_else(|e| panic!("{from}{to} rejected: {e}"));
}

fn moves_of(b: &Board, at: &str, mode: GenMode) -> ValidityMap {
    let id = b.piece_at(sq(at)).expect("no piece on square");
    b.find_valid_moves(id, mode)
}

const CASTLING_GRID: &str = "
    r***k**r
    ********
    ********
    ********
    ********
    ********
    ********
    R***K**R";

#[test]
fn test_startpos_moves() {
    let b = Board::new();
    assert_eq!(b.candidate_moves(Color::White).len(), 20);
    assert_eq!(b.candidate_moves(Color::Black).len(), 20);
}

#[test]
fn test_candidate_order_follows_slots_then_files() {
    let b = Board::new();
    let moves = b.candidate_moves(Color::White);
    let first: Vec<String> = moves.iter().take(3).map(|m| m.to_string()).collect();
    assert_eq!(first, vec!["a2a3", "a2a4", "b2b3"]);
    // Knights follow the pawns; b1 jumps to a3 before c3.
    assert_eq!(moves[16].to_string(), "b1a3");
    assert_eq!(moves[17].to_string(), "b1c3");
}

#[test]
fn test_knight_in_corner() {
    let b = board(
        "
        ****k***
        ********
        ********
        ********
        ********
        ********
        ********
        N***K***",
    );
    let map = moves_of(&b, "a1", GenMode::Full);
    assert_eq!(map.len(), 2);
    assert!(map.contains(sq("b3")));
    assert!(map.contains(sq("c2")));
}

#[test]
fn test_rook_ray_stops_at_pieces() {
    let b = board(
        "
        ****k***
        ********
        ********
        p*******
        ********
        ********
        ********
        R**NK***",
    );
    let map = moves_of(&b, "a1", GenMode::Full);
    // a2..a5 (capture on a5), b1, c1; the own knight on d1 blocks.
    assert_eq!(map.len(), 6);
    assert!(map.contains(sq("a5")));
    assert!(!map.contains(sq("a6")));
    assert!(!map.contains(sq("d1")));
}

#[test]
fn test_queen_combines_rays() {
    let b = board(
        "
        ****k***
        ********
        ********
        ********
        ***Q****
        ********
        ********
        ****K***",
    );
    // Neither king sits on a line through d4.
    let map = moves_of(&b, "d4", GenMode::Full);
    assert_eq!(map.len(), 27);
}

#[test]
fn test_pawn_double_advance_needs_clear_path() {
    let b = board(
        "
        ****k***
        ********
        ********
        ********
        ********
        n*******
        P*******
        ****K***",
    );
    assert!(moves_of(&b, "a2", GenMode::Full).is_empty());

    let b = board(
        "
        ****k***
        ********
        ********
        ********
        n*******
        ********
        P*******
        ****K***",
    );
    let map = moves_of(&b, "a2", GenMode::Full);
    assert_eq!(map.len(), 1);
    assert!(map.contains(sq("a3")));
}

#[test]
fn test_pawn_attacks_only_mode() {
    let b = board(
        "
        ****k***
        ********
        ********
        ********
        ********
        *p*p****
        **P*****
        ****K***",
    );
    let full = moves_of(&b, "c2", GenMode::Full);
    assert_eq!(full.len(), 4);
    let attacks = moves_of(&b, "c2", GenMode::AttacksOnly);
    assert_eq!(attacks.len(), 2);
    assert!(attacks.contains(sq("b3")));
    assert!(attacks.contains(sq("d3")));
}

#[test]
fn test_both_castlings_offered() {
    let b = board(CASTLING_GRID);
    let map = moves_of(&b, "e1", GenMode::Full);
    assert!(map.contains(sq("c1")));
    assert!(map.contains(sq("g1")));
    assert_eq!(map.len(), 7);

    // Attack maps never contain castling squares.
    let attacks = moves_of(&b, "e1", GenMode::AttacksOnly);
    assert!(!attacks.contains(sq("c1")));
    assert!(!attacks.contains(sq("g1")));
}

#[test]
fn test_short_castling_blocked_by_occupied_f1() {
    let b = board(
        "
        r***k**r
        ********
        ********
        ********
        ********
        ********
        ********
        R***KN*R",
    );
    let map = moves_of(&b, "e1", GenMode::Full);
    assert!(!map.contains(sq("g1")));
    assert!(map.contains(sq("c1")));
}

#[test]
fn test_castling_through_attacked_square() {
    let b = board(
        "
        r***kr**
        ********
        ********
        ********
        ********
        ********
        ********
        R***K**R",
    );
    let map = moves_of(&b, "e1", GenMode::Full);
    assert!(!map.contains(sq("g1")), "f1 is covered by the f8 rook");
    assert!(map.contains(sq("c1")));
}

#[test]
fn test_no_castling_out_of_attack() {
    let b = board(
        "
        ****k***
        ********
        ********
        ****q***
        ********
        ********
        ********
        R***K**R",
    );
    let map = moves_of(&b, "e1", GenMode::Full);
    assert!(!map.contains(sq("c1")));
    assert!(!map.contains(sq("g1")));
}

#[test]
fn test_no_castling_after_rook_moved() {
    let mut b = board(CASTLING_GRID);
    play(&mut b, Color::White, "h1", "h2");
    play(&mut b, Color::Black, "a8", "a7");
    play(&mut b, Color::White, "h2", "h1");
    play(&mut b, Color::Black, "a7", "a8");
    let map = moves_of(&b, "e1", GenMode::Full);
    assert!(!map.contains(sq("g1")));
    assert!(map.contains(sq("c1")));
}

#[test]
fn test_en_passant_window() {
    let mut b = Board::new();
    play(&mut b, Color::White, "e2", "e4");
    play(&mut b, Color::Black, "a7", "a6");
    play(&mut b, Color::White, "e4", "e5");
    play(&mut b, Color::Black, "d7", "d5");

    let map = moves_of(&b, "e5", GenMode::Full);
    assert!(map.contains(sq("d6")));
    assert!(!map.contains(sq("f6")));
    // En passant is a capture, so attack maps include it too.
    assert!(moves_of(&b, "e5", GenMode::AttacksOnly).contains(sq("d6")));

    // Waiting a move closes the window once Black moves again.
    play(&mut b, Color::White, "g1", "f3");
    play(&mut b, Color::Black, "h7", "h6");
    assert!(!moves_of(&b, "e5", GenMode::Full).contains(sq("d6")));
}

#[test]
fn test_attack_map_unions_capture_only_moves() {
    let b = Board::new();
    let attacks = b.attack_map(Color::White);
    // From the start position nothing can capture, and quiet pawn pushes are excluded;
    // only knight jumps onto empty squares remain.
    let expected: ValidityMap = ["a3", "c3", "f3", "h3"].iter().map(|s| sq(s)).collect();
    assert_eq!(attacks, expected);
}

#[test]
#[should_panic(expected = "captured piece")]
fn test_moves_for_captured_piece_panic() {
    let mut b = board(
        "
        ****k***
        ********
        ********
        ********
        ********
        ********
        *p******
        R***K***",
    );
    let victim = b.piece_at(sq("b2")).unwrap();
    let rook = b.piece_at(sq("a1")).unwrap();
    b.make_move(rook, sq("a2"));
    b.make_move(rook, sq("b2"));
    b.find_valid_moves(victim, GenMode::Full);
}
