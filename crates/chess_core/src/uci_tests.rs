use super::*;

#[test]
fn test_parse_matches_generated_move() {
    let b = Board::new();
    let mv = parse_uci_move(&b, Color::White, "g1f3").unwrap();
    assert_eq!(mv.kind, PieceKind::Knight);
    assert_eq!(move_to_uci(mv), "g1f3");

    assert!(parse_uci_move(&b, Color::White, "e2e5").is_none());
    assert!(parse_uci_move(&b, Color::Black, "e2e4").is_none());
    assert!(parse_uci_move(&b, Color::White, "e2").is_none());
    assert!(parse_uci_move(&b, Color::White, "z9e4").is_none());
}

#[test]
fn test_promotion_suffix() {
    let b: Board = "
        ****k***
        P*******
        ********
        ********
        ********
        ********
        ********
        ****K***"
        .parse()
        .unwrap();
    let mv = parse_uci_move(&b, Color::White, "a7a8q").unwrap();
    assert_eq!(move_to_uci(mv), "a7a8q");
    assert_eq!(parse_uci_move(&b, Color::White, "a7a8"), Some(mv));
    assert!(parse_uci_move(&b, Color::White, "a7a8n").is_none());
    // Non-promoting moves take no suffix.
    assert!(parse_uci_move(&b, Color::White, "e1e2q").is_none());
}

#[test]
fn test_position_startpos_moves() {
    let mut b = Board::new();
    let side = set_position_from_uci(&mut b, &["startpos", "moves", "e2e4", "e7e5", "g1f3"]).unwrap();
    assert_eq!(side, Color::Black);
    assert!(b.piece_at("e4".parse().unwrap()).is_some());
    assert!(b.piece_at("f3".parse().unwrap()).is_some());

    let side = set_position_from_uci(&mut b, &["startpos"]).unwrap();
    assert_eq!(side, Color::White);
    assert_eq!(b, Board::new());
}

#[test]
fn test_position_replays_castling() {
    let mut b = Board::new();
    let args = [
        "startpos", "moves", "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1",
    ];
    let side = set_position_from_uci(&mut b, &args).unwrap();
    assert_eq!(side, Color::Black);
    let rook = b.piece_at("f1".parse().unwrap()).unwrap();
    assert_eq!(b.piece(rook).kind, PieceKind::Rook);
}

#[test]
fn test_position_rejections() {
    let mut b = Board::new();
    let err = set_position_from_uci(&mut b, &["fen", "8/8/8/8/8/8/8/8", "w"]).unwrap_err();
    assert!(matches!(err, ChessError::Unsupported(_)));

    let err = set_position_from_uci(&mut b, &["startpos", "moves", "e2e4", "e2e4"]).unwrap_err();
    assert!(matches!(err, ChessError::Unsupported(_)));
}
