use super::*;

#[test]
fn test_square_bounds() {
    assert!(Square::new(0, 0).is_some());
    assert!(Square::new(7, 7).is_some());
    assert!(Square::new(8, 0).is_none());
    assert!(Square::new(0, -1).is_none());
    assert_eq!(Square::at(7, 7).offset(1, 0), None);
}

#[test]
fn test_square_notation() {
    let e4: Square = "e4".parse().unwrap();
    assert_eq!((e4.x(), e4.y()), (4, 3));
    assert_eq!(e4.to_string(), "e4");
    assert_eq!(Square::at(0, 0).to_string(), "a1");
    assert_eq!(Square::at(7, 7).to_string(), "h8");

    assert!("i1".parse::<Square>().is_err());
    assert!("a9".parse::<Square>().is_err());
    assert!("e".parse::<Square>().is_err());
}

#[test]
fn test_square_index_is_file_major() {
    let b1 = Square::at(1, 0);
    let a2 = Square::at(0, 1);
    assert!(a2.index() < b1.index());
    assert_eq!(Square::from_index(b1.index()), b1);
}

#[test]
fn test_color_geometry() {
    assert_eq!(Color::White.pawn_rank(), 1);
    assert_eq!(Color::Black.pawn_rank(), 6);
    assert_eq!(Color::White.promotion_rank(), 7);
    assert_eq!(Color::Black.promotion_rank(), 0);
    assert!(Color::Black.prefers(5, 4));
    assert!(Color::White.prefers(4, 5));
    assert!(!Color::White.prefers(5, 5));
}

#[test]
fn test_letters_round_trip() {
    for kind in PieceKind::ALL {
        for color in Color::ALL {
            assert_eq!(PieceKind::from_letter(kind.letter(color)), Some((kind, color)));
        }
    }
    assert_eq!(PieceKind::from_letter('x'), None);
}
