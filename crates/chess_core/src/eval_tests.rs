use super::*;

/// Swaps the colors of a grid: ranks reversed, letter case flipped.
fn mirror(grid: &str) -> String {
    let rows: Vec<String> = grid
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .rev()
        .map(|row| {
            row.chars()
                .map(|c| {
                    if c.is_ascii_uppercase() {
                        c.to_ascii_lowercase()
                    } else {
                        c.to_ascii_uppercase()
                    }
                })
                .collect()
        })
        .collect();
    rows.join("\n")
}

#[test]
fn test_startpos_is_balanced() {
    let b = Board::new();
    assert_eq!(b.side_score(Color::White), b.side_score(Color::Black));
    assert_eq!(b.black_advantage(), 0);
}

#[test]
fn test_material_and_advancement() {
    let b: Board = "
        ****k***
        ********
        ********
        ********
        ****P***
        ********
        ********
        ****K***"
        .parse()
        .unwrap();
    // The pawn on e4 is three ranks from White's back rank.
    assert_eq!(b.side_score(Color::White), 100 * 100 + 100 + 3);
    assert_eq!(b.side_score(Color::Black), 100 * 100);
    assert_eq!(b.black_advantage(), -103);
}

#[test]
fn test_checkmate_overrides_material() {
    let mut b: Board = "
        ****k***
        ********
        ********
        ********
        ********
        ********
        ********
        q***K***"
        .parse()
        .unwrap();
    let queen = b.piece_at("a1".parse().unwrap()).unwrap();
    b.make_move(queen, "e1".parse().unwrap());
    assert!(b.is_checkmated(Color::White));
    assert_eq!(b.side_score(Color::White), CHECKMATE_SCORE);
    // Queen on e1 sits seven ranks from Black's back rank.
    let black = 100 * 100 + 100 * 9 + 7;
    assert_eq!(b.black_advantage(), black - CHECKMATE_SCORE);
}

#[test]
fn test_mirrored_colors_negate_score() {
    let grids = [
        "
        r**qk**r
        ppp**ppp
        **n*****
        ***pp***
        **B*P***
        *****N**
        PPPP*PPP
        RNBQK**R",
        "
        ****k***
        ********
        ***Q****
        ********
        **p*****
        ********
        *****PPP
        ******K*",
    ];
    for grid in grids {
        let b: Board = grid.parse().unwrap();
        let m: Board = mirror(grid).parse().unwrap();
        assert_ne!(b.black_advantage(), 0);
        assert_eq!(m.black_advantage(), -b.black_advantage(), "grid:\n{grid}");
    }
}
