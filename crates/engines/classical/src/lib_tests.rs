use super::*;

#[test]
fn test_engine_plays_and_reports() {
    let mut engine = ClassicalEngine::with_config(SearchConfig::default().with_depth(2));
    let mut board = Board::new();
    let result = engine.search(&mut board, Color::White);

    let mv = result.best_move.expect("start position has moves");
    assert_eq!(board.piece(mv.piece).square, mv.to);
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 0);
}

#[test]
fn test_set_option() {
    let mut engine = ClassicalEngine::new();
    assert_eq!(engine.config().max_depth, chess_core::DEFAULT_MAX_DEPTH);

    assert!(engine.set_option("Depth", "3"));
    assert_eq!(engine.config().max_depth, 3);
    assert!(!engine.set_option("Depth", "0"));
    assert!(!engine.set_option("Depth", "9"));
    assert!(!engine.set_option("Depth", "deep"));
    assert_eq!(engine.config().max_depth, 3);

    assert!(engine.set_option("pruning", "false"));
    assert!(!engine.config().use_pruning);
    assert!(!engine.set_option("Pruning", "maybe"));

    assert!(!engine.set_option("Hash", "64"));
}

#[test]
fn test_identity() {
    let engine = ClassicalEngine::new();
    assert_eq!(engine.name(), "Classical v1.0");
    assert_eq!(engine.author(), "ML-chess");
}
