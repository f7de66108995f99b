use super::*;

#[test]
fn test_defaults() {
    let config = SearchConfig::default();
    assert_eq!(config.max_depth, 5);
    assert!(config.use_pruning);
    assert!(!config.parallel_root);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = SearchConfig::from_toml_str("max_depth = 3\n").unwrap();
    assert_eq!(config.max_depth, 3);
    assert!(config.use_pruning);

    let config = SearchConfig::from_toml_str("use_pruning = false\nparallel_root = true\n").unwrap();
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    assert!(!config.use_pruning);
    assert!(config.parallel_root);
}

#[test]
fn test_depth_out_of_range() {
    for text in ["max_depth = 0", "max_depth = 9"] {
        let err = SearchConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ChessError::InvalidConfig(_)), "{text}: {err}");
    }
    assert!(SearchConfig::default().with_depth(8).validate().is_ok());
}

#[test]
fn test_malformed_toml() {
    let err = SearchConfig::from_toml_str("max_depth = \"deep\"").unwrap_err();
    assert!(matches!(err, ChessError::ConfigParse(_)));
}

#[test]
fn test_load_missing_file() {
    let err = SearchConfig::load("/nonexistent/search.toml").unwrap_err();
    assert!(matches!(err, ChessError::Io(_)));
}

#[test]
fn test_builders() {
    let config = SearchConfig::default()
        .with_depth(2)
        .with_pruning(false)
        .with_parallel_root(true);
    assert_eq!(
        config,
        SearchConfig {
            max_depth: 2,
            use_pruning: false,
            parallel_root: true,
        }
    );
}
