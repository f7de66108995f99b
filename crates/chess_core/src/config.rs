//! Search configuration.
//!
//! Front ends build a [`SearchConfig`] from defaults, an optional TOML file
//! and command-line overrides, then validate it once before searching.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChessError;

/// Plies searched below the root when nothing else is configured.
pub const DEFAULT_MAX_DEPTH: u8 = 5;

pub const DEFAULT_USE_PRUNING: bool = true;

/// Deepest search accepted by [`SearchConfig::validate`].
pub const MAX_SUPPORTED_DEPTH: u8 = 8;

/// Settings for one search.
///
/// Every field has a default, so a TOML file may set any subset:
///
/// ```toml
/// max_depth = 4
/// use_pruning = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth at which nodes become leaves.
    pub max_depth: u8,
    /// Alpha-beta cutoffs. Turning them off changes node counts, never the chosen move.
    pub use_pruning: bool,
    /// Search root moves on the rayon pool.
    pub parallel_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            use_pruning: DEFAULT_USE_PRUNING,
            parallel_root: false,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_pruning(mut self, use_pruning: bool) -> Self {
        self.use_pruning = use_pruning;
        self
    }

    pub fn with_parallel_root(mut self, parallel_root: bool) -> Self {
        self.parallel_root = parallel_root;
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ChessError> {
        let config: SearchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChessError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ChessError> {
        if !(1..=MAX_SUPPORTED_DEPTH).contains(&self.max_depth) {
            return Err(ChessError::InvalidConfig(format!(
                "max_depth must be between 1 and {MAX_SUPPORTED_DEPTH}, got {}",
                self.max_depth
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
