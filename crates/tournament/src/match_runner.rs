//! Match runner for playing games between engines

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chess_core::{move_to_uci, Board, Color, Engine, SearchConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::results::{GameEnd, GameRecord, GameResult, MatchReport};

/// Configuration for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
    /// Search settings handed to engines that search
    pub search: SearchConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 200,
            alternate_colors: true,
            verbose: true,
            search: SearchConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Parses a TOML match file; missing keys keep their defaults.
    ///
    /// ```toml
    /// num_games = 20
    /// max_plies = 120
    ///
    /// [search]
    /// max_depth = 3
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: MatchConfig = toml::from_str(text).context("invalid match configuration")?;
        config.search.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }
}

/// How one game ended, from White's point of view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub white_result: GameResult,
    pub end: GameEnd,
    pub moves: Vec<String>,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Results in the report are from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchReport {
        let mut report = MatchReport::new(engine1.name(), engine2.name(), self.config);

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let summary = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            let result = if engine1_white {
                summary.white_result
            } else {
                summary.white_result.flipped()
            };

            report.add_game(GameRecord {
                game: game_num + 1,
                engine1_white,
                result,
                end: summary.end,
                plies: summary.moves.len() as u32,
                moves: summary.moves,
            });

            let score = report.result;
            debug!(
                game = game_num + 1,
                ?result,
                end = ?summary.end,
                wins = score.wins,
                losses = score.losses,
                draws = score.draws,
                "game finished"
            );
            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    score.wins,
                    score.losses,
                    score.draws
                );
            }
        }

        report
    }

    /// Play a single game from the standard position with White to move.
    ///
    /// Each engine applies its own move to the shared board.
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameSummary {
        let mut board = Board::new();
        let mut side = Color::White;
        let mut moves = Vec::new();
        white.new_game();
        black.new_game();

        for ply in 0..self.config.max_plies {
            let result = match side {
                Color::White => white.search(&mut board, side),
                Color::Black => black.search(&mut board, side),
            };

            let Some(mv) = result.best_move else {
                trace!(ply, %side, "no move available");
                return GameSummary {
                    white_result: GameResult::Draw,
                    end: GameEnd::NoMoves,
                    moves,
                };
            };
            trace!(ply, %side, mv = %mv, score = result.score, "ply");
            moves.push(move_to_uci(mv));

            if let Some(winner) = board.winner() {
                let white_result = match winner {
                    Color::White => GameResult::Win,
                    Color::Black => GameResult::Loss,
                };
                return GameSummary {
                    white_result,
                    end: GameEnd::KingCaptured,
                    moves,
                };
            }
            side = side.other();
        }

        GameSummary {
            white_result: GameResult::Draw,
            end: GameEnd::MaxPlies,
            moves,
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
