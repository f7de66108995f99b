//! Match results storage and reporting

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::match_runner::MatchConfig;

/// Result of a single game, from one engine's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other engine.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameEnd {
    /// A king was taken; the capturing side wins.
    KingCaptured,
    /// The side to move had no generated move.
    NoMoves,
    /// The ply limit ran out.
    MaxPlies,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// One finished game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    /// 1-based game number within the match
    pub game: u32,
    pub engine1_white: bool,
    /// From engine1's perspective
    pub result: GameResult,
    pub end: GameEnd,
    pub plies: u32,
    /// Moves in coordinate notation, White first
    pub moves: Vec<String>,
}

/// Complete match report, saved as pretty JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str, config: MatchConfig) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            config,
            result: MatchResult::new(),
            games: Vec::new(),
        }
    }

    /// Add a finished game and count it
    pub fn add_game(&mut self, record: GameRecord) {
        self.result.record(record.result);
        self.games.push(record);
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize match report")?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} vs {} ===\n\n", self.engine1, self.engine2));
        report.push_str(&format!(
            "Config: {} games, depth {}, pruning {}, max {} plies\n\n",
            self.config.num_games,
            self.config.search.max_depth,
            if self.config.search.use_pruning { "on" } else { "off" },
            self.config.max_plies
        ));

        report.push_str(&format!(
            "{:>4}  {:<6} {:<6} {:<14} {:>6}\n",
            "Game", "Color", "Result", "End", "Plies"
        ));
        report.push_str(&"-".repeat(42));
        report.push('\n');

        for g in &self.games {
            report.push_str(&format!(
                "{:>4}  {:<6} {:<6} {:<14} {:>6}\n",
                g.game,
                if g.engine1_white { "W" } else { "B" },
                match g.result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                },
                format!("{:?}", g.end),
                g.plies
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
