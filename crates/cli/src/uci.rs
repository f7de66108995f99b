//! UCI loop plus a few debugging commands.

use std::io::{BufRead, Write};

use anyhow::Result;
use chess_core::{
    move_to_uci, set_position_from_uci, Board, Color, Engine, GenMode, SearchConfig, Square,
    MAX_SUPPORTED_DEPTH,
};
use tracing::{debug, warn};

/// Reads UCI commands until `quit` or end of input.
///
/// `go` searches a copy of the current position; the GUI is expected to send
/// the resulting position back with `position ... moves`.
pub fn run_uci<R: BufRead, W: Write>(
    engine: &mut dyn Engine,
    defaults: SearchConfig,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut board = Board::new();
    let mut side = Color::White;

    for line in input.lines() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };

        match command {
            "uci" => {
                writeln!(out, "id name {}", engine.name())?;
                writeln!(out, "id author {}", engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max {MAX_SUPPORTED_DEPTH}",
                    defaults.max_depth
                )?;
                writeln!(
                    out,
                    "option name Pruning type check default {}",
                    defaults.use_pruning
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => {
                let (name, value) = parse_setoption(&parts[1..]);
                if !engine.set_option(&name, &value) {
                    warn!(%name, %value, "option rejected");
                    writeln!(out, "info string ignored option {name} = {value}")?;
                }
            }
            "ucinewgame" => {
                board.reset();
                side = Color::White;
                engine.new_game();
            }
            "position" => match set_position_from_uci(&mut board, &parts[1..]) {
                Ok(to_move) => side = to_move,
                Err(e) => {
                    warn!(error = %e, "bad position command");
                    writeln!(out, "info string {e}")?;
                    side = Color::White;
                    board.reset();
                }
            },
            "go" => {
                let mut scratch = board;
                let result = engine.search(&mut scratch, side);
                // UCI scores are from the mover's point of view.
                let cp = match side {
                    Color::Black => result.score,
                    Color::White => -result.score,
                };
                writeln!(
                    out,
                    "info depth {} score cp {} nodes {}",
                    result.depth, cp, result.nodes
                )?;
                match result.best_move {
                    Some(mv) => writeln!(out, "bestmove {}", move_to_uci(mv))?,
                    None => writeln!(out, "bestmove 0000")?,
                }
            }
            "d" => {
                writeln!(out, "{board}")?;
                writeln!(out, "{side} to move")?;
            }
            "eval" => writeln!(out, "black advantage {}", board.black_advantage())?,
            "moves" => {
                let text = parts.get(1).copied().unwrap_or("");
                writeln!(out, "{}", describe_moves(&board, text))?;
            }
            "quit" => break,
            other => debug!(command = other, "ignoring unknown command"),
        }
        out.flush()?;
    }
    Ok(())
}

/// Splits `name <words...> value <words...>` into its two parts.
fn parse_setoption(args: &[&str]) -> (String, String) {
    let name_at = args.iter().position(|&w| w == "name");
    let value_at = args.iter().position(|&w| w == "value");
    let name = match (name_at, value_at) {
        (Some(n), Some(v)) if v > n => args[n + 1..v].join(" "),
        (Some(n), _) => args[n + 1..].join(" "),
        _ => String::new(),
    };
    let value = value_at.map(|v| args[v + 1..].join(" ")).unwrap_or_default();
    (name, value)
}

/// One line listing the destinations of the piece on `text`.
pub fn describe_moves(board: &Board, text: &str) -> String {
    let sq: Square = match text.parse() {
        Ok(sq) => sq,
        Err(e) => return e.to_string(),
    };
    let Some(id) = board.piece_at(sq) else {
        return format!("no piece on {sq}");
    };
    let targets: Vec<String> = board
        .find_valid_moves(id, GenMode::Full)
        .squares()
        .map(|s| s.to_string())
        .collect();
    if targets.is_empty() {
        format!("{sq}: no moves")
    } else {
        format!("{sq}: {}", targets.join(" "))
    }
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
