//! Human (White) against the engine (Black) in the terminal.

use std::io::{BufRead, Write};

use anyhow::Result;
use chess_core::{Board, ChessError, Color, Engine, Square};
use tracing::{info, warn};

use crate::uci::describe_moves;

const HELP: &str = "Enter moves like e2e4. 'moves e2' lists destinations, 'd' shows the board, 'quit' exits.";

pub fn run_play<R: BufRead, W: Write>(engine: &mut dyn Engine, input: R, out: &mut W) -> Result<()> {
    let mut board = Board::new();
    engine.new_game();

    writeln!(out, "You play White against {}. {HELP}", engine.name())?;
    writeln!(out, "{board}")?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit" | "exit"] => break,
            ["help"] => writeln!(out, "{HELP}")?,
            ["d" | "board"] => writeln!(out, "{board}")?,
            ["moves", sq] => writeln!(out, "{}", describe_moves(&board, sq))?,
            [text] => match parse_human_move(&mut board, text) {
                Ok(()) => {
                    if !finish_game(&mut board, engine, out)? {
                        reply(&mut board, engine, out)?;
                    }
                    writeln!(out, "{board}")?;
                }
                Err(e) => {
                    warn!(input = %text, error = %e, "rejected move");
                    writeln!(out, "{e}")?;
                }
            },
            _ => writeln!(out, "{HELP}")?,
        }
        prompt(out)?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

fn parse_human_move(board: &mut Board, text: &str) -> Result<(), ChessError> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessError::Unsupported(format!("{text:?} (expected a move like e2e4)")));
    }
    let from: Square = text[0..2].parse()?;
    let to: Square = text[2..4].parse()?;
    board.try_move_from(Color::White, from, to)?;
    Ok(())
}

/// Lets the engine answer as Black.
fn reply<W: Write>(board: &mut Board, engine: &mut dyn Engine, out: &mut W) -> Result<()> {
    let result = engine.search(board, Color::Black);
    match result.best_move {
        Some(mv) => {
            writeln!(out, "Black plays {mv}")?;
            if !finish_game(board, engine, out)? && board.candidate_moves(Color::White).is_empty() {
                writeln!(out, "White has no move. Game drawn.")?;
                restart(board, engine, out)?;
            }
        }
        None => {
            writeln!(out, "Black has no move. Game drawn.")?;
            restart(board, engine, out)?;
        }
    }
    Ok(())
}

/// Announces a captured king and starts over. Returns whether the game ended.
fn finish_game<W: Write>(board: &mut Board, engine: &mut dyn Engine, out: &mut W) -> Result<bool> {
    let Some(winner) = board.winner() else {
        return Ok(false);
    };
    info!(%winner, "game over");
    writeln!(out, "{winner} wins")?;
    restart(board, engine, out)?;
    Ok(true)
}

fn restart<W: Write>(board: &mut Board, engine: &mut dyn Engine, out: &mut W) -> Result<()> {
    board.reset();
    engine.new_game();
    writeln!(out, "New game.")?;
    Ok(())
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod play_tests;
