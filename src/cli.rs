#![cfg(feature = "std")]

//! Terminal front-end: board rendering, command parsing and the play loop.
//!
//! Nothing here decides game rules; it only turns engine outcomes and
//! views into text.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use rand::Rng;

use crate::{
    common::{CellMark, GameError, ShotOutcome, Stats},
    config::GRID_SIZE,
    game::GameEngine,
    ship::Piece,
    state::GameState,
};

const HELP: &str = "\
Commands:
  <cell>   fire at a cell, column letter then row number (e.g. B7)
  reveal   toggle test mode showing the remaining ships
  stats    show shots, hits and ships remaining
  new      start a new game
  quit     leave";

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(usize, usize),
    Reveal,
    Stats,
    New,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "reveal" | "r" => Some(Command::Reveal),
            "stats" | "s" => Some(Command::Stats),
            "new" | "n" => Some(Command::New),
            "help" | "h" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => parse_coord(input).map(|(r, c)| Command::Fire(r, c)),
        }
    }
}

/// Label of (row, col), e.g. `(6, 1)` is `B7`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse a label such as `B7` or `j10` into (row, col) on the standard grid.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 || row > GRID_SIZE || col >= GRID_SIZE {
        return None;
    }
    Some((row - 1, col))
}

fn piece_glyph(piece: Piece) -> char {
    match piece {
        Piece::Left => '<',
        Piece::HorizontalMid => '=',
        Piece::Right => '>',
        Piece::Top => '^',
        Piece::VerticalMid => '|',
        Piece::Bottom => 'v',
    }
}

fn cell_glyph(state: &GameState, revealed: &[(usize, usize)], r: usize, c: usize) -> char {
    match state.cell_mark(r, c) {
        Ok(CellMark::Miss) => 'o',
        Ok(CellMark::Hit) => state
            .visible_piece(r, c)
            .ok()
            .flatten()
            .map_or('X', piece_glyph),
        Ok(CellMark::Sunk) => '#',
        Ok(CellMark::Unshot) if revealed.contains(&(r, c)) => 'S',
        _ => '.',
    }
}

/// Text picture of the board. Hit cells show their hull piece, sunk ships
/// are drawn with `#`, revealed ships (test mode) with `S`.
pub fn render_board(state: &GameState) -> String {
    let revealed = state.revealed_cells();
    let mut out = String::from("   ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..GRID_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..GRID_SIZE {
            let _ = write!(out, " {}", cell_glyph(state, &revealed, r, c));
        }
        out.push('\n');
    }
    out
}

pub fn format_stats(stats: &Stats) -> String {
    format!(
        "Shots: {}  Hits: {}  Ships left: {}",
        stats.shots, stats.hits, stats.ships_remaining
    )
}

/// Interactive loop reading commands from `input` until `quit` or end of
/// input.
pub fn run_interactive<R, I, O>(
    engine: &mut GameEngine<R>,
    mut input: I,
    out: &mut O,
) -> anyhow::Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    write!(out, "{}", render_board(engine.state()))?;
    writeln!(out, "Good luck, commander! Type a cell like B7, or 'help'.")?;
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match Command::parse(line) {
            None => writeln!(out, "Unrecognized input '{}'. Type 'help'.", line)?,
            Some(Command::Quit) => break,
            Some(Command::Help) => writeln!(out, "{HELP}")?,
            Some(Command::Stats) => writeln!(out, "{}", format_stats(&engine.stats()))?,
            Some(Command::Reveal) => {
                let cells = engine.toggle_reveal();
                if engine.state().reveal_mode() {
                    writeln!(out, "Ships revealed ({} cells, test mode).", cells.len())?;
                } else {
                    writeln!(out, "Test mode off.")?;
                }
                write!(out, "{}", render_board(engine.state()))?;
            }
            Some(Command::New) => {
                engine.new_game()?;
                writeln!(out, "New game. Good luck, commander!")?;
                write!(out, "{}", render_board(engine.state()))?;
            }
            Some(Command::Fire(r, c)) => {
                let outcome = engine.shoot(r, c)?;
                writeln!(out, "{}: {}", coord_to_string(r, c), outcome)?;
                if outcome.is_resolved() {
                    write!(out, "{}", render_board(engine.state()))?;
                    writeln!(out, "{}", format_stats(&engine.stats()))?;
                }
            }
        }
    }
    Ok(())
}

/// Fire at every cell in row-major order until the fleet is gone.
pub fn sweep<R: Rng>(engine: &mut GameEngine<R>) -> Result<Stats, GameError> {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if let ShotOutcome::Victory { .. } = engine.shoot(row, col)? {
                return Ok(engine.stats());
            }
        }
    }
    Ok(engine.stats())
}
