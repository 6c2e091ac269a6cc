//! Common types: engine errors, shot outcomes and per-cell marks.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Result of a shot attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum ShotOutcome {
    /// Shot landed on water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot hit the last intact cell of a ship.
    Sunk { ship_name: &'static str },
    /// Shot sank the last ship afloat.
    Victory { total_shots: u32 },
    /// Cell was already resolved; nothing changed.
    AlreadyShot,
    /// Game is already won; nothing changed.
    GameOver,
}

impl ShotOutcome {
    /// Whether the shot changed the game state.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, ShotOutcome::AlreadyShot | ShotOutcome::GameOver)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "Splash! Only water there."),
            ShotOutcome::Hit => write!(f, "Hit! You found part of a ship."),
            ShotOutcome::Sunk { ship_name } => write!(f, "You sank the {ship_name}!"),
            ShotOutcome::Victory { total_shots } => {
                write!(f, "Victory! You sank every ship in {total_shots} shots.")
            }
            ShotOutcome::AlreadyShot => write!(f, "You already fired there. Pick another cell."),
            ShotOutcome::GameOver => write!(f, "The game is over. Start a new one."),
        }
    }
}

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum CellMark {
    #[default]
    Unshot,
    Miss,
    Hit,
    /// Belongs to a sunk ship; replaces `Hit`.
    Sunk,
}

/// Counters exposed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Stats {
    pub shots: u32,
    pub hits: u32,
    pub ships_remaining: usize,
}

/// Errors returned by placement and shot operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Underlying mask error.
    BitBoard(BitBoardError),
    /// Ship ran out of placement trials; regenerate from scratch.
    PlacementFailure { ship: &'static str },
    /// Coordinate lies outside the grid.
    InvalidCoordinate { row: usize, col: usize },
    /// Fleet cannot be laid out on this grid at all.
    InvalidFleet,
    /// Explicit placement runs off the grid.
    OutOfBounds { ship: &'static str },
    /// Explicit placement shares a cell with another ship.
    Overlap { ship: &'static str },
    /// Grid names a ship id that no ship carries.
    UnknownShip { id: u8 },
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => {
                GameError::InvalidCoordinate { row, col }
            }
            other => GameError::BitBoard(other),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BitBoard(e) => write!(f, "bitboard error: {e}"),
            GameError::PlacementFailure { ship } => {
                write!(f, "could not place the {ship}; try generating again")
            }
            GameError::InvalidCoordinate { row, col } => {
                write!(f, "coordinate ({row}, {col}) is outside the grid")
            }
            GameError::InvalidFleet => write!(f, "fleet does not fit on this grid"),
            GameError::OutOfBounds { ship } => write!(f, "the {ship} does not fit on the grid"),
            GameError::Overlap { ship } => write!(f, "the {ship} overlaps another ship"),
            GameError::UnknownShip { id } => write!(f, "no ship with id {id} on the grid"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
