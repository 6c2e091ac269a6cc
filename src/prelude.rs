//! Commonly used types for ease of import.

pub use crate::{
    CellMark, GameEngine, GameError, GameState, Orientation, ShotOutcome, Stats, GRID_SIZE,
    STANDARD_FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, render_board, run_interactive, sweep};
