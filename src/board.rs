//! Occupancy grid: which ship, if any, sits on each cell.

use core::fmt;

use crate::common::GameError;
use crate::ship::{fits, Orientation};

/// Cell value for open water.
pub const WATER: u8 = 0;

/// An N×N occupancy grid. Each cell holds [`WATER`] or the id of the ship
/// covering it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<const N: usize> {
    cells: [[u8; N]; N],
}

impl<const N: usize> Grid<N> {
    /// An all-water grid.
    pub fn new() -> Self {
        Self {
            cells: [[WATER; N]; N],
        }
    }

    /// Side length.
    pub const fn size(&self) -> usize {
        N
    }

    /// Raw cell value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<u8, GameError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(GameError::InvalidCoordinate { row, col })
    }

    /// Id of the ship covering (row, col), `None` for water.
    pub fn ship_at(&self, row: usize, col: usize) -> Result<Option<u8>, GameError> {
        Ok(match self.get(row, col)? {
            WATER => None,
            id => Some(id),
        })
    }

    /// Number of cells covered by ships.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&v| v != WATER)
            .count()
    }

    pub fn water_count(&self) -> usize {
        N * N - self.occupied_count()
    }

    /// Whether a run of `size` cells from (row, col) is inside the grid and
    /// all water.
    pub fn is_free_run(&self, size: usize, orientation: Orientation, row: usize, col: usize) -> bool {
        fits::<N>(size, orientation, row, col)
            && (0..size).all(|i| {
                let (r, c) = orientation.step(row, col, i);
                self.cells[r][c] == WATER
            })
    }

    /// Writes `id` into every cell of the run. Callers check
    /// [`Grid::is_free_run`] first.
    pub(crate) fn mark_run(
        &mut self,
        id: u8,
        size: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) {
        for i in 0..size {
            let (r, c) = orientation.step(row, col, i);
            self.cells[r][c] = id;
        }
    }

    /// Rows of raw cell values.
    pub fn rows(&self) -> &[[u8; N]; N] {
        &self.cells
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{N}x{N}>:")?;
        for row in &self.cells {
            for &v in row {
                if v == WATER {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{v} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
