//! Ship classes, placed ships and the segment shapes used to draw them.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::GameError;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Cells run left to right from the anchor.
    Horizontal,
    /// Cells run top to bottom from the anchor.
    Vertical,
}

impl Orientation {
    /// Cell `offset` steps along the ship from `(row, col)`.
    #[inline]
    pub fn step(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }
}

/// An entry of a fleet manifest: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    size: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Shape of one ship segment, for drawing bow, body and stern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Piece {
    Left,
    HorizontalMid,
    Right,
    Top,
    VerticalMid,
    Bottom,
}

impl Piece {
    fn for_segment(orientation: Orientation, index: usize, size: usize) -> Self {
        let last = index + 1 == size;
        match orientation {
            Orientation::Horizontal if index == 0 => Piece::Left,
            Orientation::Horizontal if last => Piece::Right,
            Orientation::Horizontal => Piece::HorizontalMid,
            Orientation::Vertical if index == 0 => Piece::Top,
            Orientation::Vertical if last => Piece::Bottom,
            Orientation::Vertical => Piece::VerticalMid,
        }
    }
}

/// A ship placed on an N×N grid, with hits tracked in a `BitBoard`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    id: u8,
    class: ShipClass,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BitBoard<T, N>,
    hits: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Place ship `id` of `class` with its first cell at (`row`, `col`).
    pub fn new(
        id: u8,
        class: ShipClass,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, GameError> {
        if class.size() == 0 {
            return Err(GameError::InvalidFleet);
        }
        if !fits::<N>(class.size(), orientation, row, col) {
            return Err(GameError::OutOfBounds { ship: class.name() });
        }
        let mask = BitBoard::from_cells(
            (0..class.size()).map(|i| orientation.step(row, col, i)),
        )?;
        Ok(Ship {
            id,
            class,
            orientation,
            row,
            col,
            mask,
            hits: BitBoard::new(),
        })
    }

    /// Identifier written into the grid, starting at 1.
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    pub fn size(&self) -> usize {
        self.class.size()
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells from bow to stern.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size()).map(move |i| self.orientation.step(self.row, self.col, i))
    }

    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }

    pub fn hits(&self) -> BitBoard<T, N> {
        self.hits
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// Record a hit at (`row`, `col`). Returns `false` if the cell is not
    /// part of this ship.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        self.contains(row, col) && self.hits.set(row, col).is_ok()
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.size()
    }

    /// Segment shape at (`row`, `col`), if the cell belongs to this ship.
    pub fn piece_at(&self, row: usize, col: usize) -> Option<Piece> {
        self.cells()
            .position(|cell| cell == (row, col))
            .map(|i| Piece::for_segment(self.orientation, i, self.size()))
    }
}

/// Whether a run of `size` cells from (`row`, `col`) stays inside `N×N`.
pub(crate) fn fits<const N: usize>(
    size: usize,
    orientation: Orientation,
    row: usize,
    col: usize,
) -> bool {
    if row >= N || col >= N {
        return false;
    }
    match orientation {
        Orientation::Horizontal => col + size <= N,
        Orientation::Vertical => row + size <= N,
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.id,
            self.name(),
            self.row,
            self.col,
            self.orientation,
            self.hits.count_ones(),
            self.size(),
        )
    }
}
