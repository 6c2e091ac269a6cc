//! Game state and shot resolution.

use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

use crate::{
    bitboard::BitBoard,
    board::Grid,
    common::{CellMark, GameError, ShotOutcome, Stats},
    config::GRID_SIZE,
    generator::{self, PlacementSource, RandomPlacement},
    ship::{Orientation, Piece, Ship, ShipClass},
};

/// Mask type used for shot tracking on the standard grid.
type BB = BitBoard<u128, GRID_SIZE>;

/// A ship on the standard grid.
pub type FleetShip = Ship<u128, GRID_SIZE>;

/// Everything one game needs: the layout, the ships and the shot history.
///
/// A `GameState` is an owned value; start a new game by building a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    grid: Grid<GRID_SIZE>,
    ships: Vec<FleetShip>,
    fleet_mask: BB,
    misses: BB,
    hits: BB,
    sunk: BB,
    shots_count: u32,
    hits_count: u32,
    game_over: bool,
    reveal_mode: bool,
}

impl GameState {
    /// Lay out `fleet` with draws from `source`.
    pub fn generate<S>(fleet: &[ShipClass], source: &mut S) -> Result<Self, GameError>
    where
        S: PlacementSource + ?Sized,
    {
        let (grid, ships) = generator::generate::<u128, GRID_SIZE, S>(fleet, source)?;
        Ok(Self::from_layout(grid, ships))
    }

    /// Lay out `fleet` at random.
    pub fn random<R: Rng>(fleet: &[ShipClass], rng: &mut R) -> Result<Self, GameError> {
        Self::generate(fleet, &mut RandomPlacement::new(rng))
    }

    /// Lay out `fleet` at explicit `(row, col, orientation)` anchors, one per
    /// ship in manifest order.
    pub fn with_fleet(
        fleet: &[ShipClass],
        placements: &[(usize, usize, Orientation)],
    ) -> Result<Self, GameError> {
        generator::validate_fleet::<u128, GRID_SIZE>(fleet)?;
        if fleet.len() != placements.len() {
            return Err(GameError::InvalidFleet);
        }
        let mut grid = Grid::new();
        let mut ships = Vec::with_capacity(fleet.len());
        for (idx, (class, &(row, col, orientation))) in fleet.iter().zip(placements).enumerate() {
            let id = u8::try_from(idx + 1).map_err(|_| GameError::InvalidFleet)?;
            let ship = FleetShip::new(id, *class, orientation, row, col)?;
            if !grid.is_free_run(class.size(), orientation, row, col) {
                return Err(GameError::Overlap { ship: class.name() });
            }
            grid.mark_run(id, class.size(), orientation, row, col);
            ships.push(ship);
        }
        Ok(Self::from_layout(grid, ships))
    }

    fn from_layout(grid: Grid<GRID_SIZE>, ships: Vec<FleetShip>) -> Self {
        let fleet_mask = ships.iter().fold(BB::new(), |acc, s| acc | s.mask());
        Self {
            grid,
            ships,
            fleet_mask,
            misses: BB::new(),
            hits: BB::new(),
            sunk: BB::new(),
            shots_count: 0,
            hits_count: 0,
            game_over: false,
            reveal_mode: false,
        }
    }

    /// Fire at (`row`, `col`).
    ///
    /// Coordinates outside the grid are an error. Repeat shots and shots
    /// after victory are reported as [`ShotOutcome::AlreadyShot`] and
    /// [`ShotOutcome::GameOver`] and leave the state untouched.
    pub fn shoot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
        let target = self.grid.ship_at(row, col)?;
        if self.game_over {
            return Ok(ShotOutcome::GameOver);
        }
        if self.cell_mark(row, col)? != CellMark::Unshot {
            debug!("repeat shot at ({}, {}) ignored", row, col);
            return Ok(ShotOutcome::AlreadyShot);
        }

        let Some(id) = target else {
            self.misses.set(row, col)?;
            self.shots_count += 1;
            return Ok(ShotOutcome::Miss);
        };

        // grid and ship must agree before any counter moves
        let ship = self
            .ships
            .iter_mut()
            .find(|s| s.id() == id && s.contains(row, col))
            .ok_or(GameError::UnknownShip { id })?;
        self.hits.set(row, col)?;
        ship.register_hit(row, col);
        self.shots_count += 1;
        self.hits_count += 1;
        if !ship.is_sunk() {
            return Ok(ShotOutcome::Hit);
        }

        self.sunk |= ship.mask();
        let ship_name = ship.name();
        info!("{} sunk after {} shots", ship_name, self.shots_count);
        if self.ships.iter().all(FleetShip::is_sunk) {
            self.game_over = true;
            return Ok(ShotOutcome::Victory {
                total_shots: self.shots_count,
            });
        }
        Ok(ShotOutcome::Sunk { ship_name })
    }

    /// Visible state of (`row`, `col`).
    pub fn cell_mark(&self, row: usize, col: usize) -> Result<CellMark, GameError> {
        Ok(if self.sunk.get(row, col)? {
            CellMark::Sunk
        } else if self.hits.get(row, col)? {
            CellMark::Hit
        } else if self.misses.get(row, col)? {
            CellMark::Miss
        } else {
            CellMark::Unshot
        })
    }

    /// Segment shape at (`row`, `col`) once that cell has been hit.
    pub fn visible_piece(&self, row: usize, col: usize) -> Result<Option<Piece>, GameError> {
        if !self.hits.get(row, col)? {
            return Ok(None);
        }
        Ok(self.ships.iter().find_map(|s| s.piece_at(row, col)))
    }

    /// Switch the debug view on or off and return the cells it flags.
    pub fn set_reveal_mode(&mut self, enabled: bool) -> Vec<(usize, usize)> {
        self.reveal_mode = enabled;
        self.revealed_cells()
    }

    pub fn toggle_reveal(&mut self) -> Vec<(usize, usize)> {
        self.set_reveal_mode(!self.reveal_mode)
    }

    /// Ship cells not shot yet, row-major; empty unless reveal mode is on.
    pub fn revealed_cells(&self) -> Vec<(usize, usize)> {
        if !self.reveal_mode {
            return Vec::new();
        }
        (self.fleet_mask & !(self.hits | self.misses)).cells().collect()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            shots: self.shots_count,
            hits: self.hits_count,
            ships_remaining: self.ships_remaining(),
        }
    }

    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    pub fn sunk_count(&self) -> usize {
        self.ships.len() - self.ships_remaining()
    }

    pub fn shots(&self) -> u32 {
        self.shots_count
    }

    pub fn hits(&self) -> u32 {
        self.hits_count
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn reveal_mode(&self) -> bool {
        self.reveal_mode
    }

    pub fn grid(&self) -> &Grid<GRID_SIZE> {
        &self.grid
    }

    /// Ships in manifest order.
    pub fn ships(&self) -> &[FleetShip] {
        &self.ships
    }

    /// Ship carrying `id`.
    pub fn ship(&self, id: u8) -> Option<&FleetShip> {
        self.ships.iter().find(|s| s.id() == id)
    }
}
