use alloc::vec::Vec;
use log::{debug, info, warn};
use rand::Rng;

use crate::{
    common::{GameError, ShotOutcome, Stats},
    config::{GENERATION_ATTEMPTS, STANDARD_FLEET},
    ship::ShipClass,
    state::GameState,
};

/// A play session: owns the random source, the fleet manifest and the game
/// currently in progress.
pub struct GameEngine<R: Rng> {
    rng: R,
    fleet: Vec<ShipClass>,
    state: GameState,
    games_started: u32,
}

impl<R: Rng> GameEngine<R> {
    /// Start a session with the standard fleet and deal the first game.
    pub fn new(rng: R) -> Result<Self, GameError> {
        Self::with_fleet(rng, &STANDARD_FLEET)
    }

    /// Start a session with a custom fleet manifest.
    pub fn with_fleet(mut rng: R, fleet: &[ShipClass]) -> Result<Self, GameError> {
        let state = deal(&mut rng, fleet)?;
        info!("new game with {} ships", fleet.len());
        Ok(Self {
            rng,
            fleet: fleet.to_vec(),
            state,
            games_started: 1,
        })
    }

    /// Discard the current game and deal a fresh one.
    ///
    /// Placement is retried from an empty grid up to
    /// [`GENERATION_ATTEMPTS`] times. If every attempt fails the error is
    /// returned and the current game is left as it was.
    pub fn new_game(&mut self) -> Result<&GameState, GameError> {
        self.state = deal(&mut self.rng, &self.fleet)?;
        self.games_started += 1;
        info!("new game #{}", self.games_started);
        Ok(&self.state)
    }

    /// Fire at (`row`, `col`) in the current game.
    pub fn shoot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
        let outcome = self.state.shoot(row, col)?;
        debug!("shot at ({}, {}): {:?}", row, col, outcome);
        if let ShotOutcome::Victory { total_shots } = outcome {
            info!("fleet destroyed in {} shots", total_shots);
        }
        Ok(outcome)
    }

    /// Flip the debug reveal view and return the cells it flags.
    pub fn toggle_reveal(&mut self) -> Vec<(usize, usize)> {
        let cells = self.state.toggle_reveal();
        debug!("reveal mode {}", if self.state.reveal_mode() { "on" } else { "off" });
        cells
    }

    pub fn stats(&self) -> Stats {
        self.state.stats()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn fleet(&self) -> &[ShipClass] {
        &self.fleet
    }

    /// Games dealt by this session, including the current one.
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

fn deal<R: Rng>(rng: &mut R, fleet: &[ShipClass]) -> Result<GameState, GameError> {
    let mut last_err = GameError::InvalidFleet;
    for attempt in 1..=GENERATION_ATTEMPTS {
        match GameState::random(fleet, rng) {
            Ok(state) => return Ok(state),
            Err(err @ GameError::PlacementFailure { .. }) => {
                warn!(
                    "placement attempt {}/{} failed: {}",
                    attempt, GENERATION_ATTEMPTS, err
                );
                last_err = err;
            }
            Err(err) => return Err(err),
        }
    }
    Err(last_err)
}
