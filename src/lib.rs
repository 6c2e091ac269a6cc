#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
#[cfg(feature = "std")]
mod cli;
mod common;
mod config;
mod game;
pub mod generator;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;
mod state;

pub use bitboard::{BitBoard, BitBoardError, Cells};
pub use board::{Grid, WATER};
#[cfg(feature = "std")]
pub use cli::*;
pub use common::*;
pub use config::*;
pub use game::GameEngine;
pub use generator::{generate, validate_fleet, PlacementSource, RandomPlacement};
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
pub use ship::{Orientation, Piece, Ship, ShipClass};
pub use state::{FleetShip, GameState};
