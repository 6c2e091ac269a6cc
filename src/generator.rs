//! Random fleet placement.
//!
//! Ships are placed one at a time in manifest order. Each ship gets a fixed
//! budget of random trials; there is no backtracking across ships, so a
//! ship that runs out of trials fails the whole generation and the caller
//! starts over with a fresh grid.

use alloc::vec::Vec;
use log::{debug, trace};
use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::board::Grid;
use crate::common::GameError;
use crate::config::PLACEMENT_TRIALS;
use crate::ship::{Orientation, Ship, ShipClass};

/// Source of the random draws used for placement.
///
/// Production code wraps a `rand` generator in [`RandomPlacement`]; tests
/// can script exact draws.
pub trait PlacementSource {
    fn next_orientation(&mut self) -> Orientation;

    /// Anchor cell drawn uniformly over a `grid_size × grid_size` grid.
    fn next_anchor(&mut self, grid_size: usize) -> (usize, usize);
}

/// [`PlacementSource`] backed by any `rand` generator.
pub struct RandomPlacement<'a, R: Rng> {
    rng: &'a mut R,
}

impl<'a, R: Rng> RandomPlacement<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PlacementSource for RandomPlacement<'_, R> {
    fn next_orientation(&mut self) -> Orientation {
        if self.rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    fn next_anchor(&mut self, grid_size: usize) -> (usize, usize) {
        let r = self.rng.random_range(0..grid_size);
        let c = self.rng.random_range(0..grid_size);
        (r, c)
    }
}

/// Place every ship of `fleet` on an empty `N×N` grid.
///
/// Ship ids are assigned from 1 in manifest order. Returns
/// [`GameError::PlacementFailure`] naming the first ship that exhausted
/// its trials; nothing of the partial layout escapes.
pub fn generate<T, const N: usize, S>(
    fleet: &[ShipClass],
    source: &mut S,
) -> Result<(Grid<N>, Vec<Ship<T, N>>), GameError>
where
    T: PrimInt + Unsigned + Zero,
    S: PlacementSource + ?Sized,
{
    validate_fleet::<T, N>(fleet)?;

    let mut grid = Grid::<N>::new();
    let mut ships = Vec::with_capacity(fleet.len());
    for (idx, class) in fleet.iter().enumerate() {
        let id = u8::try_from(idx + 1).map_err(|_| GameError::InvalidFleet)?;
        let (orientation, row, col) = find_slot(&grid, *class, source)
            .ok_or(GameError::PlacementFailure { ship: class.name() })?;
        grid.mark_run(id, class.size(), orientation, row, col);
        ships.push(Ship::new(id, *class, orientation, row, col)?);
        debug!(
            "placed {} (id {}) at ({}, {}) {:?}",
            class.name(),
            id,
            row,
            col,
            orientation
        );
    }
    Ok((grid, ships))
}

/// Checks that `fleet` could ever be laid out on an `N×N` grid tracked in
/// `T`-wide masks.
pub fn validate_fleet<T, const N: usize>(fleet: &[ShipClass]) -> Result<(), GameError>
where
    T: PrimInt + Unsigned + Zero,
{
    BitBoard::<T, N>::try_new()?;
    if fleet.is_empty() || fleet.len() > usize::from(u8::MAX) {
        return Err(GameError::InvalidFleet);
    }
    if fleet.iter().any(|s| s.size() == 0 || s.size() > N) {
        return Err(GameError::InvalidFleet);
    }
    if fleet.iter().map(|s| s.size()).sum::<usize>() > N * N {
        return Err(GameError::InvalidFleet);
    }
    Ok(())
}

fn find_slot<const N: usize, S>(
    grid: &Grid<N>,
    class: ShipClass,
    source: &mut S,
) -> Option<(Orientation, usize, usize)>
where
    S: PlacementSource + ?Sized,
{
    for trial in 1..=PLACEMENT_TRIALS {
        let orientation = source.next_orientation();
        let (row, col) = source.next_anchor(N);
        if grid.is_free_run(class.size(), orientation, row, col) {
            trace!("{} fit after {} trials", class.name(), trial);
            return Some((orientation, row, col));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws, cycling when exhausted.
    struct Scripted {
        draws: Vec<(Orientation, (usize, usize))>,
        next: usize,
        taken: usize,
    }

    impl Scripted {
        fn new(draws: Vec<(Orientation, (usize, usize))>) -> Self {
            Self {
                draws,
                next: 0,
                taken: 0,
            }
        }

        fn current(&self) -> (Orientation, (usize, usize)) {
            self.draws[self.next % self.draws.len()]
        }
    }

    impl PlacementSource for Scripted {
        fn next_orientation(&mut self) -> Orientation {
            self.current().0
        }

        fn next_anchor(&mut self, _grid_size: usize) -> (usize, usize) {
            let (_, anchor) = self.current();
            self.next += 1;
            self.taken += 1;
            anchor
        }
    }

    const PAIR: [ShipClass; 2] = [ShipClass::new("Skiff", 2), ShipClass::new("Sloop", 3)];

    #[test]
    fn scripted_draws_give_exact_layout() {
        let mut source = Scripted::new(vec![
            (Orientation::Horizontal, (0, 0)),
            // overlaps the skiff
            (Orientation::Vertical, (0, 1)),
            // runs off the right edge
            (Orientation::Horizontal, (4, 4)),
            (Orientation::Vertical, (1, 4)),
        ]);
        let (grid, ships) = generate::<u32, 5, _>(&PAIR, &mut source).unwrap();

        assert_eq!(source.taken, 4);
        assert_eq!(grid.get(0, 0).unwrap(), 1);
        assert_eq!(grid.get(0, 1).unwrap(), 1);
        let sloop: Vec<_> = ships[1].cells().collect();
        assert_eq!(sloop, vec![(1, 4), (2, 4), (3, 4)]);
        for (r, c) in sloop {
            assert_eq!(grid.get(r, c).unwrap(), 2);
        }
        assert_eq!(grid.occupied_count(), 5);
    }

    #[test]
    fn exhausted_trials_report_the_stuck_ship() {
        // every draw lands on the skiff's cells, so the sloop never fits
        let mut source = Scripted::new(vec![(Orientation::Horizontal, (0, 0))]);
        let err = generate::<u32, 5, _>(&PAIR, &mut source).unwrap_err();

        assert_eq!(err, GameError::PlacementFailure { ship: "Sloop" });
        assert_eq!(source.taken, 1 + PLACEMENT_TRIALS);
    }

    #[test]
    fn impossible_fleets_are_rejected_up_front() {
        let too_long = [ShipClass::new("Barge", 6)];
        let mut source = Scripted::new(vec![(Orientation::Horizontal, (0, 0))]);
        assert_eq!(
            generate::<u32, 5, _>(&too_long, &mut source).unwrap_err(),
            GameError::InvalidFleet
        );

        let empty_hull = [ShipClass::new("Ghost", 0)];
        assert_eq!(
            validate_fleet::<u32, 5>(&empty_hull).unwrap_err(),
            GameError::InvalidFleet
        );

        // 11x11 needs 121 bits
        assert!(matches!(
            validate_fleet::<u64, 11>(&PAIR),
            Err(GameError::BitBoard(_))
        ));
        assert_eq!(source.taken, 0);
    }
}
