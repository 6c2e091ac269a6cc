use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use salvo::{GameEngine, GameError, ShipClass, ShotOutcome, GRID_SIZE, STANDARD_FLEET};

/// Generator that can be switched to emitting only zeros, which makes every
/// placement draw identical so the second ship of a fleet can never fit.
struct Jammable {
    jammed: bool,
    inner: SmallRng,
}

impl Jammable {
    fn new(seed: u64) -> Self {
        Self {
            jammed: false,
            inner: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RngCore for Jammable {
    fn next_u32(&mut self) -> u32 {
        if self.jammed { 0 } else { self.inner.next_u32() }
    }

    fn next_u64(&mut self) -> u64 {
        if self.jammed { 0 } else { self.inner.next_u64() }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        if self.jammed {
            dst.fill(0);
        } else {
            self.inner.fill_bytes(dst);
        }
    }
}

#[test]
fn test_new_session_deals_a_fresh_game() {
    let engine = GameEngine::new(SmallRng::seed_from_u64(1)).unwrap();
    let stats = engine.stats();
    assert_eq!(stats.shots, 0);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.ships_remaining, STANDARD_FLEET.len());
    assert_eq!(engine.state().grid().occupied_count(), 17);
    assert_eq!(engine.games_started(), 1);
    assert!(!engine.state().reveal_mode());
}

#[test]
fn test_new_game_resets_everything() {
    let mut engine = GameEngine::new(SmallRng::seed_from_u64(3)).unwrap();
    for r in 0..GRID_SIZE {
        engine.shoot(r, r).unwrap();
    }
    engine.toggle_reveal();
    assert_eq!(engine.stats().shots, GRID_SIZE as u32);

    let state = engine.new_game().unwrap();
    assert_eq!(state.shots(), 0);
    assert_eq!(state.hits(), 0);
    assert!(!state.reveal_mode());
    assert!(!state.is_over());
    assert_eq!(engine.games_started(), 2);
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let a = GameEngine::new(SmallRng::seed_from_u64(99)).unwrap();
    let b = GameEngine::new(SmallRng::seed_from_u64(99)).unwrap();
    assert_eq!(a.state(), b.state());
}

#[test]
fn test_toggle_reveal_round_trip() {
    let mut engine = GameEngine::new(SmallRng::seed_from_u64(5)).unwrap();
    let shown = engine.toggle_reveal();
    assert_eq!(shown.len(), 17);
    for &(r, c) in &shown {
        assert!(engine.state().grid().ship_at(r, c).unwrap().is_some());
    }
    assert!(engine.toggle_reveal().is_empty());
}

#[test]
fn test_placement_failure_after_all_attempts() {
    let mut rng = Jammable::new(0);
    rng.jammed = true;
    let err = GameEngine::new(rng).err().unwrap();
    assert!(matches!(err, GameError::PlacementFailure { .. }));
}

#[test]
fn test_failed_new_game_keeps_current_game() {
    let mut engine = GameEngine::new(Jammable::new(11)).unwrap();
    engine.shoot(0, 0).unwrap();
    let before = engine.state().clone();

    engine.rng_mut().jammed = true;
    assert!(matches!(
        engine.new_game(),
        Err(GameError::PlacementFailure { .. })
    ));
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.games_started(), 1);

    engine.rng_mut().jammed = false;
    assert_eq!(engine.new_game().unwrap().shots(), 0);
}

#[test]
fn test_custom_fleet_and_invalid_fleet() {
    let fleet = [ShipClass::new("Raft", 1)];
    let mut engine = GameEngine::with_fleet(SmallRng::seed_from_u64(8), &fleet).unwrap();
    let (r, c) = engine.state().ships()[0].origin();
    assert_eq!(engine.shoot(r, c).unwrap(), ShotOutcome::Victory { total_shots: 1 });
    assert_eq!(engine.shoot(r, c).unwrap(), ShotOutcome::GameOver);

    let too_big = [ShipClass::new("Island", GRID_SIZE + 1)];
    let err = GameEngine::with_fleet(SmallRng::seed_from_u64(8), &too_big).err();
    assert_eq!(err, Some(GameError::InvalidFleet));
}
