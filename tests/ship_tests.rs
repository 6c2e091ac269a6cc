use salvo::{GameError, Orientation, Piece, Ship, ShipClass};

#[test]
fn test_new_and_mask() -> Result<(), GameError> {
    const N: usize = 5;
    let class = ShipClass::new("Test", 3);
    let ship = Ship::<u32, N>::new(1, class, Orientation::Horizontal, 2, 1)?;
    for c in 1..4 {
        assert!(ship.mask().get(2, c)?);
    }
    assert_eq!(ship.mask().count_ones(), 3);
    assert_eq!(ship.id(), 1);
    Ok(())
}

#[test]
fn test_cells_run_bow_to_stern() -> Result<(), GameError> {
    let ship = Ship::<u32, 5>::new(2, ShipClass::new("Test", 4), Orientation::Vertical, 0, 0)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    for (r, c) in cells {
        assert!(ship.contains(r, c));
    }
    assert!(!ship.contains(4, 0));
    Ok(())
}

#[test]
fn test_out_of_bounds() {
    let class = ShipClass::new("Long", 3);
    let err = Ship::<u32, 5>::new(1, class, Orientation::Horizontal, 0, 3).unwrap_err();
    assert_eq!(err, GameError::OutOfBounds { ship: "Long" });
    let err = Ship::<u32, 5>::new(1, class, Orientation::Vertical, 3, 0).unwrap_err();
    assert_eq!(err, GameError::OutOfBounds { ship: "Long" });
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), GameError> {
    let mut ship = Ship::<u16, 4>::new(1, ShipClass::new("Test", 2), Orientation::Horizontal, 1, 1)?;
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(1, 1));
    assert!(!ship.is_sunk());
    // a repeat does not count twice
    assert!(ship.register_hit(1, 1));
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(1, 2));
    assert!(ship.is_sunk());
    assert!(!ship.register_hit(0, 0));
    assert!(ship.mask().covers(&ship.hits()));
    Ok(())
}

#[test]
fn test_pieces_follow_orientation() -> Result<(), GameError> {
    let h = Ship::<u128, 10>::new(1, ShipClass::new("H", 3), Orientation::Horizontal, 4, 2)?;
    assert_eq!(h.piece_at(4, 2), Some(Piece::Left));
    assert_eq!(h.piece_at(4, 3), Some(Piece::HorizontalMid));
    assert_eq!(h.piece_at(4, 4), Some(Piece::Right));
    assert_eq!(h.piece_at(5, 2), None);

    let v = Ship::<u128, 10>::new(2, ShipClass::new("V", 2), Orientation::Vertical, 8, 9)?;
    assert_eq!(v.piece_at(8, 9), Some(Piece::Top));
    assert_eq!(v.piece_at(9, 9), Some(Piece::Bottom));
    Ok(())
}
