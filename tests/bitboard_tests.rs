use salvo::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    // the standard 10x10 grid fits in a u128
    assert!(BitBoard::<u128, 10>::try_new().is_ok());

    let err = BitBoard::<u64, 10>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 10, capacity: 64 })));
}

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());
    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
    assert_eq!(bb.count_ones(), 1);
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    let cells: Vec<_> = bb.cells().collect();
    assert_eq!(cells, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_complement_and_cover() {
    let ship = BitBoard::<u16, 4>::from_cells([(0, 0), (0, 1)]).unwrap();
    let water = !ship;
    assert_eq!(water.count_ones(), 14);
    assert!((water & ship).is_empty());

    let mut hits = BitBoard::<u16, 4>::new();
    hits.set(0, 0).unwrap();
    assert!(!hits.covers(&ship));
    hits |= BitBoard::from_cells([(0, 1), (2, 2)]).unwrap();
    assert!(hits.covers(&ship));
}
