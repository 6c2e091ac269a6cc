use crate::ship::ShipClass;

/// Side length of the standard square grid.
pub const GRID_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet placed at the start of every standard game, in placement order.
pub const STANDARD_FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random anchors tried per ship before placement gives up.
pub const PLACEMENT_TRIALS: usize = 2000;

/// Full regenerations attempted by a session before a placement failure
/// is reported to the caller.
pub const GENERATION_ATTEMPTS: usize = 5;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "SALVO_LOG";
