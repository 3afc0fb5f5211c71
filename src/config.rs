use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 10;

/// Fleet composition, shortest ships first.
pub const FLEET: [ShipClass; 4] = [
    ShipClass::new("single-deck", 1, 4),
    ShipClass::new("double-deck", 2, 3),
    ShipClass::new("three-deck", 3, 2),
    ShipClass::new("four-deck", 4, 1),
];

/// Length of the longest class in [`FLEET`].
pub const MAX_SHIP_LENGTH: usize = 4;

/// Total number of cells occupied by a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 * 1 + 3 * 2 + 2 * 3 + 4;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "SEABATTLE_LOG";

/// Look up the fleet class for a ship of `length` cells.
pub fn class_for_length(length: usize) -> Option<ShipClass> {
    FLEET.iter().copied().find(|class| class.length() == length)
}
