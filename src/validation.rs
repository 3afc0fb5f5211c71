//! Fleet legality rules checked once when a board is built.

#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{BTreeMap, BTreeSet};

use crate::common::{BoardError, Coord};
use crate::config::{FLEET, NUM_SHIPS};
use crate::ship::Ship;

/// Map every cell to the id of the ship occupying it, rejecting any cell
/// claimed twice.
pub fn index_cells(ships: &[Ship]) -> Result<BTreeMap<Coord, usize>, BoardError> {
    let mut index = BTreeMap::new();
    for ship in ships {
        for cell in ship.cells() {
            if let Some(first) = index.insert(cell.coord(), ship.id()) {
                return Err(BoardError::Overlap {
                    coord: cell.coord(),
                    first,
                    second: ship.id(),
                });
            }
        }
    }
    Ok(index)
}

/// Union of the forbidden zones of `ships`.
pub fn forbidden_cells<'a, I>(ships: I) -> BTreeSet<Coord>
where
    I: IntoIterator<Item = &'a Ship>,
{
    ships
        .into_iter()
        .flat_map(|ship| ship.forbidden_zone())
        .collect()
}

/// Check fleet size, composition and spacing.
///
/// Ship ids are positions in `ships`, as assigned by [`crate::Board::new`].
/// Ships are counted by the distinct ids found in `index`. Only the two
/// endpoints of each ship are tested against the forbidden set.
pub fn validate_fleet(ships: &[Ship], index: &BTreeMap<Coord, usize>) -> Result<(), BoardError> {
    let ids: BTreeSet<usize> = index.values().copied().collect();
    if ids.len() != NUM_SHIPS {
        return Err(BoardError::ShipCount {
            expected: NUM_SHIPS,
            found: ids.len(),
        });
    }

    for class in FLEET.iter() {
        let found = ids
            .iter()
            .filter(|&&id| ships[id].len() == class.length())
            .count();
        if found != class.count() {
            return Err(BoardError::ClassCount {
                name: class.name(),
                length: class.length(),
                expected: class.count(),
                found,
            });
        }
    }

    let forbidden = forbidden_cells(ids.iter().map(|&id| &ships[id]));
    for &id in &ids {
        let ship = &ships[id];
        for coord in [ship.start(), ship.end()] {
            if forbidden.contains(&coord) {
                return Err(BoardError::Adjacent { ship: id, coord });
            }
        }
    }
    Ok(())
}
