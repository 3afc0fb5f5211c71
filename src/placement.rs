//! Random generation of legal fleet layouts.

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeSet, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeSet, vec::Vec};

use rand::Rng;

use crate::common::{BoardError, Coord};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::ship::Ship;

const MAX_SHIP_ATTEMPTS: usize = 100;
const MAX_FLEET_ATTEMPTS: usize = 50;

/// Generate `(start, end)` segments for a complete fleet that
/// [`crate::Board::new`] accepts. All cells lie on the board.
///
/// Ships are placed longest first; if one cannot be fitted the whole
/// layout is restarted.
pub fn random_fleet<R: Rng>(rng: &mut R) -> Result<Vec<(Coord, Coord)>, BoardError> {
    for attempt in 1..=MAX_FLEET_ATTEMPTS {
        if let Some(fleet) = try_fleet(rng) {
            return Ok(fleet);
        }
        log::debug!("fleet placement attempt {} failed, retrying", attempt);
    }
    Err(BoardError::UnableToPlaceFleet)
}

fn try_fleet<R: Rng>(rng: &mut R) -> Option<Vec<(Coord, Coord)>> {
    let mut blocked = BTreeSet::new();
    let mut fleet = Vec::with_capacity(NUM_SHIPS);
    for class in FLEET.iter().rev() {
        for _ in 0..class.count() {
            let (start, end) = random_segment(rng, class.length(), &blocked)?;
            // a ship blocks its own cells and the ring around them
            for cell in Ship::segment_cells(start, end) {
                let c = cell.coord();
                blocked.insert(c);
                blocked.extend(c.orthogonals());
                blocked.extend(c.diagonals());
            }
            fleet.push((start, end));
        }
    }
    Some(fleet)
}

/// Random in-bounds segment of `length` cells avoiding `blocked`.
fn random_segment<R: Rng>(
    rng: &mut R,
    length: usize,
    blocked: &BTreeSet<Coord>,
) -> Option<(Coord, Coord)> {
    let n = BOARD_SIZE as i32;
    let span = length as i32 - 1;
    for _ in 0..MAX_SHIP_ATTEMPTS {
        let horizontal = rng.random_bool(0.5);
        let (max_r, max_c) = if horizontal {
            (n - 1, n - 1 - span)
        } else {
            (n - 1 - span, n - 1)
        };
        let start = Coord::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
        let end = if horizontal {
            Coord::new(start.row, start.col + span)
        } else {
            Coord::new(start.row + span, start.col)
        };
        let free = Ship::segment_cells(start, end)
            .iter()
            .all(|cell| !blocked.contains(&cell.coord()));
        if free {
            return Some((start, end));
        }
    }
    None
}
