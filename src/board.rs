//! Board state: the fleet, the coordinate index and shot resolution.

#[cfg(not(feature = "std"))]
use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

use core::fmt::{self, Write};

use crate::common::{BoardError, Coord, ShotResult};
use crate::config::BOARD_SIZE;
use crate::placement::random_fleet;
use crate::ship::Ship;
use crate::validation::{index_cells, validate_fleet};
use rand::Rng;

/// Glyph for a live ship cell in [`Board::render`].
pub const LIVE_GLYPH: char = '\u{25A1}';

/// A validated fleet and the index from each occupied coordinate to its ship.
#[derive(Clone)]
pub struct Board {
    ships: Vec<Ship>,
    index: BTreeMap<Coord, usize>,
}

impl Board {
    /// Build a board from `(start, end)` segments, one per ship.
    ///
    /// Ship ids follow the order of `segments`. Fails if a segment is
    /// malformed, if ships overlap, or if the fleet breaks the size,
    /// composition or spacing rules.
    pub fn new<I, C>(segments: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (C, C)>,
        C: Into<Coord>,
    {
        let ships = segments
            .into_iter()
            .enumerate()
            .map(|(id, (start, end))| Ship::new(id, start.into(), end.into()))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| log::warn!("rejected fleet: {}", e))?;

        let index = index_cells(&ships).inspect_err(|e| log::warn!("rejected fleet: {}", e))?;
        validate_fleet(&ships, &index).inspect_err(|e| log::warn!("rejected fleet: {}", e))?;

        log::debug!("board ready: {} ships, {} cells", ships.len(), index.len());
        Ok(Board { ships, index })
    }

    /// Build a board from a randomly generated legal fleet.
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        Board::new(random_fleet(rng)?)
    }

    /// Resolve a shot at `coord`.
    ///
    /// Repeated shots at a dead cell report `Hit` or `Sunk` again.
    pub fn fire<C: Into<Coord>>(&mut self, coord: C) -> ShotResult {
        let coord = coord.into();
        let result = match self.index.get(&coord) {
            None => ShotResult::Miss,
            Some(&id) => {
                let ship = &mut self.ships[id];
                ship.fire(coord);
                if ship.is_sunk() {
                    ShotResult::Sunk
                } else {
                    ShotResult::Hit
                }
            }
        };
        log::debug!("fire at {}: {}", coord, result);
        result
    }

    /// Ships in layout order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ship occupying `coord`, if any.
    pub fn ship_at<C: Into<Coord>>(&self, coord: C) -> Option<&Ship> {
        self.index.get(&coord.into()).map(|&id| &self.ships[id])
    }

    /// Every occupied coordinate, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
        self.index.keys().copied()
    }

    /// Number of ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Glyph for the board cell at `coord`.
    fn glyph(&self, coord: Coord) -> char {
        match self.ship_at(coord) {
            None => '~',
            Some(ship) if ship.is_sunk() => 'x',
            Some(ship) => match ship.deck(coord) {
                Some(cell) if cell.is_alive() => LIVE_GLYPH,
                _ => '*',
            },
        }
    }

    /// Text dump of the 10×10 grid, one line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = BOARD_SIZE as i32;
        for row in 0..n {
            for col in 0..n {
                if col > 0 {
                    f.write_char(' ')?;
                }
                f.write_char(self.glyph(Coord::new(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  afloat: {},\n  ships: {:?}\n}}",
            self.ships_afloat(),
            self.ships
        )
    }
}
