//! Ships and their cells ("decks").

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

use crate::common::{BoardError, Coord};
use crate::config::{class_for_length, MAX_SHIP_LENGTH};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// One-cell ship; start and end coincide.
    Single,
    Horizontal,
    Vertical,
}

/// A fleet class: name, ship length and how many such ships a fleet holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
    count: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize, count: usize) -> Self {
        Self {
            name,
            length,
            count,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of ships of this class in a complete fleet.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// One grid unit occupied by a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    alive: bool,
}

impl Cell {
    pub fn new(coord: Coord) -> Self {
        Self { coord, alive: true }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn row(&self) -> i32 {
        self.coord.row
    }

    pub fn column(&self) -> i32 {
        self.coord.col
    }

    /// `false` once the cell has been fired upon.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }
}

/// A straight run of cells between two endpoints.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    id: usize,
    start: Coord,
    end: Coord,
    sunk: bool,
    cells: Vec<Cell>,
}

impl Ship {
    /// Expand `start..=end` into cells.
    ///
    /// Only a single point or a segment ascending along exactly one axis
    /// yields cells; any other pair, reversed segments included, yields an
    /// empty vector. The length is not bounded; see [`Ship::segment_len`].
    pub fn segment_cells(start: Coord, end: Coord) -> Vec<Cell> {
        if start.row == end.row && start.col < end.col {
            (start.col..=end.col)
                .map(|col| Cell::new(Coord::new(start.row, col)))
                .collect()
        } else if start.row < end.row && start.col == end.col {
            (start.row..=end.row)
                .map(|row| Cell::new(Coord::new(row, start.col)))
                .collect()
        } else if start == end {
            let mut cells = Vec::with_capacity(1);
            cells.push(Cell::new(start));
            cells
        } else {
            Vec::new()
        }
    }

    /// Number of cells `segment_cells` would produce, computed without
    /// expanding the segment. `None` for a malformed pair.
    pub fn segment_len(start: Coord, end: Coord) -> Option<u64> {
        let span = |from: i32, to: i32| (i64::from(to) - i64::from(from) + 1) as u64;
        if start.row == end.row && start.col < end.col {
            Some(span(start.col, end.col))
        } else if start.row < end.row && start.col == end.col {
            Some(span(start.row, end.row))
        } else if start == end {
            Some(1)
        } else {
            None
        }
    }

    /// Build ship number `id` spanning `start..=end`.
    ///
    /// The length is checked before any cell is created.
    pub fn new(id: usize, start: Coord, end: Coord) -> Result<Self, BoardError> {
        let length = Self::segment_len(start, end).ok_or(BoardError::InvalidShape {
            index: id,
            start,
            end,
        })?;
        if length > MAX_SHIP_LENGTH as u64 {
            return Err(BoardError::ShipTooLong {
                index: id,
                length,
                max: MAX_SHIP_LENGTH,
            });
        }
        let cells = Self::segment_cells(start, end);
        Ok(Ship {
            id,
            start,
            end,
            sunk: false,
            cells,
        })
    }

    /// Position of the ship in the layout it was built from.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn orientation(&self) -> Orientation {
        if self.start == self.end {
            Orientation::Single
        } else if self.start.row == self.end.row {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Fleet class matching the ship's length, if any.
    pub fn class(&self) -> Option<ShipClass> {
        class_for_length(self.len())
    }

    /// Cell at `coord`, if it belongs to this ship.
    pub fn deck(&self, coord: Coord) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.coord == coord)
    }

    /// Mark the cell at `coord` as hit. Returns `false` if the ship has no
    /// such cell. Firing at a dead cell changes nothing.
    pub fn fire(&mut self, coord: Coord) -> bool {
        match self.cells.iter_mut().find(|cell| cell.coord == coord) {
            Some(cell) => {
                cell.kill();
                if self.cells.iter().all(|cell| !cell.alive) {
                    self.sunk = true;
                }
                true
            }
            None => false,
        }
    }

    /// Check if the ship is sunk (all cells hit).
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Coordinates where no other ship's endpoint may lie: the diagonal
    /// neighbours of every cell, plus the orthogonal neighbours of a
    /// single-cell ship or the cell just past each end of a longer one.
    pub fn forbidden_zone(&self) -> impl Iterator<Item = Coord> + '_ {
        let diagonals = self.cells.iter().flat_map(|cell| cell.coord.diagonals());
        // neighbours beyond the i32 range do not exist and are skipped
        let caps: Vec<Coord> = match self.orientation() {
            Orientation::Single => self.start.orthogonals().collect(),
            Orientation::Horizontal => [self.start.offset(0, -1), self.end.offset(0, 1)]
                .into_iter()
                .flatten()
                .collect(),
            Orientation::Vertical => [self.start.offset(-1, 0), self.end.offset(1, 0)]
                .into_iter()
                .flatten()
                .collect(),
        };
        diagonals.chain(caps)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hits = self.cells.iter().filter(|c| !c.alive).count();
        write!(
            f,
            "Ship {{ id: {}, start: {}, end: {}, orientation: {:?}, hits: {}/{}, sunk: {} }}",
            self.id,
            self.start,
            self.end,
            self.orientation(),
            hits,
            self.cells.len(),
            self.sunk,
        )
    }
}
