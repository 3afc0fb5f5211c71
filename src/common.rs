//! Common types for the board: coordinates, shot results and board errors.

use core::fmt;

use crate::config::BOARD_SIZE;

/// A `(row, column)` position. Nothing restricts it to the 10×10 grid; a
/// coordinate outside the board simply never matches a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by `(dr, dc)`, or `None` if either axis overflows.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Some(Self::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?))
    }

    fn neighbours(self, deltas: [(i32, i32); 4]) -> impl Iterator<Item = Coord> {
        deltas
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// The diagonal neighbours that exist in `i32` space.
    pub fn diagonals(self) -> impl Iterator<Item = Coord> {
        self.neighbours([(1, 1), (-1, -1), (1, -1), (-1, 1)])
    }

    /// The orthogonal neighbours that exist in `i32` space.
    pub fn orthogonals(self) -> impl Iterator<Item = Coord> {
        self.neighbours([(1, 0), (-1, 0), (0, 1), (0, -1)])
    }

    /// Whether the coordinate lies on the visible board.
    pub fn in_bounds(self) -> bool {
        let n = BOARD_SIZE as i32;
        (0..n).contains(&self.row) && (0..n).contains(&self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of firing at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// No ship occupies the coordinate.
    Miss,
    /// A ship was hit and still has live cells.
    Hit,
    /// Every cell of the ship has been hit.
    Sunk,
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotResult::Miss => write!(f, "Miss!"),
            ShotResult::Hit => write!(f, "Hit!"),
            ShotResult::Sunk => write!(f, "Sunk!"),
        }
    }
}

/// Errors returned while building a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A segment is neither a single point nor an ascending straight line.
    InvalidShape { index: usize, start: Coord, end: Coord },
    /// Total number of ships differs from the fleet size.
    ShipCount { expected: usize, found: usize },
    /// Number of ships of one length differs from the fleet composition.
    ClassCount {
        name: &'static str,
        length: usize,
        expected: usize,
        found: usize,
    },
    /// Two ships claim the same cell.
    Overlap { coord: Coord, first: usize, second: usize },
    /// A segment is longer than any ship in the fleet.
    ShipTooLong { index: usize, length: u64, max: usize },
    /// A ship endpoint touches another ship, diagonals included.
    Adjacent { ship: usize, coord: Coord },
    /// Random placement gave up.
    UnableToPlaceFleet,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidShape { index, start, end } => write!(
                f,
                "ship #{} from {} to {} is not a single cell or an ascending straight line",
                index, start, end
            ),
            BoardError::ShipCount { expected, found } => write!(
                f,
                "the total number of the ships should be {}, found {}",
                expected, found
            ),
            BoardError::ClassCount {
                name,
                expected,
                found,
                ..
            } => {
                let plural = if *expected == 1 { "" } else { "s" };
                write!(
                    f,
                    "there should be {} {} ship{}, found {}",
                    expected, name, plural, found
                )
            }
            BoardError::Overlap {
                coord,
                first,
                second,
            } => write!(
                f,
                "ships #{} and #{} both occupy cell {}",
                first, second, coord
            ),
            BoardError::ShipTooLong { index, length, max } => write!(
                f,
                "ship #{} is {} cells long, the longest ship has {}",
                index, length, max
            ),
            BoardError::Adjacent { ship, coord } => write!(
                f,
                "ships shouldn't be located in the neighboring cells \
                 (even if cells are neighbors by diagonal): ship #{} at {}",
                ship, coord
            ),
            BoardError::UnableToPlaceFleet => write!(f, "Unable to place fleet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
