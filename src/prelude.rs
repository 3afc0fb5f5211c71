//! Commonly used types and utilities for ease of import.

pub use crate::{random_fleet, Board, BoardError, Coord, ShotResult, BOARD_SIZE, FLEET};

#[cfg(feature = "std")]
pub use crate::init_logging;
