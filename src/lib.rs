#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
mod ship;
pub mod validation;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::random_fleet;
pub use ship::*;
