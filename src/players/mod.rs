//! Concrete participants for the room.
//!
//! - [`Fish`] — random clicker in seat 1, uniform random opponent in seat 2
//! - [`Script`] / [`Rigged`] — fixed sequences for tests and demos
//! - [`Human`] — interactive terminal player (requires `cli` feature)
mod fish;
#[cfg(feature = "cli")]
mod human;
mod script;

pub use fish::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use script::*;
