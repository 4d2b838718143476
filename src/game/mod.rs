//! The rules of Rock Paper Scissors, free of any timing or I/O.
//!
//! A [`Round`] pairs two [`Choice`]s and resolves to an [`Outcome`] from the
//! first seat's perspective. [`Progress`] folds rounds into a running tally and
//! decides when a match is over.

mod choice;
mod outcome;
mod progress;
mod round;
mod seat;

pub use choice::*;
pub use outcome::*;
pub use progress::*;
pub use round::*;
pub use seat::*;
