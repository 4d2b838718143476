//! Terminal rendering of the room's event stream.
//!
//! [`Console`] turns each [`Event`](crate::gameroom::Event) into at most one
//! printable chunk, either as colored text for people or as one JSON object
//! per line for other programs.
mod console;

pub use console::*;
