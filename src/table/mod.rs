//! Explicit round state machine.
//!
//! ```text
//! Idle --submit--> Thinking --reveal--> Revealed --advance--> Idle
//!                                  \--> Finished
//! ```
//!
//! The [`Table`] never waits or draws randomness itself. It is told when a
//! pick arrives, when the opponent answers, and when to move on; anything out
//! of order comes back as [`Illegal`] with the table untouched.

mod illegal;
mod phase;
mod rules;
mod table;

pub use illegal::*;
pub use phase::*;
pub use rules::*;
pub use table::*;
