mod actor;
mod channel;
mod event;
mod input;
mod player;
mod room;

pub use actor::*;
pub use channel::*;
pub use event::*;
pub use input::*;
pub use player::*;
pub use room::*;
