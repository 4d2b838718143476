use super::*;
use crate::game::*;

/// Whoever sits in seat 1.
/// Implementations can be humans at a terminal, random clickers, or scripts.
///
/// Each player runs in its own task (see [`Actor`]), so a slow human does not
/// hold up the room's timers.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Answer a prompt ([`Event::Choose`] or [`Event::Proceed`]).
    /// `None` lets the prompt lapse without sending anything.
    async fn decide(&mut self, prompt: &Event) -> Option<Input>;

    /// Receive every event broadcast by the room, prompts included.
    async fn notify(&mut self, event: &Event);
}

/// Whoever sits in seat 2. Asked once per round, after the thinking delay.
#[async_trait::async_trait]
pub trait Opponent: Send {
    async fn reply(&mut self) -> Choice;
}
