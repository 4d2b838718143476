use crate::Ticket;
use crate::game::*;
use crate::table::*;

/// Events broadcast by the room to the player and any observers.
/// `Choose` and `Proceed` are prompts; the rest are informational.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Player 1 may pick a hand.
    Choose { progress: Progress },
    /// A pick was accepted and the opponent is thinking.
    Thinking { ticket: Ticket, choice: Choice },
    /// The opponent answered.
    Revealed {
        ticket: Ticket,
        round: Round,
        outcome: Outcome,
        progress: Progress,
    },
    /// Player 1 may start the next round.
    Proceed,
    /// The match is over.
    Winner { seat: Seat, progress: Progress },
    /// An input arrived that the table could not accept.
    Rejected { error: Illegal },
    /// The room is shutting down.
    Closed { progress: Progress, rounds: usize },
}

impl Event {
    pub fn is_prompt(&self) -> bool {
        matches!(self, Self::Choose { .. } | Self::Proceed)
    }
}
