use super::*;
use crate::Ticket;
use crate::game::*;

/// Transitions the table refuses to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, serde::Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum Illegal {
    #[error("cannot pick while {0}")]
    Pick(Phase),
    #[error("cannot start the next round while {0}")]
    Advance(Phase),
    #[error("no pending pick for ticket #{0}")]
    Ticket(Ticket),
    #[error("match is over, player {0} won")]
    Finished(Seat),
}
