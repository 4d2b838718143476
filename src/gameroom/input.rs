use crate::Ticket;
use crate::game::*;

/// Everything the room reacts to, in the order it arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Player 1 picks a hand.
    Pick(Choice),
    /// Player 1 asks for a hand to be picked at random.
    Random,
    /// Player 1 moves on after a reveal.
    Next,
    /// The opponent's thinking time for a ticket is up.
    Elapsed(Ticket),
    /// Leave the room.
    Quit,
}

/// Button labels: `rock`, `paper`, `scissors`, `random`, `next`, `quit`.
impl TryFrom<&str> for Input {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "random" | "?" => Ok(Self::Random),
            "next" | "n" => Ok(Self::Next),
            "quit" | "q" => Ok(Self::Quit),
            other => Choice::try_from(other).map(Self::Pick),
        }
    }
}
