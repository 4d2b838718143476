use crate::game::*;

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "phase", content = "data", rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for player 1 to pick.
    Idle,
    /// At least one pick is waiting on the opponent.
    Thinking,
    /// The latest round is on the table; waiting for "next round".
    Revealed(Round),
    /// Somebody reached the target.
    Finished(Seat),
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Thinking => write!(f, "thinking"),
            Self::Revealed(_) => write!(f, "revealed"),
            Self::Finished(_) => write!(f, "finished"),
        }
    }
}
