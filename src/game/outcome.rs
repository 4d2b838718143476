use super::*;

/// Result of a round from the first seat's perspective.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same result seen from the other seat.
    pub const fn flip(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Draw => Self::Draw,
        }
    }
    /// Seat credited with the round, if anyone.
    pub const fn victor(self) -> Option<Seat> {
        match self {
            Self::Win => Some(Seat::P1),
            Self::Lose => Some(Seat::P2),
            Self::Draw => None,
        }
    }
}

impl From<(Choice, Choice)> for Outcome {
    fn from((a, b): (Choice, Choice)) -> Self {
        a.versus(b)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "Win"),
            Self::Lose => write!(f, "Lose"),
            Self::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn victors() {
        assert_eq!(Outcome::from((Choice::Paper, Choice::Rock)).victor(), Some(Seat::P1));
        assert_eq!(Outcome::from((Choice::Rock, Choice::Paper)).victor(), Some(Seat::P2));
        assert_eq!(Outcome::from((Choice::Rock, Choice::Rock)).victor(), None);
    }

    #[test]
    fn flip_is_involution() {
        for o in [Outcome::Win, Outcome::Lose, Outcome::Draw] {
            assert_eq!(o.flip().flip(), o);
        }
    }
}
