use super::*;
use crate::Arbitrary;
use rand::Rng;

/// A hand thrown by either seat.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// The hand this one defeats.
    pub const fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// Resolve this hand against another, from this hand's perspective.
    pub fn versus(self, other: Self) -> Outcome {
        match (self, other) {
            (a, b) if a == b => Outcome::Draw,
            (a, b) if a.beats() == b => Outcome::Win,
            _ => Outcome::Lose,
        }
    }
    /// Uniform draw from a caller-supplied source of entropy.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        Self::sample(rng)
    }
}

impl TryFrom<&str> for Choice {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" | "✊" => Ok(Self::Rock),
            "paper" | "p" | "✋" => Ok(Self::Paper),
            "scissors" | "s" | "✌️" | "✌" => Ok(Self::Scissors),
            other => Err(anyhow::anyhow!("{:?} is not rock, paper, or scissors", other)),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "✊"),
            Self::Paper => write!(f, "✋"),
            Self::Scissors => write!(f, "✌️"),
        }
    }
}
