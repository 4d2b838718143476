use super::*;

/// One completed pairing of both seats' hands.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Round {
    one: Choice,
    two: Choice,
}

impl Round {
    pub const fn new(one: Choice, two: Choice) -> Self {
        Self { one, two }
    }
    pub fn choice(&self, seat: Seat) -> Choice {
        match seat {
            Seat::P1 => self.one,
            Seat::P2 => self.two,
        }
    }
    pub fn outcome(&self) -> Outcome {
        self.one.versus(self.two)
    }
    pub fn victor(&self) -> Option<Seat> {
        self.outcome().victor()
    }
}

impl From<(Choice, Choice)> for Round {
    fn from((one, two): (Choice, Choice)) -> Self {
        Self::new(one, two)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.one, self.two, self.outcome())
    }
}
