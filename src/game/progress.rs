use super::*;
use crate::Wins;

/// Running tally of rounds won per seat.
/// Draws move neither counter.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Progress([Wins; 2]);

impl Progress {
    pub const fn new(one: Wins, two: Wins) -> Self {
        Self([one, two])
    }
    pub fn wins(&self, seat: Seat) -> Wins {
        self.0[seat.index()]
    }
    pub fn tally(&mut self, outcome: Outcome) {
        if let Some(seat) = outcome.victor() {
            self.0[seat.index()] += 1;
        }
    }
    pub fn rounds(&self) -> Wins {
        self.0.iter().sum()
    }
    /// First seat to reach `target` wins.
    pub fn winner(&self, target: Wins) -> Option<Seat> {
        [Seat::P1, Seat::P2]
            .into_iter()
            .find(|seat| self.wins(*seat) >= target)
    }
}

impl From<(Wins, Wins)> for Progress {
    fn from((one, two): (Wins, Wins)) -> Self {
        Self::new(one, two)
    }
}

impl FromIterator<Round> for Progress {
    fn from_iter<I: IntoIterator<Item = Round>>(rounds: I) -> Self {
        rounds.into_iter().fold(Self::default(), |mut progress, round| {
            progress.tally(round.outcome());
            progress
        })
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player 1 — {} / {} — Player 2",
            self.wins(Seat::P1),
            self.wins(Seat::P2)
        )
    }
}
