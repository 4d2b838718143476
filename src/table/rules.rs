use crate::GAMES_TO_WIN;
use crate::THINKING_DELAY;
use crate::Wins;
use std::time::Duration;

/// Which game is being played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Endless rounds against the computer; nobody ever wins the session.
    Single,
    /// First to the target number of round wins.
    #[default]
    Match,
}

/// What happens to a pick made while the opponent is still thinking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Overlap {
    /// Rejected. At most one round is ever pending.
    #[default]
    Serialize,
    /// Accepted as its own pending round with its own timer.
    Independent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    mode: Mode,
    target: Wins,
    delay: Duration,
    overlap: Overlap,
}

impl Rules {
    pub fn single() -> Self {
        Self {
            mode: Mode::Single,
            target: GAMES_TO_WIN,
            delay: Duration::ZERO,
            overlap: Overlap::default(),
        }
    }
    pub fn best_of(target: Wins) -> Self {
        Self {
            mode: Mode::Match,
            target: target.max(1),
            delay: THINKING_DELAY,
            overlap: Overlap::default(),
        }
    }
    pub fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }
    pub fn with_overlap(self, overlap: Overlap) -> Self {
        Self { overlap, ..self }
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn delay(&self) -> Duration {
        self.delay
    }
    pub fn overlap(&self) -> Overlap {
        self.overlap
    }
    /// Wins needed to end the session. Single-player sessions never end on their own.
    pub fn target(&self) -> Option<Wins> {
        match self.mode {
            Mode::Single => None,
            Mode::Match => Some(self.target),
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::from(Mode::default())
    }
}

impl From<Mode> for Rules {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Single => Self::single(),
            Mode::Match => Self::best_of(GAMES_TO_WIN),
        }
    }
}

impl std::fmt::Display for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.target() {
            Some(n) => write!(f, "first to {} ({:?} thinking)", n, self.delay),
            None => write!(f, "single rounds ({:?} thinking)", self.delay),
        }
    }
}
