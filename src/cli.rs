use crate::Wins;
use crate::console::*;
use crate::players::Fish;
use crate::table::*;
use clap::Parser;
use std::time::Duration;

/// Rock Paper Scissors against the computer.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Single rounds forever, or a first-to-N match.
    #[arg(long, value_enum, default_value_t = Mode::Match)]
    pub mode: Mode,
    /// Round wins needed to take a match.
    #[arg(long, default_value_t = crate::GAMES_TO_WIN)]
    pub target: Wins,
    /// How long the opponent thinks, e.g. "3s" or "500ms".
    #[arg(long, value_parser = crate::parse_duration)]
    pub delay: Option<Duration>,
    /// Whether you may pick again while the opponent is still thinking.
    #[arg(long, value_enum, default_value_t = Overlap::Serialize)]
    pub overlap: Overlap,
    /// Let the computer click for player 1 too.
    #[arg(long)]
    pub auto: bool,
    /// Seed the opponent for a reproducible game.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print events as JSON lines.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn rules(&self) -> Rules {
        let rules = match self.mode {
            Mode::Single => Rules::single(),
            Mode::Match => Rules::best_of(self.target),
        };
        let rules = rules.with_overlap(self.overlap);
        match self.delay {
            Some(delay) => rules.with_delay(delay),
            None => rules,
        }
    }
    pub fn opponent(&self) -> Fish {
        self.seed.map(Fish::seeded).unwrap_or_default()
    }
    pub fn console(&self) -> Console {
        match self.json {
            true => Console::new(Format::Json),
            false => Console::new(Format::Text),
        }
    }
}
