use crate::game::*;
use crate::gameroom::*;
use colored::Colorize;
use tokio::sync::mpsc::UnboundedReceiver;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    format: Format,
}

impl Console {
    pub fn new(format: Format) -> Self {
        Self { format }
    }
    pub fn format(&self) -> Format {
        self.format
    }

    /// Print events until the room hangs up.
    pub async fn watch(self, mut events: UnboundedReceiver<Event>) {
        while let Some(ref event) = events.recv().await {
            self.print(event);
        }
    }

    pub fn print(&self, event: &Event) {
        if let Some(text) = self.render(event) {
            println!("{}", text);
        }
    }

    pub fn render(&self, event: &Event) -> Option<String> {
        match self.format {
            Format::Text => Self::text(event),
            Format::Json => serde_json::to_string(event)
                .inspect_err(|e| log::warn!("cannot encode {:?}: {}", event, e))
                .ok(),
        }
    }

    fn text(event: &Event) -> Option<String> {
        match event {
            Event::Choose { progress } => Some(format!(
                "\n{}\nPlayer 1, choose your hand",
                progress.to_string().dimmed()
            )),
            Event::Thinking { ticket, choice } => Some(format!(
                "#{:<3} {}  ··  {}",
                ticket,
                choice,
                "3 2 1...".italic()
            )),
            Event::Revealed {
                ticket,
                round,
                outcome,
                progress,
            } => Some(format!(
                "#{:<3} {}  {}  {}\n{}",
                ticket,
                round.choice(Seat::P1),
                round.choice(Seat::P2),
                Self::outcome(*outcome),
                progress.to_string().dimmed()
            )),
            Event::Proceed => None,
            Event::Winner { seat, .. } => {
                Some(format!("Player {} wins!", seat).bold().green().to_string())
            }
            Event::Rejected { error } => Some(error.to_string().yellow().to_string()),
            Event::Closed { progress, rounds } => Some(format!(
                "{} rounds played, final score {}",
                rounds, progress
            )),
        }
    }

    fn outcome(outcome: Outcome) -> colored::ColoredString {
        match outcome {
            Outcome::Win => outcome.to_string().green(),
            Outcome::Lose => outcome.to_string().red(),
            Outcome::Draw => outcome.to_string().cyan(),
        }
    }
}
