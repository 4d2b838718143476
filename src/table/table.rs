use super::*;
use crate::Ticket;
use crate::game::*;
use std::collections::BTreeMap;

/// Single source of truth for one session: phase, pending picks, tally, and history.
/// Owned by exactly one driver, which feeds it transitions in arrival order.
#[derive(Debug, Clone)]
pub struct Table {
    rules: Rules,
    phase: Phase,
    progress: Progress,
    pending: BTreeMap<Ticket, Choice>,
    history: Vec<Round>,
    tickets: Ticket,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl Table {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            phase: Phase::Idle,
            progress: Progress::default(),
            pending: BTreeMap::new(),
            history: Vec::new(),
            tickets: 0,
        }
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn progress(&self) -> Progress {
        self.progress
    }
    pub fn history(&self) -> &[Round] {
        &self.history
    }
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
    pub fn winner(&self) -> Option<Seat> {
        match self.phase {
            Phase::Finished(seat) => Some(seat),
            _ => None,
        }
    }
}

impl Table {
    /// Player 1 commits to a hand. Returns the ticket the reveal must quote.
    pub fn submit(&mut self, choice: Choice) -> Result<Ticket, Illegal> {
        match (self.phase, self.rules.overlap()) {
            (Phase::Finished(seat), _) => Err(Illegal::Finished(seat)),
            (Phase::Idle, _) | (Phase::Thinking, Overlap::Independent) => {
                self.tickets += 1;
                self.pending.insert(self.tickets, choice);
                self.phase = Phase::Thinking;
                log::debug!("[table] #{} player 1 picks {:?}", self.tickets, choice);
                Ok(self.tickets)
            }
            (phase, _) => Err(Illegal::Pick(phase)),
        }
    }

    /// The opponent answers a pending pick. Completes the round and folds it into the tally.
    pub fn reveal(&mut self, ticket: Ticket, reply: Choice) -> Result<Round, Illegal> {
        if let Phase::Finished(seat) = self.phase {
            return Err(Illegal::Finished(seat));
        }
        let pick = self.pending.remove(&ticket).ok_or(Illegal::Ticket(ticket))?;
        let round = Round::new(pick, reply);
        self.progress.tally(round.outcome());
        self.history.push(round);
        self.phase = match self.rules.target().and_then(|n| self.progress.winner(n)) {
            Some(seat) => {
                self.pending.clear();
                Phase::Finished(seat)
            }
            None => Phase::Revealed(round),
        };
        log::debug!("[table] #{} {} -> {}", ticket, round, self.progress);
        Ok(round)
    }

    /// "Next round". Back to picking, or back to waiting if overlapping picks are still out.
    pub fn advance(&mut self) -> Result<(), Illegal> {
        match self.phase {
            Phase::Revealed(_) if self.pending.is_empty() => {
                self.phase = Phase::Idle;
                Ok(())
            }
            Phase::Revealed(_) => {
                self.phase = Phase::Thinking;
                Ok(())
            }
            Phase::Finished(seat) => Err(Illegal::Finished(seat)),
            phase => Err(Illegal::Advance(phase)),
        }
    }
}
