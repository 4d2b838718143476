use super::*;
use crate::Arbitrary;
use crate::Ticket;
use crate::game::*;
use crate::table::*;
use tokio::sync::mpsc::*;
use tokio::task::JoinHandle;

/// Central coordinator for one session.
/// Owns the [`Table`] and is the only thing that ever mutates it.
///
/// Every source of change is an [`Input`] on a single queue:
/// - the seated player answers prompts through its [`Actor`]
/// - anyone holding [`Room::sender`] may push raw inputs
/// - each accepted pick schedules a timer that posts [`Input::Elapsed`] back into the queue
///
/// When a timer's input comes up, the [`Opponent`] is asked for a fresh hand
/// and the round is revealed. Inputs are handled strictly in queue order.
pub struct Room {
    table: Table,
    channel: Channel<Input>,
    opponent: Box<dyn Opponent>,
    players: Vec<UnboundedSender<Event>>,
    actors: Vec<JoinHandle<()>>,
}

impl Room {
    pub fn new<O>(rules: Rules, opponent: O) -> Self
    where
        O: Opponent + 'static,
    {
        Self {
            table: Table::new(rules),
            channel: Channel::default(),
            opponent: Box::new(opponent),
            players: Vec::new(),
            actors: Vec::new(),
        }
    }

    pub fn sit<P>(&mut self, player: P)
    where
        P: Player + 'static,
    {
        let (inbox, handle) = Actor::spawn(Box::new(player), self.channel.sender());
        self.players.push(inbox);
        self.actors.push(handle);
    }

    /// Subscribe to every event without taking part.
    pub fn watch(&mut self) -> UnboundedReceiver<Event> {
        let (tx, rx) = unbounded_channel();
        self.players.push(tx);
        rx
    }

    /// Raw access to the input queue, for front-ends that are not prompt driven.
    pub fn sender(&self) -> UnboundedSender<Input> {
        self.channel.sender()
    }

    /// Process inputs until someone quits, the match is decided,
    /// or every seat, front-end, and pending timer has let go of the queue.
    /// Returns the table for inspection.
    pub async fn run(mut self) -> Table {
        log::info!("[room] opening: {}", self.table.rules());
        self.channel.release();
        self.prompt();
        while let Some(input) = self.channel.recv().await {
            if input == Input::Quit {
                log::info!("[room] player quit");
                break;
            }
            self.handle(input).await;
            if self.table.phase().is_terminal() {
                break;
            }
        }
        if self.table.pending() > 0 && !self.table.phase().is_terminal() {
            log::debug!("[room] closing with {} picks unanswered", self.table.pending());
        }
        self.close().await;
        self.table
    }
}

impl Room {
    async fn handle(&mut self, input: Input) {
        let result = match input {
            Input::Pick(choice) => self.pick(choice),
            Input::Random => self.pick(Choice::random()),
            Input::Next => self.next(),
            Input::Elapsed(ticket) => self.reveal(ticket).await,
            Input::Quit => Ok(()),
        };
        if let Err(error) = result {
            log::debug!("[room] rejected {:?}: {}", input, error);
            self.broadcast(Event::Rejected { error });
        }
    }

    fn pick(&mut self, choice: Choice) -> Result<(), Illegal> {
        let ticket = self.table.submit(choice)?;
        self.broadcast(Event::Thinking { ticket, choice });
        self.schedule(ticket);
        if self.table.rules().overlap() == Overlap::Independent {
            self.prompt();
        }
        Ok(())
    }

    /// Back to picking. With overlapping picks still out the table is thinking,
    /// but it will take another pick, so the player is prompted either way.
    fn next(&mut self) -> Result<(), Illegal> {
        self.table.advance()?;
        self.prompt();
        Ok(())
    }

    async fn reveal(&mut self, ticket: Ticket) -> Result<(), Illegal> {
        let reply = self.opponent.reply().await;
        let round = self.table.reveal(ticket, reply)?;
        let progress = self.table.progress();
        self.broadcast(Event::Revealed {
            ticket,
            round,
            outcome: round.outcome(),
            progress,
        });
        match self.table.winner() {
            Some(seat) => {
                log::info!("[room] player {} wins {}", seat, progress);
                self.broadcast(Event::Winner { seat, progress });
            }
            None => self.broadcast(Event::Proceed),
        }
        Ok(())
    }

    /// The opponent thinks for the configured delay.
    fn schedule(&self, ticket: Ticket) {
        self.channel
            .post_after(Input::Elapsed(ticket), self.table.rules().delay());
    }

    fn prompt(&self) {
        self.broadcast(Event::Choose {
            progress: self.table.progress(),
        });
    }

    async fn close(&mut self) {
        self.broadcast(Event::Closed {
            progress: self.table.progress(),
            rounds: self.table.history().len(),
        });
        self.players.clear();
        for actor in self.actors.drain(..) {
            if tokio::time::timeout(Self::grace(), actor).await.is_err() {
                log::debug!("[room] player still busy at close, leaving it behind");
            }
        }
    }

    fn broadcast(&self, event: Event) {
        self.players
            .iter()
            .map(|inbox| inbox.send(event.clone()))
            .enumerate()
            .filter_map(|(i, res)| res.err().map(|e| (i, e)))
            .for_each(|(i, e)| log::debug!("failed broadcast to #{}: {:?}", i, e.0));
    }
}

impl Room {
    fn grace() -> std::time::Duration {
        std::time::Duration::from_secs(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::*;
    use std::time::Duration;
    use tokio::time::Instant;

    fn drain(mut rx: UnboundedReceiver<Event>) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn scripted_match() {
        let mut room = Room::new(
            Rules::best_of(3),
            Rigged::from([Choice::Scissors, Choice::Rock, Choice::Scissors, Choice::Scissors]),
        );
        room.sit(Script::from([
            Input::Pick(Choice::Rock),
            Input::Next,
            Input::Pick(Choice::Scissors),
            Input::Next,
            Input::Pick(Choice::Rock),
            Input::Next,
            Input::Pick(Choice::Rock),
        ]));
        let events = room.watch();
        let start = Instant::now();
        let table = room.run().await;
        assert!(start.elapsed() >= Duration::from_secs(12));
        assert_eq!(table.winner(), Some(Seat::P1));
        assert_eq!(table.progress(), Progress::new(3, 1));
        assert_eq!(table.history().len(), 4);
        let events = drain(events);
        assert_eq!(
            events.iter().filter(|e| matches!(e, Event::Revealed { .. })).count(),
            4
        );
        assert!(events.contains(&Event::Winner {
            seat: Seat::P1,
            progress: Progress::new(3, 1)
        }));
        assert!(matches!(events.last(), Some(Event::Closed { rounds: 4, .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn thinking_delay() {
        let mut room = Room::new(
            Rules::best_of(1).with_delay(Duration::from_secs(3)),
            Rigged::from([Choice::Paper]),
        );
        room.sit(Script::from([Input::Pick(Choice::Rock)]));
        let start = Instant::now();
        let table = room.run().await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(3), "{:?}", elapsed);
        assert!(elapsed < Duration::from_secs(4), "{:?}", elapsed);
        assert_eq!(table.winner(), Some(Seat::P2));
    }

    #[tokio::test(start_paused = true)]
    async fn quit_before_playing() {
        let mut room = Room::new(Rules::default(), Fish::seeded(7));
        room.sit(Script::from([Input::Quit]));
        let events = room.watch();
        let table = room.run().await;
        assert!(table.history().is_empty());
        assert_eq!(
            drain(events),
            vec![
                Event::Choose {
                    progress: Progress::default()
                },
                Event::Closed {
                    progress: Progress::default(),
                    rounds: 0
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn serialized_picks() {
        let mut room = Room::new(Rules::best_of(3), Rigged::from([Choice::Rock]));
        let events = room.watch();
        let sender = room.sender();
        sender.send(Input::Pick(Choice::Paper)).unwrap();
        sender.send(Input::Pick(Choice::Scissors)).unwrap();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            sender.send(Input::Quit).unwrap();
        });
        let table = room.run().await;
        assert_eq!(table.history(), &[Round::new(Choice::Paper, Choice::Rock)]);
        assert!(drain(events).contains(&Event::Rejected {
            error: Illegal::Pick(Phase::Thinking)
        }));
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_picks() {
        let rules = Rules::best_of(3).with_overlap(Overlap::Independent);
        let mut room = Room::new(rules, Rigged::from([Choice::Scissors, Choice::Paper]));
        let events = room.watch();
        let sender = room.sender();
        tokio::spawn(async move {
            sender.send(Input::Pick(Choice::Rock)).unwrap();
            tokio::time::sleep(Duration::from_secs(1)).await;
            sender.send(Input::Pick(Choice::Scissors)).unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            sender.send(Input::Next).unwrap();
            sender.send(Input::Quit).unwrap();
        });
        let table = room.run().await;
        assert_eq!(table.progress(), Progress::new(2, 0));
        assert_eq!(
            table.history(),
            &[
                Round::new(Choice::Rock, Choice::Scissors),
                Round::new(Choice::Scissors, Choice::Paper),
            ]
        );
        let events = drain(events);
        assert!(!events.iter().any(|e| matches!(e, Event::Rejected { .. })));
        let chooses = events.iter().filter(|e| matches!(e, Event::Choose { .. })).count();
        assert_eq!(chooses, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn single_player_keeps_going() {
        let mut room = Room::new(Rules::single(), Rigged::from([Choice::Scissors; 5]));
        room.sit(Script::from([
            Input::Pick(Choice::Rock),
            Input::Next,
            Input::Pick(Choice::Rock),
            Input::Next,
            Input::Pick(Choice::Rock),
            Input::Next,
            Input::Pick(Choice::Rock),
            Input::Next,
        ]));
        let table = room.run().await;
        assert_eq!(table.progress(), Progress::new(4, 0));
        assert_eq!(table.winner(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn random_clicker_finishes() {
        let mut room = Room::new(Rules::best_of(3), Fish::seeded(42));
        room.sit(Fish::seeded(43));
        let table = room.run().await;
        let winner = table.winner().expect("a match with a random clicker ends");
        assert_eq!(table.progress().wins(winner), 3);
        assert_eq!(table.progress(), table.history().iter().copied().collect::<Progress>());
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_senders_drop() {
        let mut room = Room::new(Rules::best_of(3), Fish::seeded(3));
        let sender = room.sender();
        sender.send(Input::Pick(Choice::Paper)).unwrap();
        drop(sender);
        let table = tokio::time::timeout(Duration::from_secs(3600), room.run())
            .await
            .expect("room returns once nobody can send to it");
        assert!(table.history().is_empty());
        assert_eq!(table.phase(), Phase::Thinking);
    }

    #[tokio::test(start_paused = true)]
    async fn pending_timer_outlives_senders() {
        let mut room = Room::new(Rules::best_of(3), Rigged::from([Choice::Rock]));
        let events = room.watch();
        let sender = room.sender();
        tokio::spawn(async move {
            sender.send(Input::Pick(Choice::Paper)).unwrap();
            tokio::time::sleep(Duration::from_secs(1)).await;
        });
        let table = tokio::time::timeout(Duration::from_secs(3600), room.run())
            .await
            .expect("room returns after the last timer fires");
        assert_eq!(table.history(), &[Round::new(Choice::Paper, Choice::Rock)]);
        assert!(matches!(drain(events).last(), Some(Event::Closed { rounds: 1, .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn next_prompts_while_picks_pending() {
        let rules = Rules::best_of(3).with_overlap(Overlap::Independent);
        let mut room = Room::new(rules, Rigged::from([Choice::Scissors, Choice::Paper]));
        let events = room.watch();
        let sender = room.sender();
        tokio::spawn(async move {
            sender.send(Input::Pick(Choice::Rock)).unwrap();
            tokio::time::sleep(Duration::from_secs(1)).await;
            sender.send(Input::Pick(Choice::Scissors)).unwrap();
            tokio::time::sleep(Duration::from_millis(2500)).await;
            sender.send(Input::Next).unwrap();
            tokio::time::sleep(Duration::from_secs(2)).await;
            sender.send(Input::Quit).unwrap();
        });
        let table = room.run().await;
        assert_eq!(table.history().len(), 2);
        let events = drain(events);
        let proceed = events
            .iter()
            .position(|e| *e == Event::Proceed)
            .expect("first reveal asks to proceed");
        assert_eq!(
            events.get(proceed + 1),
            Some(&Event::Choose {
                progress: Progress::new(1, 0)
            })
        );
        assert!(matches!(events.get(proceed + 2), Some(Event::Revealed { ticket: 2, .. })));
    }
}
