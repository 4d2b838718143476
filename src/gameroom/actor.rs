use super::*;
use tokio::sync::mpsc::*;
use tokio::task::JoinHandle;

/// Wrapper that runs a Player in its own async task.
/// Handles message passing between Room and Player implementation.
///
/// - Room broadcasts every Event to the actor
/// - Actor forwards each Event to Player::notify
/// - On prompts, Actor calls Player::decide and sends the Input back to Room
/// - Actor stops on Event::Closed or when the Room hangs up
pub struct Actor {
    player: Box<dyn Player>,
    getter: UnboundedReceiver<Event>,
    sender: UnboundedSender<Input>,
}

impl Actor {
    pub fn spawn(
        player: Box<dyn Player>,
        sender: UnboundedSender<Input>,
    ) -> (UnboundedSender<Event>, JoinHandle<()>) {
        let (tx, rx) = unbounded_channel();
        let actor = Self {
            player,
            sender,
            getter: rx,
        };
        (tx, tokio::spawn(actor.run()))
    }
    async fn run(mut self) {
        while let Some(ref event) = self.getter.recv().await {
            self.player.notify(event).await;
            if event.is_prompt() {
                self.act(event).await;
            }
            if let Event::Closed { .. } = event {
                break;
            }
        }
    }
    async fn act(&mut self, prompt: &Event) {
        if let Some(input) = self.player.decide(prompt).await {
            if let Err(e) = self.sender.send(input) {
                log::warn!("[actor] room hung up before {:?}", e.0);
            }
        }
    }
}
