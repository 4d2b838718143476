//! Rock Paper Scissors Binary
//!
//! Plays a match (or endless single rounds) against a random opponent.
//!
//! Options: --mode, --target, --delay, --overlap, --auto, --seed, --json

use clap::Parser;
use roshambo::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    kys();
    let args = cli::Args::parse();
    let console = args.console();
    let mut room = gameroom::Room::new(args.rules(), args.opponent());
    let watcher = match args.auto {
        true => {
            room.sit(players::Fish::default());
            Some(tokio::spawn(console.watch(room.watch())))
        }
        false => {
            room.sit(players::Human::new(console));
            None
        }
    };
    let table = room.run().await;
    if let Some(watcher) = watcher {
        watcher.await?;
    }
    log::info!(
        "session over after {} rounds, {}",
        table.history().len(),
        table.progress()
    );
    Ok(())
}
