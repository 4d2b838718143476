//! Rock Paper Scissors against a randomized opponent.
//!
//! - [`game`] holds the pure rules: hands, outcomes, rounds, and the running tally.
//! - [`table`] is the explicit round state machine.
//! - [`gameroom`] drives a table from an async input queue, including the opponent's thinking delay.
//! - [`players`] provides human, random, and scripted participants.
pub mod game;
pub mod gameroom;
pub mod players;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod console;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Rounds won by one seat.
pub type Wins = usize;
/// Sequence number handed out for every accepted pick.
pub type Ticket = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Rounds a seat must win to take a match.
pub const GAMES_TO_WIN: Wins = 3;
/// How long the opponent "thinks" before revealing in a match.
pub const THINKING_DELAY: std::time::Duration = std::time::Duration::from_secs(3);
/// Environment variable selecting the terminal log level.
pub const LOG_LEVEL_VAR: &str = "ROSHAMBO_LOG";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file.
/// Terminal level comes from `ROSHAMBO_LOG`, WARN when unset, so the board stays readable.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let level = std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Warn);
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Interactive prompts swallow the signal otherwise.
#[cfg(feature = "cli")]
pub fn kys() {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("cannot listen for interrupt: {}", e);
            return;
        }
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}

/// Parse duration string like "250ms", "3s", "1m" into Duration.
pub fn parse_duration(s: &str) -> anyhow::Result<std::time::Duration> {
    let s = s.trim();
    let split = s
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| anyhow::anyhow!("duration {:?} is missing a unit", s))?;
    let (num, unit) = s.split_at(split);
    let value: u64 = num.parse()?;
    match unit {
        "ms" => Ok(std::time::Duration::from_millis(value)),
        "s" => Ok(std::time::Duration::from_secs(value)),
        "m" => value
            .checked_mul(60)
            .map(std::time::Duration::from_secs)
            .ok_or_else(|| anyhow::anyhow!("duration {:?} is too long", s)),
        _ => Err(anyhow::anyhow!("unknown duration unit {:?}", unit)),
    }
}
