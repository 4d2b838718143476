use crate::game::*;
use crate::gameroom::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// CPU participant that plays uniformly at random.
///
/// In seat 1 it presses "choose for me" and always moves on to the next round,
/// but never stacks a second pick while one is still pending.
/// In seat 2 it draws each reply from its own RNG, so a seed reproduces the opponent.
pub struct Fish {
    rng: SmallRng,
    waiting: usize,
}

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            waiting: 0,
        }
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
            waiting: 0,
        }
    }
}

#[async_trait::async_trait]
impl Player for Fish {
    async fn decide(&mut self, prompt: &Event) -> Option<Input> {
        match prompt {
            Event::Choose { .. } if self.waiting == 0 => Some(Input::Random),
            Event::Choose { .. } => None,
            _ => Some(Input::Next),
        }
    }

    async fn notify(&mut self, event: &Event) {
        match event {
            Event::Thinking { .. } => self.waiting += 1,
            Event::Revealed { .. } => self.waiting = self.waiting.saturating_sub(1),
            _ => {}
        }
    }
}

#[async_trait::async_trait]
impl Opponent for Fish {
    async fn reply(&mut self) -> Choice {
        Choice::sample(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_is_reproducible() {
        let mut a = Fish::seeded(9);
        let mut b = Fish::seeded(9);
        for _ in 0..32 {
            assert_eq!(a.reply().await, b.reply().await);
        }
    }

    #[tokio::test]
    async fn does_not_stack_picks() {
        let mut fish = Fish::default();
        let choose = Event::Choose {
            progress: Progress::default(),
        };
        assert_eq!(fish.decide(&choose).await, Some(Input::Random));
        fish.notify(&Event::Thinking {
            ticket: 1,
            choice: Choice::Rock,
        })
        .await;
        assert_eq!(fish.decide(&choose).await, None);
        assert_eq!(fish.decide(&Event::Proceed).await, Some(Input::Next));
    }
}
