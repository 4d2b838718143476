use crate::Arbitrary;
use crate::game::*;
use crate::gameroom::*;
use std::collections::VecDeque;

/// Seat-1 player that answers prompts from a fixed list, then quits.
#[derive(Debug, Default)]
pub struct Script(VecDeque<Input>);

impl<const N: usize> From<[Input; N]> for Script {
    fn from(inputs: [Input; N]) -> Self {
        Self(VecDeque::from(inputs))
    }
}

impl FromIterator<Input> for Script {
    fn from_iter<I: IntoIterator<Item = Input>>(inputs: I) -> Self {
        Self(inputs.into_iter().collect())
    }
}

#[async_trait::async_trait]
impl Player for Script {
    async fn decide(&mut self, _: &Event) -> Option<Input> {
        Some(self.0.pop_front().unwrap_or(Input::Quit))
    }

    async fn notify(&mut self, _: &Event) {}
}

/// Seat-2 opponent that plays a fixed list of hands, then falls back to random.
#[derive(Debug, Default)]
pub struct Rigged(VecDeque<Choice>);

impl<const N: usize> From<[Choice; N]> for Rigged {
    fn from(choices: [Choice; N]) -> Self {
        Self(VecDeque::from(choices))
    }
}

impl FromIterator<Choice> for Rigged {
    fn from_iter<I: IntoIterator<Item = Choice>>(choices: I) -> Self {
        Self(choices.into_iter().collect())
    }
}

#[async_trait::async_trait]
impl Opponent for Rigged {
    async fn reply(&mut self) -> Choice {
        self.0.pop_front().unwrap_or_else(Choice::random)
    }
}
