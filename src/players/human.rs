use crate::console::Console;
use crate::game::*;
use crate::gameroom::*;
use dialoguer::Select;

/// Interactive seat-1 player at the terminal.
/// Renders every event itself so prompts and output never interleave.
#[derive(Debug, Default)]
pub struct Human {
    console: Console,
    waiting: usize,
}

impl Human {
    pub fn new(console: Console) -> Self {
        Self {
            console,
            waiting: 0,
        }
    }
    fn selection(prompt: &str, labels: &[String]) -> Option<usize> {
        Select::new()
            .with_prompt(prompt)
            .report(false)
            .items(labels)
            .default(0)
            .interact()
            .inspect_err(|e| log::warn!("[human] prompt failed: {}", e))
            .ok()
    }
    fn choose(&self) -> Option<Input> {
        let mut options = Choice::ALL
            .iter()
            .map(|c| (format!("{} {}", c, c.label()), Some(Input::Pick(*c))))
            .collect::<Vec<_>>();
        options.push((String::from("Choose for me"), Some(Input::Random)));
        if self.waiting > 0 {
            options.push((String::from("Keep waiting"), None));
        }
        options.push((String::from("Quit"), Some(Input::Quit)));
        let labels = options.iter().map(|(l, _)| l.clone()).collect::<Vec<_>>();
        match Self::selection("Your hand", &labels) {
            Some(i) => options.get(i).and_then(|(_, input)| *input),
            None => Some(Input::Quit),
        }
    }
    fn proceed(&self) -> Option<Input> {
        let labels = [String::from("Next round"), String::from("Quit")];
        match Self::selection("Again?", &labels) {
            Some(0) => Some(Input::Next),
            _ => Some(Input::Quit),
        }
    }
}

#[async_trait::async_trait]
impl Player for Human {
    async fn decide(&mut self, prompt: &Event) -> Option<Input> {
        match prompt {
            Event::Choose { .. } => self.choose(),
            Event::Proceed => self.proceed(),
            _ => None,
        }
    }

    async fn notify(&mut self, event: &Event) {
        match event {
            Event::Thinking { .. } => self.waiting += 1,
            Event::Revealed { .. } => self.waiting = self.waiting.saturating_sub(1),
            _ => {}
        }
        self.console.print(event);
    }
}
