use crate::domain::model::Direction;
use crate::domain::ports::Converter;

pub const HELP_TEXT: &str = "\
Commands:
  :text     translate text to Morse
  :morse    translate Morse to text
  :toggle   switch direction
  :help     show this help
  :quit     leave the session (also :q)
Any other line is translated in the current direction.";

/// What the front-end should do with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Output(String),
    Switched(Direction),
    Help,
    Quit,
}

/// Interactive translation state: a converter plus the current direction.
pub struct Session<C: Converter> {
    converter: C,
    direction: Direction,
}

impl<C: Converter> Session<C> {
    pub fn new(converter: C, direction: Direction) -> Self {
        Self {
            converter,
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Prompt shown before each line, named after the notation being typed.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.direction.input_label())
    }

    pub fn switch_to(&mut self, direction: Direction) {
        if direction != self.direction {
            tracing::debug!("switching direction: {} -> {}", self.direction, direction);
        }
        self.direction = direction;
    }

    pub fn handle_line(&mut self, line: &str) -> SessionEvent {
        match line.trim() {
            ":text" => {
                self.switch_to(Direction::TextToMorse);
                SessionEvent::Switched(self.direction)
            }
            ":morse" => {
                self.switch_to(Direction::MorseToText);
                SessionEvent::Switched(self.direction)
            }
            ":toggle" => {
                self.switch_to(self.direction.toggled());
                SessionEvent::Switched(self.direction)
            }
            ":help" => SessionEvent::Help,
            ":quit" | ":q" => SessionEvent::Quit,
            _ => SessionEvent::Output(self.converter.translate(self.direction, line)),
        }
    }
}
