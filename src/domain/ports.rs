use crate::domain::model::Direction;

/// A bidirectional text ↔ Morse converter.
///
/// Both operations are total: anything that cannot be translated is passed
/// through unchanged, so there is no error path.
pub trait Converter: Send + Sync {
    fn encode(&self, text: &str) -> String;
    fn decode(&self, morse: &str) -> String;

    fn translate(&self, direction: Direction, input: &str) -> String {
        match direction {
            Direction::TextToMorse => self.encode(input),
            Direction::MorseToText => self.decode(input),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn default_direction(&self) -> Direction;
    fn log_level(&self) -> Option<&str>;
}
