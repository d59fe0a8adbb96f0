use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which way a translation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Plain text in, Morse notation out.
    #[default]
    #[serde(alias = "encode")]
    TextToMorse,
    /// Morse notation in, plain text out.
    #[serde(alias = "decode")]
    MorseToText,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::TextToMorse => "text-to-morse",
            Direction::MorseToText => "morse-to-text",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Direction::TextToMorse => Direction::MorseToText,
            Direction::MorseToText => Direction::TextToMorse,
        }
    }

    /// Name of the notation the user types in this mode.
    pub fn input_label(&self) -> &'static str {
        match self {
            Direction::TextToMorse => "Text",
            Direction::MorseToText => "Morse",
        }
    }

    pub fn output_label(&self) -> &'static str {
        self.toggled().input_label()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown translation mode '{}' (expected text-to-morse or morse-to-text)",
            self.0
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text-to-morse" | "encode" => Ok(Direction::TextToMorse),
            "morse-to-text" | "decode" => Ok(Direction::MorseToText),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
