use crate::utils::error::Result;
use std::io::Read;

/// Where one-shot input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Positional arguments, joined with single spaces.
    Args(String),
    Stdin,
}

impl InputSource {
    pub fn from_args(text: &[String]) -> Self {
        if text.is_empty() {
            InputSource::Stdin
        } else {
            InputSource::Args(text.join(" "))
        }
    }

    /// Reads the whole input. `reader` is only consulted for [`InputSource::Stdin`].
    pub fn read<R: Read>(&self, mut reader: R) -> Result<String> {
        match self {
            InputSource::Args(text) => Ok(text.clone()),
            InputSource::Stdin => {
                let mut buf = String::new();
                reader.read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}
