use crate::core::symbol_table::SymbolTable;
use crate::domain::ports::Converter;

/// Separator between encoded words.
pub const WORD_SEPARATOR: &str = " / ";

/// Translates between plain text and Morse notation using the global
/// [`SymbolTable`]. Cheap to construct and `Copy`.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    table: &'static SymbolTable,
}

impl Translator {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::global(),
        }
    }

    /// Encodes plain text. Case is folded, whitespace runs become a single
    /// ` / ` and characters outside the table are copied as-is.
    pub fn encode(&self, text: &str) -> String {
        let upper = text.to_uppercase();
        let mut out = String::with_capacity(upper.len() * 4);

        for (i, word) in upper.split_whitespace().enumerate() {
            if i > 0 {
                out.push_str(WORD_SEPARATOR);
            }
            for (j, c) in word.chars().enumerate() {
                if j > 0 {
                    out.push(' ');
                }
                match self.table.symbol_for(c) {
                    Some(symbol) => out.push_str(symbol),
                    None => out.push(c),
                }
            }
        }

        tracing::trace!(input_len = text.len(), output_len = out.len(), "encoded");
        out
    }

    /// Decodes Morse notation. Groups split on `/` are joined with one space
    /// each, so empty groups (`//`, leading or trailing `/`) still contribute
    /// their separators. Unknown tokens are copied as-is.
    pub fn decode(&self, morse: &str) -> String {
        let mut out = String::with_capacity(morse.len() / 2);

        for (i, group) in morse.split('/').enumerate() {
            if i > 0 {
                out.push(' ');
            }
            for token in group.split_whitespace() {
                match self.table.char_for(token) {
                    Some(c) => out.push(c),
                    None => out.push_str(token),
                }
            }
        }

        tracing::trace!(input_len = morse.len(), output_len = out.len(), "decoded");
        out
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for Translator {
    fn encode(&self, text: &str) -> String {
        Translator::encode(self, text)
    }

    fn decode(&self, morse: &str) -> String {
        Translator::decode(self, morse)
    }
}

/// Encodes `text` with the default [`Translator`].
pub fn encode(text: &str) -> String {
    Translator::new().encode(text)
}

/// Decodes `morse` with the default [`Translator`].
pub fn decode(morse: &str) -> String {
    Translator::new().decode(morse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Direction;

    #[test]
    fn test_encode_basic() {
        assert_eq!(encode("SOS"), "... --- ...");
        assert_eq!(encode("SOS SOS"), "... --- ... / ... --- ...");
        assert_eq!(encode("Hi!"), ".... .. -.-.--");
    }

    #[test]
    fn test_encode_empty_and_blank() {
        assert_eq!(encode(""), "");
        assert_eq!(encode(" \t\n "), "");
    }

    #[test]
    fn test_encode_collapses_whitespace() {
        assert_eq!(encode("  e \t\n  t  "), ". / -");
    }

    #[test]
    fn test_encode_passes_through_unknown() {
        assert_eq!(encode("A#B"), ".- # -...");
        assert_eq!(encode("#%"), "# %");
    }

    #[test]
    fn test_encode_folds_non_ascii_case() {
        // 'é' uppercases to 'É', which is not in the table.
        assert_eq!(encode("é"), "É");
    }

    #[test]
    fn test_decode_basic() {
        assert_eq!(decode("... --- ..."), "SOS");
        assert_eq!(decode("... --- ... / ... --- ..."), "SOS SOS");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_decode_collision_is_digit_one() {
        for _ in 0..3 {
            assert_eq!(decode(".----"), "1");
        }
    }

    #[test]
    fn test_decode_passes_through_unknown_tokens() {
        assert_eq!(decode(".- ........ -..."), "A........B");
        assert_eq!(decode("hello"), "hello");
    }

    #[test]
    fn test_decode_empty_groups() {
        assert_eq!(decode("... // ..."), "S  S");
        assert_eq!(decode("/ ..."), " S");
        assert_eq!(decode("... /"), "S ");
        assert_eq!(decode("/"), " ");
        assert_eq!(decode("   "), "");
    }

    #[test]
    fn test_decode_tolerates_irregular_spacing() {
        assert_eq!(decode("  ...   ---\t...\n"), "SOS");
        assert_eq!(decode("...---..."), "...---...");
    }

    #[test]
    fn test_converter_translate_dispatches_on_direction() {
        let translator = Translator::default();
        assert_eq!(
            Converter::translate(&translator, Direction::TextToMorse, "e"),
            "."
        );
        assert_eq!(
            Converter::translate(&translator, Direction::MorseToText, "."),
            "E"
        );
    }
}
