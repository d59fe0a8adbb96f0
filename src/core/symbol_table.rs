use std::collections::HashMap;
use std::sync::LazyLock;

/// The fixed alphabet: letters, digits, then punctuation.
///
/// `1` and `'` share `.----`; see [`SymbolTable::char_for`] for which one
/// decoding yields.
const ALPHABET: [(char, &str); 54] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----"),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

static SYMBOL_TABLE: LazyLock<SymbolTable> = LazyLock::new(|| SymbolTable::from_entries(&ALPHABET));

/// A Morse string claimed by more than one character, and the character
/// that decoding resolves it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub symbol: &'static str,
    pub winner: char,
    pub candidates: Vec<char>,
}

/// Immutable character ↔ Morse mapping with O(1) lookups both ways.
#[derive(Debug)]
pub struct SymbolTable {
    entries: Vec<(char, &'static str)>,
    forward: HashMap<char, &'static str>,
    reverse: HashMap<&'static str, char>,
}

impl SymbolTable {
    /// The process-wide table, built on first use.
    pub fn global() -> &'static SymbolTable {
        &SYMBOL_TABLE
    }

    fn from_entries(entries: &[(char, &'static str)]) -> Self {
        let mut forward = HashMap::with_capacity(entries.len());
        let mut reverse: HashMap<&'static str, char> = HashMap::with_capacity(entries.len());

        for &(c, symbol) in entries {
            forward.insert(c, symbol);
            reverse
                .entry(symbol)
                .and_modify(|current| {
                    if outranks(c, *current) {
                        *current = c;
                    }
                })
                .or_insert(c);
        }

        Self {
            entries: entries.to_vec(),
            forward,
            reverse,
        }
    }

    /// Morse string for an (already uppercased) character.
    pub fn symbol_for(&self, c: char) -> Option<&'static str> {
        self.forward.get(&c).copied()
    }

    /// Character for a Morse string.
    ///
    /// When several characters share a string, alphanumerics win over
    /// punctuation and otherwise the earlier table entry wins. For the
    /// fixed alphabet this makes `.----` decode to `1`, never `'`.
    pub fn char_for(&self, symbol: &str) -> Option<char> {
        self.reverse.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Every Morse string shared by more than one character.
    pub fn collisions(&self) -> Vec<Collision> {
        let mut collisions: Vec<Collision> = Vec::new();

        for (symbol, &winner) in &self.reverse {
            let candidates: Vec<char> = self
                .entries
                .iter()
                .filter(|(_, s)| s == symbol)
                .map(|(c, _)| *c)
                .collect();

            if candidates.len() > 1 {
                collisions.push(Collision {
                    symbol: *symbol,
                    winner,
                    candidates,
                });
            }
        }

        collisions.sort_by_key(|c| c.symbol);
        collisions
    }
}

/// Whether `challenger` should replace `current` as the decoding of a shared
/// Morse string. Ties keep the incumbent.
fn outranks(challenger: char, current: char) -> bool {
    challenger.is_ascii_alphanumeric() && !current.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_every_entry() {
        let table = SymbolTable::global();
        assert_eq!(table.len(), 54);

        for c in ('A'..='Z').chain('0'..='9') {
            assert!(table.symbol_for(c).is_some(), "missing {}", c);
        }
        for c in ".,?'!/()&:;=+-_\"$@".chars() {
            assert!(table.symbol_for(c).is_some(), "missing {}", c);
        }
    }

    #[test]
    fn test_symbols_are_dots_and_dashes() {
        for (c, symbol) in SymbolTable::global().iter() {
            assert!(!symbol.is_empty(), "{} has an empty symbol", c);
            assert!(symbol.chars().all(|s| s == '.' || s == '-'), "{} -> {}", c, symbol);
        }
    }

    #[test]
    fn test_lowercase_is_not_in_table() {
        assert_eq!(SymbolTable::global().symbol_for('a'), None);
    }

    #[test]
    fn test_reverse_lookup() {
        let table = SymbolTable::global();
        assert_eq!(table.char_for("..."), Some('S'));
        assert_eq!(table.char_for("-..-."), Some('/'));
        assert_eq!(table.char_for("........"), None);
        assert_eq!(table.char_for(""), None);
    }

    #[test]
    fn test_only_known_collision_resolves_to_digit() {
        let collisions = SymbolTable::global().collisions();
        assert_eq!(
            collisions,
            vec![Collision {
                symbol: ".----",
                winner: '1',
                candidates: vec!['1', '\''],
            }]
        );
    }

    #[test]
    fn test_collision_winner_does_not_depend_on_order() {
        let punctuation_first = SymbolTable::from_entries(&[('\'', ".----"), ('1', ".----")]);
        assert_eq!(punctuation_first.char_for(".----"), Some('1'));

        let same_class = SymbolTable::from_entries(&[('!', "-.-"), ('?', "-.-")]);
        assert_eq!(same_class.char_for("-.-"), Some('!'));
    }
}
