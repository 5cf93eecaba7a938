use std::collections::HashMap;
use std::sync::OnceLock;

/// Token standing for the gap between words.
pub const WORD_GAP: &str = "/";

const INTERNATIONAL: &[(char, &str)] = &[
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
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (' ', WORD_GAP),
];

/// Bidirectional character/code lookup for Morse.
///
/// Built once on first use and read-only afterwards.
///
/// # Example
///
/// ```
/// use decipher::MorseTable;
///
/// let table = MorseTable::international();
/// assert_eq!(table.encode_char('S'), Some("..."));
/// assert_eq!(table.decode_token("---"), Some('O'));
/// assert_eq!(table.decode_token("/"), Some(' '));
/// ```
#[derive(Debug)]
pub struct MorseTable {
    char_to_code: HashMap<char, &'static str>,
    code_to_char: HashMap<&'static str, char>,
}

impl MorseTable {
    /// The table for A-Z, 0-9 and the word gap.
    pub fn international() -> &'static MorseTable {
        static TABLE: OnceLock<MorseTable> = OnceLock::new();
        TABLE.get_or_init(|| MorseTable::from_pairs(INTERNATIONAL))
    }

    fn from_pairs(pairs: &'static [(char, &'static str)]) -> Self {
        let char_to_code: HashMap<char, &'static str> = pairs.iter().copied().collect();
        let code_to_char: HashMap<&'static str, char> =
            pairs.iter().map(|&(c, code)| (code, c)).collect();

        MorseTable {
            char_to_code,
            code_to_char,
        }
    }

    /// Code for an (already upper-cased) character.
    pub fn encode_char(&self, c: char) -> Option<&'static str> {
        self.char_to_code.get(&c).copied()
    }

    /// Character for a single code token.
    pub fn decode_token(&self, token: &str) -> Option<char> {
        self.code_to_char.get(token).copied()
    }

    /// Number of mapped characters, word gap included.
    pub fn len(&self) -> usize {
        self.char_to_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.char_to_code.is_empty()
    }
}
