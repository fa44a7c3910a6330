/// 1-based index of a whitespace-delimited field within its line.
pub type Column = usize;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    pub column: Column,
}

impl Token {
    pub const fn new(text: String, column: Column) -> Self {
        Self { text, column }
    }
}

/// Splits lines into fields and normalizes each field into a lower-case,
/// purely alphabetic token.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

// Same set as the C `isspace` classification, vertical tab included.
#[inline]
pub(crate) const fn is_field_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

impl Tokenizer {
    pub const fn new() -> Self {
        Self
    }

    /// Strips every non-ASCII-alphabetic byte and lower-cases the rest.
    /// Returns `None` when nothing survives.
    pub fn normalize(field: &[u8]) -> Option<String> {
        let word: String = field
            .iter()
            .filter(|b| b.is_ascii_alphabetic())
            .map(|b| char::from(b.to_ascii_lowercase()))
            .collect();

        (!word.is_empty()).then_some(word)
    }

    /// Tokenizes a single line. Columns are the original field positions, so
    /// fields dropped by normalization leave a gap instead of shifting the
    /// columns of later tokens.
    pub fn tokenize(self, line: impl AsRef<[u8]>) -> Vec<Token> {
        line.as_ref()
            .split(|&b| is_field_separator(b))
            .filter(|field| !field.is_empty())
            .enumerate()
            .filter_map(|(i, field)| Self::normalize(field).map(|text| Token::new(text, i + 1)))
            .collect()
    }
}
