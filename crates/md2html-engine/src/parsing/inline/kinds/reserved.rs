use std::borrow::Cow;

/// HTML reserved characters and the escape character.
pub struct Reserved;

impl Reserved {
    /// Escapes the character that follows it.
    pub const ESCAPE: char = '\\';

    const CODES: [(char, &'static str); 5] = [
        ('<', "&lt;"),
        ('>', "&gt;"),
        ('&', "&amp;"),
        ('\'', "&apos;"),
        ('"', "&quot;"),
    ];

    /// Returns the entity for a reserved character.
    pub fn code(c: char) -> Option<&'static str> {
        Self::CODES
            .iter()
            .find_map(|&(r, code)| (r == c).then_some(code))
    }

    /// Encodes a single character, borrowing when no substitution applies.
    pub fn encode(c: char) -> Cow<'static, str> {
        match Self::code(c) {
            Some(code) => Cow::Borrowed(code),
            None => Cow::Owned(c.to_string()),
        }
    }

    /// Resolves the character at the start of `s` the way the scanner reads
    /// plain text.
    ///
    /// Returns the text to emit and the number of bytes consumed. An escape
    /// character resolves the character after it; a lone escape at the end of
    /// `s` emits nothing.
    pub fn read(s: &str) -> (Cow<'static, str>, usize) {
        let mut chars = s.chars();
        match chars.next() {
            Some(Self::ESCAPE) => match chars.next() {
                Some(c) => (Self::encode(c), Self::ESCAPE.len_utf8() + c.len_utf8()),
                None => (Cow::Borrowed(""), Self::ESCAPE.len_utf8()),
            },
            Some(c) => (Self::encode(c), c.len_utf8()),
            None => (Cow::Borrowed(""), 0),
        }
    }
}
