/// An inline marker symbol and the HTML element it renders as.
///
/// The table is closed: only the symbols listed in [`Marker::TABLE`] are
/// ever recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// The markup delimiter, 1 or 2 characters.
    pub symbol: &'static str,
    /// The element name emitted around resolved content.
    pub element: &'static str,
}

impl Marker {
    /// Longest symbol in the table.
    pub const MAX_LEN: usize = 2;

    pub const TABLE: [Marker; 7] = [
        Marker::new("*", "em"),
        Marker::new("_", "em"),
        Marker::new("**", "strong"),
        Marker::new("__", "strong"),
        Marker::new("`", "code"),
        Marker::new("--", "s"),
        Marker::new("~", "mark"),
    ];

    const fn new(symbol: &'static str, element: &'static str) -> Self {
        Self { symbol, element }
    }

    /// Looks up the marker whose symbol is exactly `text`.
    pub fn lookup(text: &str) -> Option<Marker> {
        Self::TABLE.iter().copied().find(|m| m.symbol == text)
    }

    /// Finds the longest marker that `s` starts with.
    ///
    /// Tries a two-character prefix before a one-character prefix.
    pub fn longest_prefix(s: &str) -> Option<Marker> {
        (1..=Self::MAX_LEN).rev().find_map(|chars| {
            let (i, c) = s.char_indices().nth(chars - 1)?;
            Self::lookup(&s[..i + c.len_utf8()])
        })
    }

    /// Byte length of the symbol.
    pub fn byte_len(&self) -> usize {
        self.symbol.len()
    }

    pub fn open_tag(&self) -> String {
        format!("<{}>", self.element)
    }

    pub fn close_tag(&self) -> String {
        format!("</{}>", self.element)
    }
}
