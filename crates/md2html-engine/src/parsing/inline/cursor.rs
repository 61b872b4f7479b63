/// A cursor for character-by-character inline scanning with position tracking.
///
/// Positions are byte offsets into `s` and always sit on a char boundary.
/// `start` marks the beginning of the scan interval: the character before
/// `start` (a heading prefix, for instance) is never treated as "previous".
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The paragraph being scanned.
    pub s: &'a str,
    /// Where the scan interval begins.
    pub start: usize,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at `start`.
    ///
    /// `start` is clamped to the end of `s`.
    pub fn new(s: &'a str, start: usize) -> Self {
        let start = start.min(s.len());
        Self { s, start, i: start }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    /// Peeks at the character `offset` bytes ahead of the current position.
    ///
    /// Returns `None` past the end or when `offset` is not a char boundary.
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.s.get(self.i + offset..)?.chars().next()
    }

    /// Returns the character just before the cursor, if it lies inside the
    /// scan interval.
    pub fn prev(&self) -> Option<char> {
        if self.i == self.start {
            return None;
        }
        self.s[..self.i].chars().next_back()
    }

    /// Returns everything from the current position to the end.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Advances past one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves the cursor to the end of the input.
    pub fn finish(&mut self) {
        self.i = self.s.len();
    }
}
