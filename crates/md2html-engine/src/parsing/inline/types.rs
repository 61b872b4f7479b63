/// One piece of the scanned text.
///
/// A fragment is literal text, a pending bare marker (its text equals a
/// marker symbol or an opening bracket), or an already resolved span. The
/// scanner only ever distinguishes these by comparing text, so the text is
/// all a fragment holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the text is exactly `symbol`, not merely containing it.
    pub fn is(&self, symbol: &str) -> bool {
        self.0 == symbol
    }

    pub fn push_str(&mut self, s: &str) {
        self.0.push_str(s);
    }
}

impl From<char> for Fragment {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}
