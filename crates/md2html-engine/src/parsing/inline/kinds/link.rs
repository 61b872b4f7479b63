/// Link syntax `[label](target)` and its bracket characters.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: char = '[';
    pub const LABEL_CLOSE: char = ']';
    pub const TARGET_OPEN: char = '(';
    pub const TARGET_CLOSE: char = ')';

    /// Ledger key for an open label bracket.
    pub const LABEL_KEY: &'static str = "[";
    /// Ledger key for an open target parenthesis.
    pub const TARGET_KEY: &'static str = "(";

    /// Returns true for any of the four link-syntax characters.
    pub fn is_delimiter(c: char) -> bool {
        matches!(
            c,
            Self::LABEL_OPEN | Self::LABEL_CLOSE | Self::TARGET_OPEN | Self::TARGET_CLOSE
        )
    }

    pub fn is_opener(c: char) -> bool {
        matches!(c, Self::LABEL_OPEN | Self::TARGET_OPEN)
    }

    /// Returns the counterpart of a bracket or parenthesis.
    ///
    /// Any character other than `(`, `)` and `]` maps to `]`.
    pub fn matching(c: char) -> char {
        match c {
            Self::TARGET_OPEN => Self::TARGET_CLOSE,
            Self::TARGET_CLOSE => Self::TARGET_OPEN,
            Self::LABEL_CLOSE => Self::LABEL_OPEN,
            _ => Self::LABEL_CLOSE,
        }
    }

    /// Ledger key for an opening bracket.
    pub fn key(opener: char) -> &'static str {
        if opener == Self::TARGET_OPEN {
            Self::TARGET_KEY
        } else {
            Self::LABEL_KEY
        }
    }

    /// Returns the inner text when `s` is wrapped in `open`..`close`.
    fn inner(s: &str, open: char, close: char) -> Option<&str> {
        if s.starts_with(open) && s.ends_with(close) {
            let inner = &s[open.len_utf8()..];
            Some(inner.strip_suffix(close).unwrap_or(""))
        } else {
            None
        }
    }

    /// Splits a collected `[label]` / `(target)` pair into label and target.
    pub fn split_pair<'a>(label: &'a str, target: &'a str) -> Option<(&'a str, &'a str)> {
        let label = Self::inner(label, Self::LABEL_OPEN, Self::LABEL_CLOSE)?;
        let target = Self::inner(target, Self::TARGET_OPEN, Self::TARGET_CLOSE)?;
        Some((label, target))
    }

    /// Renders an anchor element.
    pub fn anchor(target: &str, label: &str) -> String {
        format!("<a href='{target}'>{label}</a>")
    }
}
