use std::collections::VecDeque;

use super::{kinds::Marker, ledger::OpenLedger, types::Fragment};

/// How [`Contents::collect`] wraps the merged span.
#[derive(Debug, Clone, Copy)]
pub enum Wrap {
    /// Emit the marker's HTML element.
    Markup(Marker),
    /// Keep the opening and closing text as literal characters.
    Literal,
}

/// The partition of the text scanned so far.
///
/// Concatenating the fragments in order always reproduces the converted
/// prefix of the paragraph: reserved characters substituted and resolved
/// spans wrapped.
#[derive(Debug, Default)]
pub struct Contents {
    fragments: VecDeque<Fragment>,
}

impl Contents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push_back(fragment);
    }

    pub fn pop(&mut self) -> Option<Fragment> {
        self.fragments.pop_back()
    }

    /// Appends text to the last fragment instead of starting a new one.
    pub fn append_to_last(&mut self, s: &str) {
        match self.fragments.back_mut() {
            Some(last) => last.push_str(s),
            None => self.fragments.push_back(Fragment::new(s)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    /// Concatenation of all fragments, without consuming them.
    pub fn concat(&self) -> String {
        self.fragments.iter().map(Fragment::as_str).collect()
    }

    /// Moves every fragment, first to last, onto the end of `out`.
    pub fn drain_into(&mut self, out: &mut String) {
        for fragment in self.fragments.drain(..) {
            out.push_str(fragment.as_str());
        }
    }

    /// Merges everything after the nearest fragment equal to `open` into a
    /// single wrapped fragment.
    ///
    /// The opener's ledger entry is cleared, as is the entry of every marker
    /// absorbed into the merged text: an absorbed marker is plain text from
    /// now on. Returns false, leaving everything untouched, when no fragment
    /// equals `open`.
    pub fn collect(
        &mut self,
        ledger: &mut OpenLedger,
        open: &str,
        close: &str,
        wrap: Wrap,
    ) -> bool {
        if !self.fragments.iter().any(|f| f.is(open)) {
            return false;
        }

        let mut inside = Vec::new();
        while let Some(last) = self.fragments.pop_back() {
            if last.is(open) {
                break;
            }
            if let Some(marker) = Marker::lookup(last.as_str()) {
                ledger.clear(marker.symbol);
            }
            inside.push(last);
        }

        let mut merged = String::new();
        match wrap {
            Wrap::Markup(marker) => merged.push_str(&marker.open_tag()),
            Wrap::Literal => merged.push_str(open),
        }
        for fragment in inside.iter().rev() {
            merged.push_str(fragment.as_str());
        }
        match wrap {
            Wrap::Markup(marker) => merged.push_str(&marker.close_tag()),
            Wrap::Literal => merged.push_str(close),
        }

        self.fragments.push_back(Fragment::new(merged));
        ledger.clear(open);
        true
    }
}
