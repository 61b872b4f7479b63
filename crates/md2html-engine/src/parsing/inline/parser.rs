use super::{
    contents::{Contents, Wrap},
    cursor::Cursor,
    kinds::{Link, Marker, Reserved},
    ledger::OpenLedger,
    types::Fragment,
};

/// Converts the inline content of a paragraph to HTML.
///
/// # Arguments
/// - `s`: The whole paragraph text
/// - `start`: Byte offset where inline content begins (after a heading prefix)
///
/// # Returns
/// The converted content without any block wrapper. Unmatched openers and
/// stray closers come out as their literal text.
pub fn parse_inline(s: &str, start: usize) -> String {
    InlineScanner::new(s, start).run()
}

/// Single left-to-right scan over one paragraph.
///
/// All state is owned by the scanner and dropped with it, so every paragraph
/// starts from an empty partition and an empty ledger.
pub struct InlineScanner<'a> {
    cur: Cursor<'a>,
    contents: Contents,
    open: OpenLedger,
    /// Byte position of the paragraph's last `)`.
    last_paren: Option<usize>,
}

impl<'a> InlineScanner<'a> {
    pub fn new(s: &'a str, start: usize) -> Self {
        Self {
            cur: Cursor::new(s, start),
            contents: Contents::new(),
            open: OpenLedger::new(),
            last_paren: s.rfind(Link::TARGET_CLOSE),
        }
    }

    pub fn pos(&self) -> usize {
        self.cur.pos()
    }

    pub fn contents(&self) -> &Contents {
        &self.contents
    }

    /// Runs the scan to the end and drains the partition.
    pub fn run(mut self) -> String {
        while self.step() {}
        let mut out = String::new();
        self.contents.drain_into(&mut out);
        out
    }

    /// Processes the token at the cursor. Returns false once the input is
    /// exhausted.
    pub fn step(&mut self) -> bool {
        let Some(c) = self.cur.peek() else {
            return false;
        };

        if Link::is_delimiter(c) {
            self.manage_link(c);
            self.cur.bump();
            return true;
        }

        let last_whitespace = self.cur.prev() == Some(' ');
        match Marker::longest_prefix(self.cur.rest()) {
            None => self.push_plain(),
            Some(marker) if self.open.is_open(marker.symbol) => {
                self.manage_closing(marker, last_whitespace)
            }
            Some(marker) => self.manage_opening(marker),
        }
        true
    }

    fn push_plain(&mut self) {
        let (text, consumed) = Reserved::read(self.cur.rest());
        self.contents.push(Fragment::new(text));
        self.cur.bump_n(consumed);
    }

    fn inside_link_target(&self) -> bool {
        self.open.is_open(Link::TARGET_KEY)
            && self.last_paren.is_some_and(|p| self.cur.pos() < p)
    }

    fn manage_closing(&mut self, marker: Marker, last_whitespace: bool) {
        if last_whitespace {
            // A close must hug the text it ends.
            self.contents.append_to_last(marker.symbol);
        } else {
            let wrap = if self.inside_link_target() {
                Wrap::Literal
            } else {
                Wrap::Markup(marker)
            };
            let collected =
                self.contents
                    .collect(&mut self.open, marker.symbol, marker.symbol, wrap);
            debug_assert!(
                collected,
                "`{}` open without a pending fragment",
                marker.symbol
            );
            if !collected {
                self.open.clear(marker.symbol);
                self.contents.push(Fragment::new(marker.symbol));
            }
        }
        self.cur.bump_n(marker.byte_len());
    }

    fn manage_opening(&mut self, marker: Marker) {
        let len = marker.byte_len();
        if self.cur.pos() + len >= self.cur.s.len() {
            self.contents.push(Fragment::new(self.cur.rest()));
            self.cur.finish();
            return;
        }

        match self.cur.peek_at(len) {
            Some(next) if breaks_marker(next) => {
                // Swallow the whitespace so it is never seen as an open boundary.
                let mut fragment = Fragment::new(marker.symbol);
                fragment.push_str(next.encode_utf8(&mut [0; 4]));
                self.contents.push(fragment);
                self.cur.bump_n(len + next.len_utf8());
            }
            _ => {
                self.contents.push(Fragment::new(marker.symbol));
                self.open.open(marker.symbol);
                self.cur.bump_n(len);
            }
        }
    }

    fn manage_link(&mut self, c: char) {
        let matching = Link::matching(c);
        if Link::is_opener(c) {
            self.open.set(Link::key(c), 1);
            self.contents.push(Fragment::from(c));
        } else if self.open.is_open(Link::key(matching)) {
            let key = Link::key(matching);
            let close = c.to_string();
            if !self.contents.collect(&mut self.open, key, &close, Wrap::Literal) {
                // The opener was swallowed by an enclosing marker span.
                self.contents.push(Fragment::from(c));
            }
            self.open.set(key, 0);
        } else {
            self.contents.push(Fragment::from(c));
        }
        self.merge_link();
    }

    /// Turns a trailing `[label]`, `(target)` fragment pair into an anchor.
    fn merge_link(&mut self) {
        if self.contents.len() < 2 {
            return;
        }
        let Some(target) = self.contents.pop() else {
            return;
        };
        let Some(label) = self.contents.pop() else {
            self.contents.push(target);
            return;
        };

        match Link::split_pair(label.as_str(), target.as_str())
            .map(|(text, href)| Link::anchor(href, text))
        {
            Some(anchor) => self.contents.push(Fragment::new(anchor)),
            None => {
                self.contents.push(label);
                self.contents.push(target);
            }
        }
    }
}

/// Whitespace that turns a marker followed by it into literal text.
///
/// No-break spaces (U+00A0, U+2007, U+202F) and NEL do not count. The
/// information separators U+001C..U+001F do.
fn breaks_marker(c: char) -> bool {
    match c {
        '\u{1c}'..='\u{1f}' => true,
        '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        c => c.is_whitespace(),
    }
}
