use super::kinds::Paragraph;

/// Groups source lines into paragraphs.
///
/// A line of length zero ends the current paragraph; every other line,
/// whitespace-only lines included, is content. Runs of empty lines collapse
/// into one boundary and never produce empty paragraphs.
#[derive(Debug, Default)]
pub struct ParagraphBuilder {
    current: String,
}

impl ParagraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line (without its terminator).
    ///
    /// Returns the paragraph this line completed, if any.
    pub fn push(&mut self, line: &str) -> Option<String> {
        if line.is_empty() {
            return self.flush();
        }
        if !self.current.is_empty() {
            self.current.push(Paragraph::LINE_SEPARATOR);
        }
        self.current.push_str(line);
        None
    }

    /// Returns the paragraph still open at end of input.
    pub fn finish(mut self) -> Option<String> {
        self.flush()
    }

    fn flush(&mut self) -> Option<String> {
        if self.current.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.current))
        }
    }
}
