use super::kinds::{Heading, Paragraph};

/// The block wrapper a paragraph is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A generic paragraph (`<p>`).
    Paragraph,
    /// A heading (`<h1>` to `<h6>`).
    Heading {
        /// 1-6
        level: u8,
    },
}

impl BlockKind {
    /// Classifies a paragraph by its leading characters.
    pub fn classify(s: &str) -> Self {
        match Heading::level(s) {
            0 => Self::Paragraph,
            level => Self::Heading { level },
        }
    }

    /// Byte offset at which inline content starts.
    pub fn content_offset(&self) -> usize {
        match self {
            Self::Paragraph => 0,
            Self::Heading { level } => Heading::content_offset(*level),
        }
    }

    pub fn element(&self) -> String {
        match self {
            Self::Paragraph => Paragraph::ELEMENT.to_string(),
            Self::Heading { level } => format!("h{level}"),
        }
    }

    pub fn open_tag(&self) -> String {
        format!("<{}>", self.element())
    }

    pub fn close_tag(&self) -> String {
        format!("</{}>", self.element())
    }
}
