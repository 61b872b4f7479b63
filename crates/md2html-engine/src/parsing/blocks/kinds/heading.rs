/// ATX-style heading prefix: `#` repeated 1-6 times, then a space.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    /// Confirms the level once the marker run ends.
    pub const SEPARATOR: char = ' ';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the heading level of a paragraph, or 0 when it is not a heading.
    ///
    /// The scan stops at the first character that is neither the marker nor
    /// the separator; more than [`Heading::MAX_LEVEL`] markers disqualify the
    /// paragraph even if a separator follows.
    pub fn level(s: &str) -> u8 {
        let mut level = 0;
        for c in s.chars() {
            match c {
                Self::MARKER => {
                    level += 1;
                    if level > Self::MAX_LEVEL {
                        return 0;
                    }
                }
                Self::SEPARATOR => return level,
                _ => return 0,
            }
        }
        0
    }

    /// Byte offset of the heading text: the markers plus one separator.
    pub fn content_offset(level: u8) -> usize {
        usize::from(level) * Self::MARKER.len_utf8() + Self::SEPARATOR.len_utf8()
    }
}
