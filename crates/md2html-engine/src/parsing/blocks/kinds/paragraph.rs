/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when the text
/// does not open with a heading prefix. Lines are joined with
/// [`Paragraph::LINE_SEPARATOR`] before inline conversion.
pub struct Paragraph;

impl Paragraph {
    pub const ELEMENT: &'static str = "p";
    pub const LINE_SEPARATOR: char = '\n';
}
