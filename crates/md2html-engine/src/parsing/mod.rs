pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{BlockKind, ParagraphBuilder};

/// Converts one paragraph of markup into an HTML block element.
///
/// Pure and total: every input, however unbalanced, has an output.
pub fn convert_paragraph(raw: &str) -> String {
    let kind = BlockKind::classify(raw);
    let inner = inline::parse_inline(raw, kind.content_offset());
    log::trace!("converted {kind:?} of {} bytes", raw.len());

    let mut out = kind.open_tag();
    out.push_str(&inner);
    out.push_str(&kind.close_tag());
    out
}

/// Converts a whole document.
///
/// Paragraphs are separated by empty lines. Each paragraph that an empty
/// line closes is followed by a newline in the output; the paragraph closed
/// by the end of input is not.
pub fn convert_document(text: &str) -> String {
    let mut builder = ParagraphBuilder::new();
    let mut out = String::new();

    for line in text.lines() {
        if let Some(paragraph) = builder.push(line) {
            out.push_str(&convert_paragraph(&paragraph));
            out.push('\n');
        }
    }
    if let Some(paragraph) = builder.finish() {
        out.push_str(&convert_paragraph(&paragraph));
    }
    out
}
