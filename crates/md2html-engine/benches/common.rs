// Input generators for the conversion benches.
#[allow(dead_code)]
pub fn generate_document(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str("Paragraph with *emphasis*, **strong**, `code` and a [link](https://example.com/page_one).\n");
        content.push_str("A second line with --struck-- text, ~marks~ & <reserved> \"characters\".\n\n");
        content.push_str("Unbalanced *markers and stray ] brackets (never closed\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_nested_paragraph(depth: usize) -> String {
    let open = "**a *b _c ".repeat(depth);
    let close = "c_ b* a**".repeat(depth);
    format!("{open}middle{close}")
}
