//! Integration tests for the parsing module.
//!
//! Paragraph-level cases are rstest tables; whole documents use insta inline
//! snapshots; scanner invariants are checked with proptest.

mod invariants;

use crate::parsing::{convert_document, convert_paragraph, inline::parse_inline};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// Paragraph conversion

#[rstest]
#[case("*a*", "<p><em>a</em></p>")]
#[case("**a**", "<p><strong>a</strong></p>")]
#[case("*a", "<p>*a</p>")]
#[case("* a*", "<p>* a*</p>")]
#[case("[text](http://x)", "<p><a href='http://x'>text</a></p>")]
#[case("\\*a\\*", "<p>*a*</p>")]
#[case("trailing\\", "<p>trailing</p>")]
#[case("", "<p></p>")]
fn paragraph_conversion(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(convert_paragraph(input), expected);
}

#[rstest]
#[case("# Title", "<h1>Title</h1>")]
#[case("### *Three*", "<h3><em>Three</em></h3>")]
#[case("###### Six", "<h6>Six</h6>")]
#[case("####### Title", "<p>####### Title</p>")]
#[case("#Title", "<p>#Title</p>")]
#[case("# ", "<h1></h1>")]
#[case("#", "<p>#</p>")]
fn heading_conversion(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(convert_paragraph(input), expected);
}

#[test]
fn marker_in_unresolved_link_target_is_literal() {
    let html = convert_paragraph("([a*b*])");
    assert!(!html.contains("<em>"), "unexpected markup in {html}");
    assert_eq!(html, "<p>([a*b*])</p>");
}

#[test]
fn multiline_paragraph_keeps_newlines() {
    assert_eq!(
        convert_paragraph("first *line\nsecond* line"),
        "<p>first <em>line\nsecond</em> line</p>"
    );
}

#[test]
fn newline_after_marker_invalidates_opener() {
    assert_eq!(convert_paragraph("a *\nb*"), "<p>a *\nb*</p>");
}

#[test]
fn fresh_state_per_paragraph() {
    // A dangling opener in one paragraph cannot be closed by the next.
    assert_eq!(convert_paragraph("open *a"), "<p>open *a</p>");
    assert_eq!(convert_paragraph("b* close"), "<p>b* close</p>");
}

// Document conversion

#[test]
fn document_snapshot() {
    let md = "# Md2Html\n\nThis is *emphasis* and **strong** text,\nwith `code`, --strike-- and ~mark~.\n\n\n\nA [link](https://example.com) & <tag>.";
    insta::assert_snapshot!(convert_document(md), @r"
    <h1>Md2Html</h1>
    <p>This is <em>emphasis</em> and <strong>strong</strong> text,
    with <code>code</code>, <s>strike</s> and <mark>mark</mark>.</p>
    <p>A <a href='https://example.com'>link</a> &amp; &lt;tag&gt;.</p>
    ");
}

#[test]
fn document_with_headings_snapshot() {
    let md = "## Section\n\n####### not a heading\n\n#also not";
    insta::assert_snapshot!(convert_document(md), @r"
    <h2>Section</h2>
    <p>####### not a heading</p>
    <p>#also not</p>
    ");
}

#[test]
fn document_separators() {
    assert_eq!(convert_document("a\n\nb"), "<p>a</p>\n<p>b</p>");
    assert_eq!(convert_document("a\n\nb\n\n"), "<p>a</p>\n<p>b</p>\n");
    assert_eq!(convert_document("\n\n\na"), "<p>a</p>");
    assert_eq!(convert_document(""), "");
    assert_eq!(convert_document("\n\n"), "");
}

#[test]
fn document_crlf_lines() {
    assert_eq!(convert_document("a\r\nb\r\n\r\nc"), "<p>a\nb</p>\n<p>c</p>");
}

// Invariants

#[rstest]
#[case("*a*b*c*")]
#[case("**a _b** c_")]
#[case("[a(b]c)")]
#[case("*a[b*c]")]
#[case("((([[[")]
#[case(")]*_`~--")]
#[case("\\")]
#[case("a**")]
fn scanner_invariants_hold(#[case] input: &str) {
    assert_eq!(invariants::scan_checked(input, 0), parse_inline(input, 0));
}

#[test]
fn plain_prefix_invariant() {
    invariants::check_plain_prefix("plain <text> & 'quotes' \"here\"");
}

proptest! {
    #[test]
    fn scan_terminates_for_any_input(s in any::<String>()) {
        invariants::scan_checked(&s, 0);
    }

    #[test]
    fn scan_terminates_for_markup_heavy_input(s in r"[*_`~\-\[\]()\\ #a<&\n]{0,40}") {
        invariants::scan_checked(&s, 0);
        let html = convert_paragraph(&s);
        prop_assert!(html.starts_with("<p>") || html.starts_with("<h"));
    }

    #[test]
    fn plain_text_is_only_entity_encoded(s in r"[a-zA-Z0-9 <>&'\x22.,!?]{0,60}") {
        invariants::check_plain_prefix(&s);
        let inner = parse_inline(&s, 0);
        prop_assert_eq!(html_escape::decode_html_entities(&inner), s.as_str());
    }

    #[test]
    fn wrapper_matches_heading_level(level in 1usize..=6, text in "[a-z]{1,10}") {
        let html = convert_paragraph(&format!("{} {text}", "#".repeat(level)));
        prop_assert_eq!(html, format!("<h{level}>{text}</h{level}>"));
    }
}
