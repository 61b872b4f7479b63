use crate::parsing::inline::{InlineScanner, kinds::Reserved};

/// Scans `s` to completion, asserting scanner invariants along the way.
///
/// Asserts that:
/// - Every step moves the position strictly forward
/// - The position never passes the end of the input
/// - The drained output equals the partition's concatenation at the end
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn scan_checked(s: &str, start: usize) -> String {
    let mut scanner = InlineScanner::new(s, start);
    let mut last = scanner.pos();
    while scanner.step() {
        assert!(
            scanner.pos() > last,
            "scan stalled at {last} in {s:?}"
        );
        assert!(
            scanner.pos() <= s.len(),
            "scan ran past end: {} (len: {})",
            scanner.pos(),
            s.len()
        );
        last = scanner.pos();
    }
    let concat = scanner.contents().concat();
    let out = scanner.run();
    assert_eq!(out, concat, "drain reordered fragments for {s:?}");
    out
}

/// For text without markup-significant characters, asserts that after every
/// step the partition equals the encoded prefix scanned so far.
pub fn check_plain_prefix(s: &str) {
    let mut scanner = InlineScanner::new(s, 0);
    while scanner.step() {
        let expected: String = s[..scanner.pos()].chars().map(Reserved::encode).collect();
        assert_eq!(
            scanner.contents().concat(),
            expected,
            "partition diverged from prefix at {} in {s:?}",
            scanner.pos()
        );
    }
}
