//! Deterministic ordering of route entries
//!
//! Route paths are compared the way a locale-aware string comparison orders
//! them for people (root collation), not by raw bytes. Three levels, each
//! consulted only when the previous one ties:
//! - primary: base characters, case and accents ignored; punctuation before
//!   digits, digits before letters
//! - secondary: accents, unaccented first (`cafe < café < cafz`)
//! - tertiary: case, lowercase first
//!
//! Entries with the same path are ordered `page < layout < template < route`.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::RouteEntry;

/// ASCII punctuation and symbols in root collation order
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary collation weight of a character: (class, value)
///
/// Classes: whitespace < punctuation/symbols < digits < letters.
fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (0, c as u32)
    } else if let Some(index) = PUNCTUATION_ORDER.find(c) {
        (1, index as u32)
    } else if c.is_ascii_punctuation() || (!c.is_alphanumeric() && !c.is_ascii()) {
        (1, PUNCTUATION_ORDER.len() as u32 + c as u32)
    } else if c.is_numeric() {
        (2, c as u32)
    } else {
        (3, fold_case(c) as u32)
    }
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// A base character with the combining marks that follow it
#[derive(Debug, PartialEq, Eq)]
struct CollationElement {
    base: char,
    marks: Vec<char>,
}

/// Splits a string into collation elements after canonical decomposition
///
/// `é` becomes base `e` with mark U+0301. A mark with no preceding base
/// stands on its own.
fn collation_elements(s: &str) -> Vec<CollationElement> {
    let mut elements: Vec<CollationElement> = Vec::new();
    for c in s.nfd() {
        match elements.last_mut() {
            Some(last) if is_combining_mark(c) => last.marks.push(c),
            _ => elements.push(CollationElement {
                base: c,
                marks: Vec::new(),
            }),
        }
    }
    elements
}

/// Case difference at the first position where two base sequences differ
///
/// Lowercase sorts before uppercase.
fn compare_case(a: &[CollationElement], b: &[CollationElement]) -> Ordering {
    a.iter()
        .zip(b)
        .find(|(x, y)| x.base != y.base)
        .map(|(x, y)| y.base.is_lowercase().cmp(&x.base.is_lowercase()))
        .unwrap_or(Ordering::Equal)
}

/// Compares two route paths (pure function)
///
/// Total order: primary weights first (a proper prefix sorts first), then
/// accents, then lowercase-before-uppercase, then raw bytes, so only equal
/// strings compare as `Equal`.
///
/// # Examples
///
/// ```
/// use routejump_router::compare_route_paths;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_route_paths("/", "/about"), Ordering::Less);
/// assert_eq!(compare_route_paths("/Blog", "/about"), Ordering::Greater);
/// assert_eq!(compare_route_paths("/[slug]", "/about"), Ordering::Less);
/// assert_eq!(compare_route_paths("/about", "/About"), Ordering::Less);
/// assert_eq!(compare_route_paths("/café", "/cafz"), Ordering::Less);
/// ```
pub fn compare_route_paths(a: &str, b: &str) -> Ordering {
    let (left, right) = (collation_elements(a), collation_elements(b));

    left.iter()
        .map(|e| primary_weight(e.base))
        .cmp(right.iter().map(|e| primary_weight(e.base)))
        .then_with(|| left.iter().map(|e| &e.marks).cmp(right.iter().map(|e| &e.marks)))
        .then_with(|| compare_case(&left, &right))
        .then_with(|| a.cmp(b))
}

/// Compares two entries by route path, then by kind priority
pub fn compare_entries(a: &RouteEntry, b: &RouteEntry) -> Ordering {
    compare_route_paths(a.route_path(), b.route_path())
        .then_with(|| a.kind().priority().cmp(&b.kind().priority()))
}

/// Sorts entries in place with [`compare_entries`]
///
/// Stable: entries equal under both keys keep their relative order.
pub fn sort_entries(entries: &mut [RouteEntry]) {
    entries.sort_by(compare_entries);
}
