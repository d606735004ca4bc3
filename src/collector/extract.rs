// src/collector/extract.rs
// =============================================================================
// This module extracts hyperlinks from an HTML page body.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser), so malformed markup never
//   errors - we get back whatever elements it could recognize
//
// Filtering rule (deliberately lax):
// - An anchor is kept only if it has an href attribute AND the value starts
//   with the literal prefix "http". That accepts http:// and https://, and
//   also any string that merely begins with those four characters (e.g.
//   "httpfoo"). It rejects relative paths, mailto:, empty strings, etc.
// - This prefix check is the contract. Do NOT tighten it to a real scheme
//   parse or add relative-URL resolution; callers depend on exactly which
//   strings survive to the next recursion level.
// =============================================================================

use scraper::{Html, Selector};

// Extracts the hyperlinks we keep from an HTML body, in document order.
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> of href values that passed the filter, in the order
// the anchors appear in the markup (top to bottom).
//
// Example:
//   html = "<a href='https://a.example/'>x</a><a href='/local'>y</a>"
//   result = ["https://a.example/"]
pub fn extract_links(html: &str) -> Vec<String> {
    let mut links = Vec::new();

    // Parse the HTML into a document (tolerant - never fails)
    let document = Html::parse_document(html);

    // Select every <a> element, with or without an href.
    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because our selector is a constant and known
    // to be valid.
    let selector = Selector::parse("a").unwrap();

    for element in document.select(&selector) {
        // Anchors without an href are skipped; present-but-filtered values
        // are skipped too
        if let Some(href) = element.value().attr("href") {
            if href.starts_with("http") {
                links.push(href.to_string());
            }
        }
    }

    links
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why select "a" and not "a[href]"?
//    - The contract is "every anchor, then read its href if present", and
//      keeping the attribute check in code makes the present/absent branch
//      explicit and testable. The selected set ends up the same.
//
// 2. Document order:
//    - scraper's select() walks the tree in document order, which is exactly
//      the order the traversal needs - output ordering is built on it.
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_absolute_http_links() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>
                      <a href="http://example.com/page">Plain</a>"#;
        let links = extract_links(html);
        assert_eq!(
            links,
            vec!["https://www.rust-lang.org", "http://example.com/page"]
        );
    }

    #[test]
    fn test_skips_relative_and_special_links() {
        let html = r#"
            <a href="/relative/path">rel</a>
            <a href="mailto:x@y.com">mail</a>
            <a href="">empty</a>
            <a>no href at all</a>
        "#;
        let links = extract_links(html);
        assert_eq!(links.len(), 0);
    }

    #[test]
    fn test_lax_prefix_accepts_httpfoo() {
        // The filter is a literal prefix check, not a scheme parse
        let html = r#"<a href="httpfoo">odd but accepted</a>"#;
        let links = extract_links(html);
        assert_eq!(links, vec!["httpfoo"]);
    }

    #[test]
    fn test_document_order_preserved() {
        let html = r#"
            <a href="https://b.example/">B first in markup</a>
            <a href="https://a.example/">A second in markup</a>
        "#;
        let links = extract_links(html);
        assert_eq!(links, vec!["https://b.example/", "https://a.example/"]);
    }

    #[test]
    fn test_malformed_markup_degrades_gracefully() {
        // Unclosed tags and stray brackets must not panic or error
        let html = r#"<div><a href="https://ok.example/">x<a href="/nope">y</div></span>"#;
        let links = extract_links(html);
        assert_eq!(links, vec!["https://ok.example/"]);
    }
}
