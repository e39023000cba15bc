//! Document rewrite pipeline
//!
//! Parses fetched HTML into a tree, applies the term rewriter to every text
//! node, resolves and rewrites the page title through a dedicated accessor,
//! and serializes the tree back to an HTML string.
//!
//! Parsing is permissive: malformed markup, non-HTML payloads, and empty
//! input all produce a best-effort tree, so the pipeline has no failure
//! mode. Only text-node payloads are ever modified; tag names, attribute
//! names, and attribute values (URLs, alt text, ids, classes, inline
//! styles) round-trip untouched. Script and style bodies are text nodes and
//! are rewritten like any other text.

use ego_tree::NodeId;
use once_cell::sync::Lazy;
use scraper::{Html, Node, Selector};
use tendril::StrTendril;

use super::terms::TermRewriter;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("Failed to parse title selector"));

/// Result of rewriting one document
#[derive(Debug, Clone, PartialEq)]
pub struct RewrittenDocument {
    /// Serialized HTML with all qualifying text substitutions applied
    pub html: String,
    /// Rewritten content of the title element, empty if the document has none
    pub title: String,
}

/// Rewrite every text node of `html` and return the serialized result
/// together with the rewritten page title.
pub fn rewrite_document(html: &str, rewriter: &TermRewriter) -> RewrittenDocument {
    let mut document = Html::parse_document(html);

    // Snapshot pass: walk the tree in document order and collect the
    // payload updates, then apply them once traversal is done. Mutating
    // text nodes mid-walk would invalidate the traversal. The title text is
    // captured here too, so the rewriter is applied to it exactly once even
    // though the generic traversal also visits its text node.
    let title_snapshot = title_snapshot(&document);
    let updates = collect_text_updates(&document, rewriter);
    let changed = updates.len();
    apply_text_updates(&mut document, updates);

    let title = match title_snapshot {
        Some((text_ids, text)) => {
            let rewritten = rewriter.rewrite(&text);
            write_title(&mut document, &text_ids, &rewritten);
            rewritten
        }
        None => String::new(),
    };

    tracing::debug!(changed_text_nodes = changed, title = %title, "Rewrote document");

    RewrittenDocument {
        html: document.html(),
        title,
    }
}

/// Pre-order walk over all text nodes, returning `(node, new_payload)`
/// pairs for the nodes whose payload actually changes.
fn collect_text_updates(document: &Html, rewriter: &TermRewriter) -> Vec<(NodeId, String)> {
    let mut updates = Vec::new();
    for node in document.tree.root().descendants() {
        if let Node::Text(text) = node.value() {
            let rewritten = rewriter.rewrite(text);
            if rewritten != **text {
                updates.push((node.id(), rewritten));
            }
        }
    }
    updates
}

/// Replace text payloads in place; tree structure is untouched.
fn apply_text_updates(document: &mut Html, updates: Vec<(NodeId, String)>) {
    for (id, payload) in updates {
        if let Some(mut node) = document.tree.get_mut(id) {
            if let Node::Text(text) = node.value() {
                text.text = StrTendril::from_slice(&payload);
            }
        }
    }
}

/// Resolve the title element and capture its text children and current
/// text. A dedicated accessor guarantees the title is captured even when a
/// serializer exposes it as element content rather than a child text node.
/// Documents without a title yield `None`.
fn title_snapshot(document: &Html) -> Option<(Vec<NodeId>, String)> {
    let element = document.select(&TITLE_SELECTOR).next()?;
    let ids: Vec<NodeId> = element
        .children()
        .filter(|child| child.value().is_text())
        .map(|child| child.id())
        .collect();
    Some((ids, element.text().collect()))
}

/// Write the rewritten title back: the full string lands in the first text
/// child and any further text children are emptied so the element
/// serializes to exactly the returned title.
fn write_title(document: &mut Html, text_ids: &[NodeId], rewritten: &str) {
    for (index, id) in text_ids.iter().enumerate() {
        if let Some(mut node) = document.tree.get_mut(*id) {
            if let Node::Text(text) = node.value() {
                text.text = if index == 0 {
                    StrTendril::from_slice(rewritten)
                } else {
                    StrTendril::new()
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yale() -> TermRewriter {
        TermRewriter::new("Yale", "Fale")
    }

    #[test]
    fn test_rewrites_body_text() {
        let html = "<html><head><title>Yale</title></head><body><p>Welcome to Yale</p></body></html>";
        let result = rewrite_document(html, &yale());
        assert!(result.html.contains("Welcome to Fale"));
        assert_eq!(result.title, "Fale");
    }

    #[test]
    fn test_attributes_untouched() {
        let html = r#"<body><a href="https://yale.edu/about" id="yale-link" class="yale">About Yale</a></body>"#;
        let result = rewrite_document(html, &yale());
        assert!(result.html.contains(r#"href="https://yale.edu/about""#));
        assert!(result.html.contains(r#"id="yale-link""#));
        assert!(result.html.contains(r#"class="yale""#));
        assert!(result.html.contains(">About Fale<"));
    }

    #[test]
    fn test_empty_document() {
        let result = rewrite_document("", &yale());
        assert_eq!(result.title, "");
        assert!(result.html.contains("<html>"));
    }

    #[test]
    fn test_missing_title() {
        let html = "<body><p>Yale here</p></body>";
        let result = rewrite_document(html, &yale());
        assert_eq!(result.title, "");
        assert!(result.html.contains("Fale here"));
    }

    #[test]
    fn test_title_rewritten_without_body_match() {
        let html = "<html><head><title>Yale University</title></head><body><p>No match in body</p></body></html>";
        let result = rewrite_document(html, &yale());
        assert_eq!(result.title, "Fale University");
        assert!(result.html.contains("No match in body"));
        assert!(result.html.contains("<title>Fale University</title>"));
    }

    #[test]
    fn test_script_text_is_rewritten() {
        let html = r#"<body><script>const name = "Yale University";</script></body>"#;
        let result = rewrite_document(html, &yale());
        assert!(result.html.contains(r#"const name = "Fale University";"#));
    }

    #[test]
    fn test_non_html_payload_is_tolerated() {
        // Plain text gets implicit html/body wrappers from the permissive
        // parser; the text itself is still rewritten.
        let result = rewrite_document("just some yale text", &yale());
        assert!(result.html.contains("just some fale text"));
    }

    #[test]
    fn test_title_rewritten_once_when_replacement_rematches_target() {
        // A replacement containing the target as a whole word would grow on
        // every extra application; the title must get exactly one pass.
        let rewriter = TermRewriter::new("day", "day off");
        let html = "<html><head><title>day</title></head><body><p>day</p></body></html>";
        let result = rewrite_document(html, &rewriter);
        assert_eq!(result.title, "day off");
        assert!(result.html.contains("<title>day off</title>"));
        assert!(result.html.contains("<p>day off</p>"));
    }

    #[test]
    fn test_no_match_is_noop_on_text() {
        let html = "<html><head><title>Test Page</title></head><body><h1>Hello World</h1></body></html>";
        let result = rewrite_document(html, &yale());
        assert_eq!(result.title, "Test Page");
        assert!(result.html.contains("<h1>Hello World</h1>"));
    }
}
