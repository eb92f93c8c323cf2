//! Bullet-key documentation extraction from Markdown.
//!
//! Theme documentation describes each color key as a list item:
//!
//! ```text
//! - `editor.background`: Main background color.
//! - `editor.foreground`: Primary text color. May continue
//!   on following lines until the next bullet key.
//! ```
//!
//! [`extract_key_docs`] turns such a document into a [`DocMap`]. Anything that
//! is not a bullet key (headings, prose, other list items) is folded into the
//! documentation of the preceding bullet, or ignored if no bullet precedes it.

mod bullets;

use std::collections::HashMap;

use tracing::{debug, instrument, warn};

use vstheme_shared::DocMap;

pub use bullets::{BulletKey, find_bullets};

/// Extract a key → documentation mapping from Markdown text.
///
/// Documentation is normalized with [`normalize_doc`]. When a key is
/// documented more than once, the last occurrence wins and keeps the position
/// of the first. Never fails: text without bullet keys yields an empty map.
#[instrument(skip_all, fields(bytes = md.len()))]
pub fn extract_key_docs(md: &str) -> DocMap {
    let mut docs = DocMap::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for bullet in find_bullets(md) {
        if let Some(first_line) = first_seen.get(&bullet.key) {
            warn!(
                key = %bullet.key,
                first_line,
                line = bullet.line,
                "key documented more than once, keeping the later text"
            );
        } else {
            first_seen.insert(bullet.key.clone(), bullet.line);
        }
        docs.insert(bullet.key, normalize_doc(&bullet.raw_doc));
    }

    debug!(keys = docs.len(), "extracted bullet-key documentation");
    docs
}

/// Collapse every whitespace run (including line breaks) to one space and trim.
pub fn normalize_doc(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_single_line_docs() {
        let md = "- `bg`: Main background color.\n- `fg`: Primary text color.\n";
        let docs = extract_key_docs(md);
        assert_eq!(docs.len(), 2);
        assert_eq!(docs["bg"], "Main background color.");
        assert_eq!(docs["fg"], "Primary text color.");
    }

    #[test]
    fn joins_multi_line_docs() {
        let md = "- `x`: Line one\n  continues here.\n- `y`: Other.\n";
        let docs = extract_key_docs(md);
        assert_eq!(docs["x"], "Line one continues here.");
        assert_eq!(docs["y"], "Other.");
    }

    #[test]
    fn later_duplicate_wins_in_first_position() {
        let md = "- `k`: first text\n- `other`: o\n- `k`: second   text\n";
        let docs = extract_key_docs(md);
        assert_eq!(docs["k"], "second text");
        let keys: Vec<&str> = docs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["k", "other"]);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(extract_key_docs("").is_empty());
        assert!(extract_key_docs("# Just a heading\n\nSome prose.\n").is_empty());
    }

    #[test]
    fn empty_documentation_is_empty_string() {
        let md = "- `a`:\n- `b`: text\n";
        let docs = extract_key_docs(md);
        assert_eq!(docs["a"], "");
        assert_eq!(docs["b"], "text");
    }

    #[test]
    fn keeps_blank_lines_and_paragraphs_in_capture() {
        let md = "- `a`: Para one.\n\nPara two.\n\n## Heading\n- `b`: B.";
        let docs = extract_key_docs(md);
        assert_eq!(docs["a"], "Para one. Para two. ## Heading");
        assert_eq!(docs["b"], "B.");
    }

    #[test]
    fn prose_before_first_bullet_is_ignored() {
        let md = "Intro text\n- plain item\n- `a`: doc\n";
        let docs = extract_key_docs(md);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs["a"], "doc");
    }

    #[test]
    fn normalize_collapses_tabs_spaces_newlines() {
        assert_eq!(
            normalize_doc("\t  Mixed \t whitespace\n\n  across\r\n lines  "),
            "Mixed whitespace across lines"
        );
    }

    #[test]
    fn non_ascii_docs_survive() {
        let docs = extract_key_docs("- `bg`: Hintergrundfarbe für Editoren — 背景\n");
        assert_eq!(docs["bg"], "Hintergrundfarbe für Editoren — 背景");
    }

    #[test]
    fn extraction_is_idempotent() {
        let md = "- `a`: one\n  two\n- `b`:\tthree\n- `a`: four\n";
        assert_eq!(extract_key_docs(md), extract_key_docs(md));
    }
}
