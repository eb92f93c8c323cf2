//! Bullet-key scanning.
//!
//! A bullet key is a list item of the form ``- `key`: documentation``. The
//! colon is optional; at least one whitespace character (a line break counts)
//! must separate the key from its documentation.

use std::sync::LazyLock;

use regex::Regex;

/// Matches the marker of a bullet-key line, up to and including the optional colon.
///
/// `(?m)` anchors `^` at every line start. Indentation and the gap after the
/// dash accept any whitespace except a line break (`[^\S\n]`), including
/// Unicode spaces. The whitespace that must follow the marker is checked
/// separately so that a line break can satisfy it.
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[^\S\n]*-[^\S\n]*`([A-Za-z0-9._-]+)`:?").expect("bullet regex")
});

/// One bullet-key occurrence in a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletKey {
    /// The backtick-quoted key.
    pub key: String,
    /// 1-based line number of the bullet.
    pub line: usize,
    /// Documentation text as written, up to the next bullet or end of input.
    pub raw_doc: String,
}

/// Byte offsets of a bullet marker found in pass one.
struct Marker<'a> {
    key: &'a str,
    line_start: usize,
    doc_start: usize,
}

/// Scan `md` for bullet keys, in document order.
///
/// Pass one records where every bullet line starts and where its documentation
/// begins. Pass two slices each bullet's documentation up to the start of the
/// next bullet line, so documentation may span blank lines and paragraphs.
pub fn find_bullets(md: &str) -> Vec<BulletKey> {
    let markers = find_markers(md);

    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let doc_end = markers.get(i + 1).map_or(md.len(), |next| next.line_start);
            BulletKey {
                key: marker.key.to_string(),
                line: line_number(md, marker.line_start),
                raw_doc: md[marker.doc_start..doc_end].to_string(),
            }
        })
        .collect()
}

fn find_markers(md: &str) -> Vec<Marker<'_>> {
    BULLET_RE
        .captures_iter(md)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let key = caps.get(1)?;

            // The marker must be followed by whitespace; "- `a`b" is prose.
            let followed_by_space = md[whole.end()..]
                .chars()
                .next()
                .is_some_and(char::is_whitespace);
            if !followed_by_space {
                return None;
            }

            Some(Marker {
                key: key.as_str(),
                line_start: whole.start(),
                doc_start: whole.end(),
            })
        })
        .collect()
}

fn line_number(md: &str, offset: usize) -> usize {
    md[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}
