//! Bracket-aware filename tokenizer
//!
//! A name such as `[Circle (Author)] Title 【Translated】` becomes the tags
//! `["Circle (Author)", "Title", "Translated"]`. Text outside brackets is kept
//! as free-text tags; the interior of each bracket pair becomes one tag.
//!
//! # Rules
//!
//! - The name is split on `\` and every segment is tokenized on its own.
//! - The closing delimiter is the *first* matching one after the opener.
//!   Brackets of another kind inside the pair stay literally in the tag.
//! - A segment with an opener that is never closed yields no tags at all,
//!   including the ones already read before the opener.
//! - Tags are trimmed of whitespace and byte-order marks, and empty tags
//!   are dropped.

use tracing::debug;

use super::brackets::{PATH_SEPARATOR, closing_for};

/// Split a filename into its ordered list of tags.
///
/// # Examples
/// ```
/// use mediashelf::tags::tokenize;
///
/// assert_eq!(tokenize("[a]b(c)"), vec!["a", "b", "c"]);
/// assert_eq!(tokenize("[a(b)]c"), vec!["a(b)", "c"]);
/// assert!(tokenize("[unterminated").is_empty());
/// ```
#[must_use]
pub fn tokenize(name: &str) -> Vec<String> {
    name.split(PATH_SEPARATOR)
        .flat_map(|segment| {
            tokenize_segment(segment).unwrap_or_else(|| {
                debug!(segment, "discarding segment with unterminated bracket");
                Vec::new()
            })
        })
        .collect()
}

/// Tokenize one path segment. `None` means an opener was never closed.
fn tokenize_segment(segment: &str) -> Option<Vec<String>> {
    let mut tags = Vec::new();
    let mut buffer = String::new();
    let mut rest = segment;

    while let Some(ch) = rest.chars().next() {
        let after = &rest[ch.len_utf8()..];
        match closing_for(ch) {
            Some(close) => {
                flush(&mut buffer, &mut tags);
                let end = after.find(close)?;
                tags.push(trim_tag(&after[..end]).to_string());
                rest = &after[end + close.len_utf8()..];
            }
            None => {
                buffer.push(ch);
                rest = after;
            }
        }
    }
    flush(&mut buffer, &mut tags);

    tags.retain(|tag| !tag.is_empty());
    Some(tags)
}

fn trim_tag(tag: &str) -> &str {
    tag.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn flush(buffer: &mut String, tags: &mut Vec<String>) {
    if !buffer.is_empty() {
        tags.push(trim_tag(buffer).to_string());
        buffer.clear();
    }
}
