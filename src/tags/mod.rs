//! Tag extraction from media filenames
//!
//! Filenames in a comic/video library usually carry their metadata inline:
//! `[Circle] Title (Event) [Language]`. This module turns such names into
//! ordered tags and counts tags across a library for the tag cloud.

pub mod brackets;
pub mod frequency;
pub mod tokenizer;

pub use brackets::{BRACKET_PAIRS, PATH_SEPARATOR, closing_for};
pub use frequency::{TagFrequency, aggregate, par_aggregate};
pub use tokenizer::tokenize;

/// Check that every keyword occurs somewhere in `source`.
///
/// Used by the library search box; an empty keyword list matches everything.
#[must_use]
pub fn includes_all_keywords<S: AsRef<str>>(source: &str, keywords: &[S]) -> bool {
    keywords.iter().all(|keyword| source.contains(keyword.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_includes_all_keywords() {
        let name = "[Circle] Long Title (Event)";
        assert!(includes_all_keywords(name, &["Circle", "Title"]));
        assert!(!includes_all_keywords(name, &["Circle", "missing"]));
        assert!(includes_all_keywords::<&str>(name, &[]));
    }

    #[test]
    fn test_keyword_match_is_case_sensitive() {
        assert!(!includes_all_keywords("Title", &["title"]));
    }
}
