//! Tag frequency counting across many filenames
//!
//! Feeds the tag cloud: each filename is tokenized and every resulting tag
//! is counted once per occurrence. A malformed name simply contributes no
//! tags.

use std::collections::HashMap;

use rayon::prelude::*;

use super::tokenizer::tokenize;

/// Mapping from tag to the number of times it was seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFrequency {
    counts: HashMap<String, usize>,
}

impl TagFrequency {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `name` and count each of its tags.
    pub fn add_name(&mut self, name: &str) {
        for tag in tokenize(name) {
            *self.counts.entry(tag).or_insert(0) += 1;
        }
    }

    /// Fold another frequency map into this one.
    pub fn merge(&mut self, other: Self) {
        for (tag, count) in other.counts {
            *self.counts.entry(tag).or_insert(0) += count;
        }
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<usize> {
        self.counts.get(tag).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(tag, count)| (tag.as_str(), *count))
    }

    /// Tags ordered by descending count, ties broken by tag text.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|(a_tag, a_count), (b_tag, b_count)| {
            b_count.cmp(a_count).then_with(|| a_tag.cmp(b_tag))
        });
        ranked
    }

    #[must_use]
    pub fn into_inner(self) -> HashMap<String, usize> {
        self.counts
    }
}

impl From<TagFrequency> for HashMap<String, usize> {
    fn from(frequency: TagFrequency) -> Self {
        frequency.counts
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagFrequency {
    fn from_iter<I: IntoIterator<Item = S>>(names: I) -> Self {
        let mut frequency = Self::new();
        for name in names {
            frequency.add_name(name.as_ref());
        }
        frequency
    }
}

/// Count tag occurrences over a collection of filenames.
///
/// # Examples
/// ```
/// use mediashelf::tags::aggregate;
///
/// let counts = aggregate(["[x]a", "[x]b"]);
/// assert_eq!(counts.get("x"), Some(2));
/// assert_eq!(counts.get("a"), Some(1));
/// ```
pub fn aggregate<I, S>(names: I) -> TagFrequency
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().collect()
}

/// Parallel variant of [`aggregate`] for large libraries. Produces the same counts.
pub fn par_aggregate<S>(names: &[S]) -> TagFrequency
where
    S: AsRef<str> + Sync,
{
    names
        .par_iter()
        .fold(TagFrequency::new, |mut frequency, name| {
            frequency.add_name(name.as_ref());
            frequency
        })
        .reduce(TagFrequency::new, |mut left, right| {
            left.merge(right);
            left
        })
}
