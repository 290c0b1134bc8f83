//! Comparator engine
//!
//! Each kind implements [`Ranked`], its entry in the comparator table: it
//! answers the keys of its own extension set and declines everything else.
//! [`compare_with_rng`] then falls back to [`compare_base`] for base keys.
//! A key that neither the kind nor the base set understands compares
//! `Equal`, so adding keys never breaks older call sites.
//!
//! Both sides must be the same kind. The typed API enforces it; for the
//! [`MediaEntity`] union use [`compare_entities`], which reports a mismatch.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, trace};

use super::error::SortError;
use super::keys::{BaseKey, ComicKey, RankingKey, VideoKey};
use crate::media::{Comic, MediaEntity, MediaFile, Video};

/// A media kind that can be ordered by ranking keys
pub trait Ranked {
    /// Shared attributes used by the base comparator
    fn file(&self) -> &MediaFile;

    /// Compare by a key from this kind's extension set.
    /// Returns `None` when `key` is not one of them.
    fn compare_extension(&self, other: &Self, key: RankingKey) -> Option<Ordering>;
}

impl Ranked for MediaFile {
    fn file(&self) -> &MediaFile {
        self
    }

    fn compare_extension(&self, _other: &Self, _key: RankingKey) -> Option<Ordering> {
        None
    }
}

impl Ranked for Comic {
    fn file(&self) -> &MediaFile {
        Comic::file(self)
    }

    fn compare_extension(&self, other: &Self, key: RankingKey) -> Option<Ordering> {
        let RankingKey::Comic(key) = key else {
            return None;
        };
        Some(match key {
            ComicKey::Page => self.page().cmp(&other.page()),
            ComicKey::SizePerPage => {
                compare_per_unit(self.size_per_page(), other.size_per_page(), "page")
            }
        })
    }
}

impl Ranked for Video {
    fn file(&self) -> &MediaFile {
        Video::file(self)
    }

    fn compare_extension(&self, other: &Self, key: RankingKey) -> Option<Ordering> {
        let RankingKey::Video(key) = key else {
            return None;
        };
        Some(match key {
            VideoKey::Duration => self.duration_secs().cmp(&other.duration_secs()),
            VideoKey::SizePerSecond => {
                compare_per_unit(self.size_per_second(), other.size_per_second(), "second")
            }
        })
    }
}

/// Order two entities of the same kind, drawing coin flips from the thread-local generator.
pub fn compare<T: Ranked>(a: &T, b: &T, key: RankingKey) -> Ordering {
    compare_with_rng(a, b, key, &mut rand::rng())
}

/// Order two entities of the same kind using `rng` for the random key.
pub fn compare_with_rng<T, R>(a: &T, b: &T, key: RankingKey, rng: &mut R) -> Ordering
where
    T: Ranked,
    R: Rng + ?Sized,
{
    if let Some(ordering) = a.compare_extension(b, key) {
        return ordering;
    }
    match key.base() {
        Some(base) => compare_base(a.file(), b.file(), base, rng),
        None => {
            trace!(%key, "ranking key not applicable to this kind, treating as equal");
            Ordering::Equal
        }
    }
}

/// Base comparator over the attributes every kind shares.
pub fn compare_base<R: Rng + ?Sized>(a: &MediaFile, b: &MediaFile, key: BaseKey, rng: &mut R) -> Ordering {
    match key {
        BaseKey::Size => a.size_mb().total_cmp(&b.size_mb()),
        BaseKey::Name => locale_cmp(a.name(), b.name()),
        BaseKey::UpdatedDate => a.updated_at().cmp(&b.updated_at()),
        BaseKey::ViewedDate => viewed_or_epoch(a).cmp(&viewed_or_epoch(b)),
        BaseKey::Path => locale_cmp(a.path(), b.path()),
        BaseKey::Id => a.id().cmp(&b.id()),
        BaseKey::Random => {
            if rng.random_bool(0.5) {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
    }
}

/// Compare two entities from the tagged union.
///
/// # Errors
/// Returns `SortError::KindMismatch` if `a` and `b` are different kinds.
pub fn compare_entities(a: &MediaEntity, b: &MediaEntity, key: RankingKey) -> Result<Ordering, SortError> {
    compare_entities_with_rng(a, b, key, &mut rand::rng())
}

/// [`compare_entities`] with an explicit generator for the random key.
///
/// # Errors
/// Returns `SortError::KindMismatch` if `a` and `b` are different kinds.
pub fn compare_entities_with_rng<R: Rng + ?Sized>(
    a: &MediaEntity,
    b: &MediaEntity,
    key: RankingKey,
    rng: &mut R,
) -> Result<Ordering, SortError> {
    match (a, b) {
        (MediaEntity::Generic(a), MediaEntity::Generic(b)) => Ok(compare_with_rng(a, b, key, rng)),
        (MediaEntity::Comic(a), MediaEntity::Comic(b)) => Ok(compare_with_rng(a, b, key, rng)),
        (MediaEntity::Video(a), MediaEntity::Video(b)) => Ok(compare_with_rng(a, b, key, rng)),
        _ => Err(SortError::KindMismatch {
            left: a.media_type(),
            right: b.media_type(),
        }),
    }
}

/// Never-viewed entries count as viewed at the epoch.
fn viewed_or_epoch(file: &MediaFile) -> DateTime<Utc> {
    file.last_viewed_at().unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// `None` is a zero denominator and ranks after every finite value.
fn compare_per_unit(lhs: Option<f64>, rhs: Option<f64>, unit: &str) -> Ordering {
    let (Some(a), Some(b)) = (lhs, rhs) else {
        debug!(unit, "per-unit size compared against a zero denominator");
        return lhs.is_none().cmp(&rhs.is_none());
    };
    a.total_cmp(&b)
}

/// Case-insensitive ordering; on case-only ties lowercase sorts first.
///
/// Characters are compared by code point after lowercasing, so accented
/// letters sort after `z` and punctuation sorts by its ASCII position.
pub(crate) fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}
