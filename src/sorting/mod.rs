//! Ordering of media entities by ranking key
//!
//! - [`keys`]: base and per-kind ranking keys
//! - [`compare`]: comparator table with base fallback
//! - [`options`]: order-by choices offered for each media type
//!
//! List sorting lives here too. The random key is not a total order, so
//! sorting by it shuffles the list instead of running a comparison sort;
//! callers must not expect a stable order while it is selected.

pub mod compare;
pub mod error;
pub mod keys;
pub mod options;

pub use compare::{Ranked, compare, compare_base, compare_entities, compare_entities_with_rng, compare_with_rng};
pub use error::SortError;
pub use keys::{BaseKey, ComicKey, RankingKey, VideoKey};
pub use options::{OrderOption, order_by_options};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::media::MediaEntity;

/// Sort entities of one kind in place.
pub fn sort_by_key<T: Ranked>(items: &mut [T], key: RankingKey) {
    sort_with_rng(items, key, &mut rand::rng());
}

/// [`sort_by_key`] with an explicit generator for the random key.
pub fn sort_with_rng<T, R>(items: &mut [T], key: RankingKey, rng: &mut R)
where
    T: Ranked,
    R: Rng + ?Sized,
{
    if key.is_random() {
        items.shuffle(rng);
    } else {
        items.sort_by(|a, b| compare_with_rng(a, b, key, rng));
    }
}

/// Sort a list of [`MediaEntity`] values that must all share one kind.
///
/// # Errors
/// Returns `SortError::KindMismatch` (leaving `items` untouched) if the list mixes kinds.
pub fn sort_entities(items: &mut [MediaEntity], key: RankingKey) -> Result<(), SortError> {
    if let Some(first) = items.first() {
        let expected = first.media_type();
        if let Some(other) = items.iter().find(|e| e.media_type() != expected) {
            return Err(SortError::KindMismatch {
                left: expected,
                right: other.media_type(),
            });
        }
    }
    let mut rng = rand::rng();
    if key.is_random() {
        items.shuffle(&mut rng);
        return Ok(());
    }
    items.sort_by(|a, b| {
        compare_entities_with_rng(a, b, key, &mut rng).unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaFile;
    use crate::testing::{comic, file, video};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(items: &[MediaFile]) -> Vec<&str> {
        items.iter().map(MediaFile::name).collect()
    }

    #[test]
    fn test_sort_by_name_is_idempotent() {
        let mut items = vec![file(1, "delta", 0), file(2, "Alpha", 0), file(3, "charlie", 0), file(4, "bravo", 0)];
        sort_by_key(&mut items, BaseKey::Name.into());
        let once: Vec<String> = names(&items).into_iter().map(String::from).collect();
        assert_eq!(once, vec!["Alpha", "bravo", "charlie", "delta"]);

        sort_by_key(&mut items, BaseKey::Name.into());
        assert_eq!(names(&items), once);
    }

    #[test]
    fn test_sort_comics_by_size_per_page() {
        let mut items = vec![
            comic(1, "dense", 10 * 1_048_576, 10),
            comic(2, "empty", 1_048_576, 0),
            comic(3, "light", 1_048_576, 100),
        ];
        sort_by_key(&mut items, ComicKey::SizePerPage.into());
        let ids: Vec<i64> = items.iter().map(|c| c.file().id()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_random_key_shuffles_without_losing_items() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items: Vec<MediaFile> = (0..20).map(|i| file(i, "x", 0)).collect();
        sort_with_rng(&mut items, BaseKey::Random.into(), &mut rng);
        let mut ids: Vec<i64> = items.iter().map(MediaFile::id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_entities_by_duration() {
        let mut items = vec![
            MediaEntity::Video(video(1, "long", 0, 300)),
            MediaEntity::Video(video(2, "short", 0, 30)),
        ];
        sort_entities(&mut items, VideoKey::Duration.into()).unwrap();
        assert_eq!(items[0].file().name(), "short");
    }

    #[test]
    fn test_sort_entities_rejects_mixed_kinds() {
        let mut items = vec![
            MediaEntity::Comic(comic(1, "a", 0, 1)),
            MediaEntity::Generic(file(2, "b", 0)),
        ];
        let err = sort_entities(&mut items, BaseKey::Id.into()).unwrap_err();
        assert_eq!(
            err,
            SortError::KindMismatch {
                left: crate::media::MediaType::Comic,
                right: crate::media::MediaType::Image,
            }
        );
        assert_eq!(items[0].file().id(), 1);
    }

    #[test]
    fn test_sort_empty_list() {
        let mut items: Vec<MediaEntity> = Vec::new();
        assert!(sort_entities(&mut items, BaseKey::Size.into()).is_ok());
    }
}
