//! Sort and options commands - ordering records by ranking key

use std::path::Path;

use tracing::{info, warn};

use super::{Result, read_entities};
use crate::config::ShelfConfig;
use crate::media::{Category, MediaType};
use crate::output;
use crate::sorting::{RankingKey, order_by_options, sort_entities};
use crate::tags::includes_all_keywords;

/// Parameters for the sort command
#[derive(Debug, Clone)]
pub struct SortParams<'a> {
    pub records: &'a Path,
    pub kind: MediaType,
    pub by: Option<RankingKey>,
    pub reverse: bool,
    pub category: Option<Category>,
    pub keywords: &'a [String],
}

/// Load, filter and print records in ranking order
///
/// # Errors
/// Returns an error if the file cannot be read or is not a JSON array.
pub fn execute_sort(params: &SortParams<'_>, config: &ShelfConfig, quiet: bool) -> Result<()> {
    let key = params.by.unwrap_or(config.default_order);
    if !key.applies_to(params.kind) {
        warn!(%key, kind = %params.kind, "ranking key does not apply to this media type; order is unchanged");
    }

    let mut entities = read_entities(params.records, params.kind)?;
    entities.retain(|entity| {
        params.category.is_none_or(|category| category.contains(entity.file()))
            && includes_all_keywords(entity.file().name(), params.keywords)
    });
    info!(count = entities.len(), %key, "sorting entities");

    sort_entities(&mut entities, key)?;
    if params.reverse {
        entities.reverse();
    }

    if entities.is_empty() {
        if !quiet {
            println!("No entries matched.");
        }
        return Ok(());
    }

    let cover_base = config.cover_base();
    for entity in &entities {
        println!("{}", output::entity_line(entity, &cover_base, quiet));
    }
    Ok(())
}

/// Print the order-by options of a media type
pub fn execute_options(kind: MediaType, quiet: bool) {
    if !quiet {
        println!("Order by options for {}:", kind.route_segment());
    }
    for option in order_by_options(kind) {
        println!("{}", output::option_line(&option, quiet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sort_records_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "b", "page": 3}}, {{"id": 2, "name": "a", "page": 0, "favorited": true}}]"#
        )
        .unwrap();
        let keywords: Vec<String> = Vec::new();
        let params = SortParams {
            records: file.path(),
            kind: MediaType::Comic,
            by: Some("size-per-page".parse().unwrap()),
            reverse: true,
            category: Some(Category::Favorite),
            keywords: &keywords,
        };
        assert!(execute_sort(&params, &ShelfConfig::default(), true).is_ok());
    }

    #[test]
    fn test_sort_tolerates_bad_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1, "updateTime": "soon"}}, {{"id": 2, "size": "big"}}]"#).unwrap();
        let keywords: Vec<String> = Vec::new();
        let params = SortParams {
            records: file.path(),
            kind: MediaType::Video,
            by: Some("date".parse().unwrap()),
            reverse: false,
            category: None,
            keywords: &keywords,
        };
        assert!(execute_sort(&params, &ShelfConfig::default(), true).is_ok());
    }

    #[test]
    fn test_sort_rejects_non_array_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": 1}}"#).unwrap();
        let keywords: Vec<String> = Vec::new();
        let params = SortParams {
            records: file.path(),
            kind: MediaType::Video,
            by: None,
            reverse: false,
            category: None,
            keywords: &keywords,
        };
        let err = execute_sort(&params, &ShelfConfig::default(), true).unwrap_err();
        assert!(matches!(err, crate::MediaShelfError::RecordError(_)));
    }
}
