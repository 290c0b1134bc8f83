//! Output formatting for CLI display
//!
//! Helpers that render tags, entities and order-by options as terminal
//! lines. Quiet mode drops decoration so output can be piped.

use colored::Colorize;

use crate::media::{CoverBase, MediaEntity};
use crate::sorting::OrderOption;

/// Format a tag with its occurrence count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} ({count})")
    }
}

/// Format the tags of one filename
#[must_use]
pub fn name_with_tags(name: &str, tags: &[String], quiet: bool) -> String {
    if quiet {
        tags.join("\t")
    } else if tags.is_empty() {
        format!("  {name} {}", "(no tags)".dimmed())
    } else {
        format!("  {} [{}]", name.bold(), tags.join(", "))
    }
}

/// Format an entity as one list row
#[must_use]
pub fn entity_line(entity: &MediaEntity, cover_base: &CoverBase, quiet: bool) -> String {
    let file = entity.file();
    if quiet {
        return file.name().to_string();
    }

    let mut line = format!("  {:>6}  {:>9.2} MB  {}", file.id(), file.size_mb(), file.name());
    match entity {
        MediaEntity::Comic(comic) => line.push_str(&format!("  ({} pages)", comic.page())),
        MediaEntity::Video(video) => line.push_str(&format!("  ({}s)", video.duration_secs())),
        MediaEntity::Generic(_) => {}
    }
    if file.is_favorited() {
        line.push_str(&format!("  {}", "★".yellow()));
    }
    if file.viewed() {
        line.push_str(&format!("  {}", file.last_viewed_label().dimmed()));
    }
    line.push_str(&format!("  {}", entity.cover_url(cover_base).dimmed()));

    if file.is_archived() {
        line.dimmed().to_string()
    } else {
        line
    }
}

/// Format an order-by option
#[must_use]
pub fn option_line(option: &OrderOption, quiet: bool) -> String {
    if quiet {
        option.key.to_string()
    } else {
        format!("  {:<14} {}", option.key.to_string().green(), option.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::{ComicKey, RankingKey};
    use crate::testing::comic;

    #[test]
    fn test_tag_with_count() {
        assert_eq!(tag_with_count("x", 2, true), "x");
        assert_eq!(tag_with_count("x", 2, false), "  x (2)");
    }

    #[test]
    fn test_name_with_tags_quiet() {
        let tags = vec!["a".to_string(), "b".to_string()];
        assert_eq!(name_with_tags("[a]b", &tags, true), "a\tb");
    }

    #[test]
    fn test_entity_line() {
        colored::control::set_override(false);
        let entity = MediaEntity::Comic(comic(12, "[a]b", 3 * 1_048_576, 24));
        let base = CoverBase::new("http://s");
        assert_eq!(entity_line(&entity, &base, true), "[a]b");

        let line = entity_line(&entity, &base, false);
        assert!(line.contains("3.00 MB"));
        assert!(line.contains("(24 pages)"));
        assert!(line.contains("http://s/comics/12_0.jpg"));
    }

    #[test]
    fn test_option_line_quiet() {
        let option = OrderOption {
            key: RankingKey::Comic(ComicKey::SizePerPage),
            label: "SizePerPage",
        };
        assert_eq!(option_line(&option, true), "size-per-page");
    }
}
