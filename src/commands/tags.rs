//! Tags and cloud commands - tag extraction from filenames

use std::path::Path;

use tracing::info;

use super::{Result, read_records};
use crate::output;
use crate::tags::{TagFrequency, par_aggregate, tokenize};

/// Print the tags of each name
pub fn execute_tags(names: &[String], quiet: bool) {
    for name in names {
        println!("{}", output::name_with_tags(name, &tokenize(name), quiet));
    }
}

/// Print tag frequencies over the names in a records file
///
/// # Errors
/// Returns an error if the file cannot be read or is not a list of records.
pub fn execute_cloud(records: &Path, limit: Option<usize>, quiet: bool) -> Result<()> {
    let names: Vec<String> = read_records(records)?
        .into_iter()
        .filter_map(|record| record.name)
        .collect();
    info!(count = names.len(), "counting tags");

    let frequency = par_aggregate(&names);
    print_cloud(&frequency, limit, quiet);
    Ok(())
}

fn print_cloud(frequency: &TagFrequency, limit: Option<usize>, quiet: bool) {
    if frequency.is_empty() {
        if !quiet {
            println!("No tags found.");
        }
        return;
    }

    if !quiet {
        println!("Tags by frequency:");
    }
    let ranked = frequency.ranked();
    let shown = limit.unwrap_or(ranked.len());
    for (tag, count) in ranked.into_iter().take(shown) {
        println!("{}", output::tag_with_count(tag, count, quiet));
    }
}
