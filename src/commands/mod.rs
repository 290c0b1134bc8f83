//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and prints its result.

pub mod sort;
pub mod tags;

use std::fs;
use std::path::Path;

use crate::MediaShelfError;
use crate::media::{MediaEntity, MediaRecord, MediaType};

pub use sort::{execute_options as options, execute_sort as sort};
pub use tags::{execute_cloud as cloud, execute_tags as tags};

type Result<T> = std::result::Result<T, MediaShelfError>;

fn read_records(path: &Path) -> Result<Vec<MediaRecord>> {
    let text = fs::read_to_string(path)?;
    Ok(MediaRecord::list_from_str(&text)?)
}

fn read_entities(path: &Path, kind: MediaType) -> Result<Vec<MediaEntity>> {
    let text = fs::read_to_string(path)?;
    Ok(MediaEntity::list_from_str(kind, &text)?)
}
