//! Testing utilities for mediashelf
//!
//! Record and entity fixtures shared by the unit tests. Paths are derived
//! from names so path ordering follows name ordering.
//!
//! Only available when compiled with `cfg(test)`.

use crate::media::{Comic, MediaFile, MediaRecord, MediaType, Video};

/// Build a minimal record with an id, name and byte size
#[must_use]
pub fn record(id: i64, name: &str, size: u64) -> MediaRecord {
    MediaRecord {
        id: Some(id),
        name: Some(name.to_string()),
        path: Some(format!("/library/{name}")),
        size: Some(size),
        ..MediaRecord::default()
    }
}

/// Build a comic record with a page count
#[must_use]
pub fn comic_record(id: i64, name: &str, size: u64, page: u32) -> MediaRecord {
    MediaRecord {
        page: Some(page),
        ..record(id, name, size)
    }
}

/// Build a video record with a duration
#[must_use]
pub fn video_record(id: i64, name: &str, size: u64, duration: u64) -> MediaRecord {
    MediaRecord {
        duration_in_second: Some(duration),
        ..record(id, name, size)
    }
}

/// Plain image entity
#[must_use]
pub fn file(id: i64, name: &str, size: u64) -> MediaFile {
    MediaFile::from_record(MediaType::Image, &record(id, name, size))
}

/// Comic entity
#[must_use]
pub fn comic(id: i64, name: &str, size: u64, page: u32) -> Comic {
    Comic::from_record(&comic_record(id, name, size, page))
}

/// Video entity
#[must_use]
pub fn video(id: i64, name: &str, size: u64, duration: u64) -> Video {
    Video::from_record(&video_record(id, name, size, duration))
}
