//! Media entity value types
//!
//! A [`MediaEntity`] is one of three kinds: a plain [`MediaFile`], a
//! [`Comic`] (adds a page count) or a [`Video`] (adds a duration). Entities
//! are built once from a [`MediaRecord`] and are immutable afterwards, except
//! for the favorited/archived flags which hosts may toggle through a shared
//! reference. Those flags are atomics, so readers always observe either the
//! old or the new value.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tracing::warn;

use super::cover::CoverBase;
use super::error::RecordError;
use super::kind::MediaType;
use super::record::MediaRecord;
use crate::tags::tokenize;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Attributes shared by every media kind
#[derive(Debug)]
pub struct MediaFile {
    media_type: MediaType,
    id: i64,
    name: String,
    path: String,
    size_bytes: u64,
    updated_at: DateTime<Utc>,
    last_viewed_at: Option<DateTime<Utc>>,
    last_viewed_position: i64,
    favorited: AtomicBool,
    archived: AtomicBool,
}

impl MediaFile {
    /// Build the shared attributes of an entity from a raw record.
    ///
    /// Never fails: an unparseable timestamp is logged and treated as absent,
    /// so `updateTime` falls back to the epoch and `lastViewedTime` to unviewed.
    #[must_use]
    pub fn from_record(media_type: MediaType, record: &MediaRecord) -> Self {
        let id = record.id.unwrap_or_default();
        Self {
            media_type,
            id,
            name: record.name.clone().unwrap_or_default(),
            path: record.path.clone().unwrap_or_default(),
            size_bytes: record.size.unwrap_or_default(),
            updated_at: or_absent(id, record.updated_at()),
            last_viewed_at: or_absent(id, record.last_viewed_at()),
            last_viewed_position: record.last_viewed_position.unwrap_or_default(),
            favorited: AtomicBool::new(record.favorited.unwrap_or_default()),
            archived: AtomicBool::new(record.archived.unwrap_or_default()),
        }
    }

    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        self.media_type
    }

    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Size in megabytes, rounded to two decimals.
    #[must_use]
    pub fn size_mb(&self) -> f64 {
        ((self.size_bytes as f64 / BYTES_PER_MB) * 100.0).round() / 100.0
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[must_use]
    pub const fn last_viewed_at(&self) -> Option<DateTime<Utc>> {
        self.last_viewed_at
    }

    /// Position (page or second) where viewing last stopped.
    #[must_use]
    pub const fn last_viewed_position(&self) -> i64 {
        self.last_viewed_position
    }

    /// True iff a last-viewed timestamp is present, regardless of position.
    #[must_use]
    pub const fn viewed(&self) -> bool {
        self.last_viewed_at.is_some()
    }

    /// Resume hint such as `"12 at 2024-05-02 11:30:00"`, empty when unviewed.
    #[must_use]
    pub fn last_viewed_label(&self) -> String {
        self.last_viewed_at
            .map(|at| format!("{} at {}", self.last_viewed_position, at.format("%Y-%m-%d %H:%M:%S")))
            .unwrap_or_default()
    }

    /// Element id used for the cover image in list views.
    #[must_use]
    pub fn cover_id(&self) -> String {
        format!("cover-{}", self.id)
    }

    /// Name-based cover locator used for plain files.
    #[must_use]
    pub fn cover_url(&self, base: &CoverBase) -> String {
        format!("{base}/{}/{}", self.media_type.route_segment(), self.name)
    }

    /// Tags parsed from the display name.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        tokenize(&self.name)
    }

    #[must_use]
    pub fn is_favorited(&self) -> bool {
        self.favorited.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.archived.load(Ordering::Relaxed)
    }

    pub fn set_favorited(&self, value: bool) {
        self.favorited.store(value, Ordering::Relaxed);
    }

    pub fn set_archived(&self, value: bool) {
        self.archived.store(value, Ordering::Relaxed);
    }

    /// Flip the favorited flag and return the new value.
    pub fn toggle_favorited(&self) -> bool {
        !self.favorited.fetch_xor(true, Ordering::Relaxed)
    }

    /// Flip the archived flag and return the new value.
    pub fn toggle_archived(&self) -> bool {
        !self.archived.fetch_xor(true, Ordering::Relaxed)
    }
}

fn or_absent<T: Default>(id: i64, value: Result<T, RecordError>) -> T {
    value.unwrap_or_else(|e| {
        warn!(id, error = %e, "ignoring unparseable timestamp");
        T::default()
    })
}

impl Clone for MediaFile {
    fn clone(&self) -> Self {
        Self {
            media_type: self.media_type,
            id: self.id,
            name: self.name.clone(),
            path: self.path.clone(),
            size_bytes: self.size_bytes,
            updated_at: self.updated_at,
            last_viewed_at: self.last_viewed_at,
            last_viewed_position: self.last_viewed_position,
            favorited: AtomicBool::new(self.is_favorited()),
            archived: AtomicBool::new(self.is_archived()),
        }
    }
}

/// Comic archive or image directory
#[derive(Debug, Clone)]
pub struct Comic {
    file: MediaFile,
    page: u32,
}

impl Comic {
    #[must_use]
    pub fn from_record(record: &MediaRecord) -> Self {
        Self {
            file: MediaFile::from_record(MediaType::Comic, record),
            page: record.page.unwrap_or_default(),
        }
    }

    #[must_use]
    pub const fn file(&self) -> &MediaFile {
        &self.file
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Megabytes per page; `None` for a comic without pages.
    #[must_use]
    pub fn size_per_page(&self) -> Option<f64> {
        (self.page > 0).then(|| self.file.size_mb() / f64::from(self.page))
    }

    /// First page thumbnail: `{base}/comics/{id}_0.jpg`
    #[must_use]
    pub fn cover_url(&self, base: &CoverBase) -> String {
        format!("{base}/{}/{}_0.jpg", MediaType::Comic.route_segment(), self.file.id)
    }
}

/// Video file
#[derive(Debug, Clone)]
pub struct Video {
    file: MediaFile,
    duration_secs: u64,
}

impl Video {
    #[must_use]
    pub fn from_record(record: &MediaRecord) -> Self {
        Self {
            file: MediaFile::from_record(MediaType::Video, record),
            duration_secs: record.duration_in_second.unwrap_or_default(),
        }
    }

    #[must_use]
    pub const fn file(&self) -> &MediaFile {
        &self.file
    }

    #[must_use]
    pub const fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    /// Megabytes per second of footage; `None` for a zero-length video.
    #[must_use]
    pub fn size_per_second(&self) -> Option<f64> {
        (self.duration_secs > 0).then(|| self.file.size_mb() / self.duration_secs as f64)
    }

    /// Poster frame: `{base}/videos/{id}.jpg`
    #[must_use]
    pub fn cover_url(&self, base: &CoverBase) -> String {
        format!("{base}/{}/{}.jpg", MediaType::Video.route_segment(), self.file.id)
    }
}

impl AsRef<MediaFile> for MediaFile {
    fn as_ref(&self) -> &MediaFile {
        self
    }
}

impl AsRef<MediaFile> for Comic {
    fn as_ref(&self) -> &MediaFile {
        &self.file
    }
}

impl AsRef<MediaFile> for Video {
    fn as_ref(&self) -> &MediaFile {
        &self.file
    }
}

/// Any media entity, tagged by kind
#[derive(Debug, Clone)]
pub enum MediaEntity {
    Generic(MediaFile),
    Comic(Comic),
    Video(Video),
}

impl MediaEntity {
    /// Build the entity variant matching `media_type`.
    #[must_use]
    pub fn from_record(media_type: MediaType, record: &MediaRecord) -> Self {
        match media_type {
            MediaType::Comic => Self::Comic(Comic::from_record(record)),
            MediaType::Video => Self::Video(Video::from_record(record)),
            MediaType::Image => Self::Generic(MediaFile::from_record(media_type, record)),
        }
    }

    /// Build an entity straight from a JSON value.
    ///
    /// # Errors
    /// Returns `RecordError::Json` if a present field has the wrong type.
    pub fn from_json(media_type: MediaType, value: &serde_json::Value) -> Result<Self, RecordError> {
        Ok(Self::from_record(media_type, &MediaRecord::from_json(value)?))
    }

    /// Parse a JSON array of records into entities of one kind.
    ///
    /// Malformed elements are skipped (see [`MediaRecord::list_from_str`]).
    ///
    /// # Errors
    /// Returns `RecordError::Json` if the text is not a JSON array.
    pub fn list_from_str(media_type: MediaType, json: &str) -> Result<Vec<Self>, RecordError> {
        Ok(MediaRecord::list_from_str(json)?
            .iter()
            .map(|record| Self::from_record(media_type, record))
            .collect())
    }

    #[must_use]
    pub const fn file(&self) -> &MediaFile {
        match self {
            Self::Generic(file) => file,
            Self::Comic(comic) => &comic.file,
            Self::Video(video) => &video.file,
        }
    }

    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        self.file().media_type()
    }

    #[must_use]
    pub fn cover_url(&self, base: &CoverBase) -> String {
        match self {
            Self::Generic(file) => file.cover_url(base),
            Self::Comic(comic) => comic.cover_url(base),
            Self::Video(video) => video.cover_url(base),
        }
    }

    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.file().tags()
    }
}

impl AsRef<MediaFile> for MediaEntity {
    fn as_ref(&self) -> &MediaFile {
        self.file()
    }
}
