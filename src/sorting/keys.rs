//! Ranking keys
//!
//! Every kind accepts the [`BaseKey`] set. Comics and videos add their own
//! closed sets ([`ComicKey`], [`VideoKey`]). A [`RankingKey`] carries exactly
//! one of them; [`RankingKey::base`] is the explicit conversion used when a
//! comparator falls back to the shared attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SortError;
use crate::media::MediaType;

/// Keys applicable to every media kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKey {
    Size,
    Name,
    UpdatedDate,
    ViewedDate,
    Path,
    Id,
    /// Coin flip per comparison; a shuffle, not an order
    Random,
}

/// Comic-only keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComicKey {
    Page,
    SizePerPage,
}

/// Video-only keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoKey {
    Duration,
    SizePerSecond,
}

/// A ranking key selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RankingKey {
    Base(BaseKey),
    Comic(ComicKey),
    Video(VideoKey),
}

impl RankingKey {
    pub const ALL: [Self; 11] = [
        Self::Base(BaseKey::Size),
        Self::Base(BaseKey::Name),
        Self::Base(BaseKey::UpdatedDate),
        Self::Base(BaseKey::ViewedDate),
        Self::Base(BaseKey::Path),
        Self::Base(BaseKey::Id),
        Self::Base(BaseKey::Random),
        Self::Comic(ComicKey::Page),
        Self::Comic(ComicKey::SizePerPage),
        Self::Video(VideoKey::Duration),
        Self::Video(VideoKey::SizePerSecond),
    ];

    /// The base-set key, if this is one.
    #[must_use]
    pub const fn base(self) -> Option<BaseKey> {
        match self {
            Self::Base(key) => Some(key),
            Self::Comic(_) | Self::Video(_) => None,
        }
    }

    /// Media type owning this key's extension set; `None` for base keys.
    #[must_use]
    pub const fn extension_of(self) -> Option<MediaType> {
        match self {
            Self::Base(_) => None,
            Self::Comic(_) => Some(MediaType::Comic),
            Self::Video(_) => Some(MediaType::Video),
        }
    }

    /// Whether entities of `media_type` rank meaningfully by this key.
    #[must_use]
    pub fn applies_to(self, media_type: MediaType) -> bool {
        self.extension_of().is_none_or(|owner| owner == media_type)
    }

    #[must_use]
    pub const fn is_random(self) -> bool {
        matches!(self, Self::Base(BaseKey::Random))
    }

    /// Canonical kebab-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base(BaseKey::Size) => "size",
            Self::Base(BaseKey::Name) => "name",
            Self::Base(BaseKey::UpdatedDate) => "date",
            Self::Base(BaseKey::ViewedDate) => "view-date",
            Self::Base(BaseKey::Path) => "path",
            Self::Base(BaseKey::Id) => "id",
            Self::Base(BaseKey::Random) => "random",
            Self::Comic(ComicKey::Page) => "page",
            Self::Comic(ComicKey::SizePerPage) => "size-per-page",
            Self::Video(VideoKey::Duration) => "duration",
            Self::Video(VideoKey::SizePerSecond) => "size-per-second",
        }
    }
}

impl Default for RankingKey {
    fn default() -> Self {
        Self::Base(BaseKey::Name)
    }
}

impl From<BaseKey> for RankingKey {
    fn from(key: BaseKey) -> Self {
        Self::Base(key)
    }
}

impl From<ComicKey> for RankingKey {
    fn from(key: ComicKey) -> Self {
        Self::Comic(key)
    }
}

impl From<VideoKey> for RankingKey {
    fn from(key: VideoKey) -> Self {
        Self::Video(key)
    }
}

impl fmt::Display for RankingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for RankingKey {
    type Err = SortError;

    /// Accepts the canonical name or the option label, ignoring case and
    /// separators (`size-per-page`, `SizePerPage`, `ViewDate`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        let alias = match wanted.as_str() {
            "updated" | "updateddate" | "updatetime" => Some(Self::Base(BaseKey::UpdatedDate)),
            "viewed" | "vieweddate" | "lastviewed" => Some(Self::Base(BaseKey::ViewedDate)),
            "pages" => Some(Self::Comic(ComicKey::Page)),
            "sizeperduration" => Some(Self::Video(VideoKey::SizePerSecond)),
            _ => None,
        };
        alias
            .or_else(|| Self::ALL.into_iter().find(|key| normalize(key.as_str()) == wanted))
            .ok_or_else(|| SortError::UnknownKey(s.to_string()))
    }
}

impl TryFrom<String> for RankingKey {
    type Error = SortError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RankingKey> for String {
    fn from(key: RankingKey) -> Self {
        key.as_str().to_string()
    }
}
