use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::entity::MediaFile;

/// Library views an entity can appear in
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Everything not archived
    #[default]
    Home,
    Favorite,
    /// Entries opened at least once
    History,
    Archive,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Home, Self::Favorite, Self::History, Self::Archive];

    /// Whether `file` belongs to this view. Reads flags at call time.
    #[must_use]
    pub fn contains(self, file: &MediaFile) -> bool {
        match self {
            Self::Home => !file.is_archived(),
            Self::Favorite => file.is_favorited(),
            Self::History => file.viewed(),
            Self::Archive => file.is_archived(),
        }
    }
}
