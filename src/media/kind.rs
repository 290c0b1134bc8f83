use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::error::RecordError;

/// Media type served by the library backend
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Comic,
    Video,
    /// Plain files without kind-specific metadata
    Image,
}

impl MediaType {
    pub const ALL: [Self; 3] = [Self::Comic, Self::Video, Self::Image];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comic => "comic",
            Self::Video => "video",
            Self::Image => "image",
        }
    }

    /// Plural path segment used by the static server (`comics`, `videos`, `images`)
    #[must_use]
    pub const fn route_segment(self) -> &'static str {
        match self {
            Self::Comic => "comics",
            Self::Video => "videos",
            Self::Image => "images",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s) || kind.route_segment().eq_ignore_ascii_case(s))
            .ok_or_else(|| RecordError::UnknownMediaType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_singular_and_plural() {
        assert_eq!("comic".parse::<MediaType>().unwrap(), MediaType::Comic);
        assert_eq!("Videos".parse::<MediaType>().unwrap(), MediaType::Video);
        assert_eq!("images".parse::<MediaType>().unwrap(), MediaType::Image);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "audio".parse::<MediaType>().unwrap_err();
        assert!(matches!(err, RecordError::UnknownMediaType(s) if s == "audio"));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&MediaType::Comic).unwrap(), "\"comic\"");
        let kind: MediaType = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(kind, MediaType::Video);
    }
}
