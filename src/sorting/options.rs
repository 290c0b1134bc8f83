//! Order-by choices offered per media type

use serde::Serialize;

use super::keys::{BaseKey, ComicKey, RankingKey, VideoKey};
use crate::media::MediaType;

/// One entry of the order-by dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderOption {
    pub key: RankingKey,
    pub label: &'static str,
}

const fn option(key: RankingKey, label: &'static str) -> OrderOption {
    OrderOption { key, label }
}

const BASE_OPTIONS: [OrderOption; 7] = [
    option(RankingKey::Base(BaseKey::Name), "Name"),
    option(RankingKey::Base(BaseKey::Size), "Size"),
    option(RankingKey::Base(BaseKey::UpdatedDate), "Date"),
    option(RankingKey::Base(BaseKey::Path), "Path"),
    option(RankingKey::Base(BaseKey::Id), "ID"),
    option(RankingKey::Base(BaseKey::Random), "Random"),
    option(RankingKey::Base(BaseKey::ViewedDate), "ViewDate"),
];

const COMIC_OPTIONS: [OrderOption; 2] = [
    option(RankingKey::Comic(ComicKey::Page), "Page"),
    option(RankingKey::Comic(ComicKey::SizePerPage), "SizePerPage"),
];

const VIDEO_OPTIONS: [OrderOption; 2] = [
    option(RankingKey::Video(VideoKey::Duration), "Duration"),
    option(RankingKey::Video(VideoKey::SizePerSecond), "SizePerSecond"),
];

/// Base options followed by the kind's own extension options.
#[must_use]
pub fn order_by_options(media_type: MediaType) -> Vec<OrderOption> {
    let extension: &[OrderOption] = match media_type {
        MediaType::Comic => &COMIC_OPTIONS,
        MediaType::Video => &VIDEO_OPTIONS,
        MediaType::Image => &[],
    };
    BASE_OPTIONS.iter().chain(extension).copied().collect()
}
