//! Mediashelf - tag extraction and ordering for a personal media library
//!
//! This library turns comic, video and image filenames into descriptive tags
//! and orders library entries by user-selected ranking keys. It works on
//! records already fetched from the library backend and has no I/O of its own.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod media;
pub mod output;
pub mod sorting;
pub mod tags;

#[cfg(test)]
pub mod testing;

pub use media::{Comic, MediaEntity, MediaFile, MediaRecord, MediaType, Video};
pub use sorting::{RankingKey, compare};
pub use tags::{aggregate, tokenize};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MediaShelfError {
    /// Record conversion error
    #[error("Record error: {0}")]
    RecordError(#[from] media::RecordError),
    /// Sorting error
    #[error("Sort error: {0}")]
    SortError(#[from] sorting::SortError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
