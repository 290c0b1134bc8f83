//! Sorting-specific error types
//!
//! The typed comparators never fail. These errors come from the untyped
//! edges: comparing [`MediaEntity`](crate::media::MediaEntity) values of
//! different kinds, and parsing ranking-key names typed by a user.

use thiserror::Error;

use crate::media::MediaType;

/// Sorting errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// Entities of different kinds cannot be ordered against each other
    #[error("Cannot compare {left} with {right}; partition entities by kind first")]
    KindMismatch { left: MediaType, right: MediaType },

    /// Ranking key name not recognized
    #[error("Unknown ranking key: {0}")]
    UnknownKey(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
