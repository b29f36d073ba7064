//! Error types for intake and session orchestration.
//!
//! The sorting and searching routines themselves cannot fail; every variant here is
//! raised at the boundary around them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A record was submitted without a name.
    #[error("record name must not be empty")]
    EmptyName,

    /// A search was requested with an empty key.
    #[error("search key must not be empty")]
    EmptyKey,

    /// Priority input that is not an integer within bounds.
    #[error("invalid priority {input:?}: expected an integer between {min} and {max}")]
    InvalidPriority { input: String, min: u8, max: u8 },

    /// The record source is already full.
    #[error("capacity of {capacity} records reached")]
    CapacityExceeded { capacity: usize },

    /// Binary search needs the canonical sequence to be sorted by name first.
    #[error("binary search requires the records to be sorted by name")]
    NotSortedByName,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
