//! Limits applied by the record source.
//!
//! The algorithms work on slices of any length; these bounds only constrain what
//! [`crate::intake`] accepts.

use std::ops::RangeInclusive;

/// Default number of records a session holds.
pub const DEFAULT_CAPACITY: usize = 20;

/// Default maximum name length, in bytes.
pub const DEFAULT_MAX_NAME_LEN: usize = 29;

/// Default maximum type length, in bytes.
pub const DEFAULT_MAX_TYPE_LEN: usize = 19;

/// Type given to records registered without one.
pub const DEFAULT_TYPE: &str = "unknown";

/// Bounds and defaults for record intake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of records.
    pub capacity: usize,
    /// Longer names are truncated on a char boundary.
    pub max_name_len: usize,
    /// Longer types are truncated on a char boundary.
    pub max_type_len: usize,
    pub default_type: String,
    /// Used when the priority prompt is left blank or input ends.
    pub default_priority: u8,
    pub priority: RangeInclusive<u8>,
}

impl Limits {
    /// Default limits with a different capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_type_len: DEFAULT_MAX_TYPE_LEN,
            default_type: DEFAULT_TYPE.to_string(),
            default_priority: 1,
            priority: 1..=10,
        }
    }
}
