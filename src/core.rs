//! Core types for invsort.
//!
//! This module defines:
//! - [`Record`]: The named, typed, prioritized value every algorithm moves around.
//! - [`SortKey`]: The three keys a record sequence can be ordered by.
//! - [`RecordOrder`]: The comparator trait, with [`ByName`], [`ByType`] and [`ByPriority`].

use std::cmp::Ordering;
use std::fmt;

/// A single inventory entry.
///
/// Records carry no identity of their own. Two records with the same name, type and
/// priority are indistinguishable; the only identity is the position in a sequence,
/// and that changes on every sort.
///
/// # Examples
///
/// ```
/// use invsort::core::Record;
///
/// let record = Record::new("chip central", "control", 9);
/// assert_eq!(record.name, "chip central");
/// assert_eq!(record.kind, "control");
/// assert_eq!(record.priority, 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    pub name: String,
    /// The record's type. Spelled `kind` because `type` is reserved.
    pub kind: String,
    pub priority: u8,
}

impl Record {
    /// Builds a record from already validated parts.
    ///
    /// No checks are made here; see [`crate::intake`] for the validating path.
    pub fn new(name: impl Into<String>, kind: impl Into<String>, priority: u8) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            priority,
        }
    }
}

/// The key a sequence is ordered by, and the algorithm bound to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Bubble sort over names.
    Name,
    /// Insertion sort over types.
    Type,
    /// Selection sort over priorities.
    Priority,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Type, SortKey::Priority];

    /// Name of the algorithm that sorts by this key.
    pub fn algorithm(self) -> &'static str {
        match self {
            SortKey::Name => "Bubble Sort",
            SortKey::Type => "Insertion Sort",
            SortKey::Priority => "Selection Sort",
        }
    }

    /// Compares two records on this key.
    #[inline]
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Name => ByName::compare(a, b),
            SortKey::Type => ByType::compare(a, b),
            SortKey::Priority => ByPriority::compare(a, b),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Name => "name",
            SortKey::Type => "type",
            SortKey::Priority => "priority",
        };
        f.write_str(label)
    }
}

/// A total order over [`Record`] on one key.
///
/// Implementors are zero-sized markers so the algorithms can be monomorphized over the
/// comparator instead of dispatching on [`SortKey`] for every comparison.
///
/// # Examples
///
/// ```
/// use invsort::core::{ByName, Record, RecordOrder};
/// use std::cmp::Ordering;
///
/// let a = Record::new("Alpha", "core", 7);
/// let b = Record::new("Zeta", "core", 3);
/// assert_eq!(ByName::compare(&a, &b), Ordering::Less);
/// ```
pub trait RecordOrder {
    /// Three-way comparison of `a` against `b`.
    fn compare(a: &Record, b: &Record) -> Ordering;

    /// `true` when `a` must move past `b` in ascending order.
    #[inline(always)]
    fn greater(a: &Record, b: &Record) -> bool {
        Self::compare(a, b) == Ordering::Greater
    }
}

/// Byte-wise ascending order on [`Record::name`].
pub struct ByName;

/// Byte-wise ascending order on [`Record::kind`].
pub struct ByType;

/// Numeric ascending order on [`Record::priority`].
pub struct ByPriority;

impl RecordOrder for ByName {
    #[inline(always)]
    fn compare(a: &Record, b: &Record) -> Ordering {
        a.name.as_bytes().cmp(b.name.as_bytes())
    }
}

impl RecordOrder for ByType {
    #[inline(always)]
    fn compare(a: &Record, b: &Record) -> Ordering {
        a.kind.as_bytes().cmp(b.kind.as_bytes())
    }
}

impl RecordOrder for ByPriority {
    #[inline(always)]
    fn compare(a: &Record, b: &Record) -> Ordering {
        a.priority.cmp(&b.priority)
    }
}
