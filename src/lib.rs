//! # invsort
//!
//! `invsort` keeps a small inventory of named, typed, prioritized records and orders it
//! with three classic sorting algorithms, each bound to one key, plus a binary search by
//! name. Every operation reports how many key comparisons it made and how long it took.
//!
//! ## Key Features
//!
//! - **Instrumented Algorithms**: Bubble Sort by name (with early exit), Insertion Sort by
//!   type (stable) and Selection Sort by priority (single swap per step). Each returns a
//!   fresh comparison count.
//! - **Uniform Timing**: [`measure`] wraps anything implementing [`Instrumented`], so sorts
//!   and searches are timed the same way.
//! - **Guarded Search**: [`Session`] tracks whether the canonical sequence is sorted by
//!   name and refuses a binary search otherwise.
//! - **Generic Core**: The `*_by` functions in [`algo`] sort any slice with a comparison
//!   closure; the record wrappers just fix the comparator.
//!
//! ## Usage
//!
//! ### Sorting and Searching Records
//!
//! ```rust
//! use invsort::prelude::*;
//!
//! let mut session = Session::new(vec![
//!     Record::new("Zeta", "core", 3),
//!     Record::new("Alpha", "core", 7),
//!     Record::new("Mid", "aux", 1),
//! ]);
//!
//! // Searching before sorting by name is refused.
//! assert!(session.search("Mid").is_err());
//!
//! let report = session.sort(SortKey::Name);
//! assert_eq!(report.measurement.comparisons, 3);
//!
//! let found = session.search("Mid").unwrap();
//! assert_eq!(found.index, Some(1));
//! ```
//!
//! ### Counting Comparisons on Any Slice
//!
//! ```rust
//! use invsort::algo::selection_sort_by;
//!
//! let mut data = vec![4, 2, 3, 1];
//! let comparisons = selection_sort_by(&mut data, |a, b| a.cmp(b));
//!
//! assert_eq!(data, vec![1, 2, 3, 4]);
//! assert_eq!(comparisons, 6);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Bubble Sort**: O(n²) comparisons worst case, exactly `n - 1` on sorted input.
//! - **Insertion Sort**: O(n²) worst case, `n - 1` on input already sorted by type.
//! - **Selection Sort**: always `n(n - 1) / 2` comparisons, at most `n - 1` swaps.
//! - **Binary Search**: at most `⌊log₂ n⌋ + 1` comparisons.
//!
//! These are teaching algorithms meant for the small record counts the record source
//! allows, not for large datasets.

pub mod algo;
pub mod config;
pub mod core;
pub mod error;
pub mod intake;
pub mod measure;
pub mod present;
pub mod session;
pub mod shell;

pub use algo::{
    binary_search_by_name, bubble_sort_by_name, insertion_sort_by_type,
    selection_sort_by_priority,
};
pub use crate::core::{Record, RecordOrder, SortKey};
pub use error::{Error, Result};
pub use measure::{Instrumented, Measurement, measure};
pub use session::Session;

pub mod prelude {
    pub use crate::algo::{
        binary_search_by_name, bubble_sort_by_name, insertion_sort_by_type,
        selection_sort_by_priority, sort_by,
    };
    pub use crate::config::Limits;
    pub use crate::core::{ByName, ByPriority, ByType, Record, RecordOrder, SortKey};
    pub use crate::error::{Error, Result};
    pub use crate::measure::{Instrumented, Measurement, measure};
    pub use crate::session::{SearchReport, Session, SortReport};
}
