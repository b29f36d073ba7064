//! Session orchestration.
//!
//! A [`Session`] owns the canonical record sequence, the scratch buffer the algorithms
//! mutate, and the sortedness tracker. The tracker is what makes binary search safe:
//! the search routine cannot tell whether its input is sorted, so the session refuses
//! to run it unless the last committed sort was by name.

use crate::algo;
use crate::core::{Record, SortKey};
use crate::error::{Error, Result};
use crate::measure::{Measurement, measure};
use tracing::{debug, warn};

/// Outcome of [`Session::sort`]. The sorted records are the session's canonical
/// sequence afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortReport {
    pub key: SortKey,
    pub measurement: Measurement,
}

/// Outcome of [`Session::search`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub key: String,
    /// Index of a record whose name equals `key`, if any.
    pub index: Option<usize>,
    pub measurement: Measurement,
}

impl SearchReport {
    pub fn found(&self) -> bool {
        self.index.is_some()
    }
}

/// The canonical record sequence and the state that travels with it.
#[derive(Clone, Debug, Default)]
pub struct Session {
    records: Vec<Record>,
    scratch: Vec<Record>,
    sorted_by_name: bool,
}

impl Session {
    /// Starts a session over validated records. The sequence is not assumed sorted.
    pub fn new(records: Vec<Record>) -> Self {
        let scratch = Vec::with_capacity(records.len());
        Self {
            records,
            scratch,
            sorted_by_name: false,
        }
    }

    /// The canonical sequence.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the last committed sort was by name.
    pub fn is_sorted_by_name(&self) -> bool {
        self.sorted_by_name
    }

    /// Sorts a copy of the canonical sequence by `key`, then commits it.
    ///
    /// The canonical sequence is untouched until the algorithm returns, at which point
    /// the scratch buffer takes its place. Sorting by name marks the session as
    /// name-sorted; any other key clears the mark.
    pub fn sort(&mut self, key: SortKey) -> SortReport {
        self.scratch.clone_from(&self.records);

        let measurement = measure(key, &mut self.scratch);

        std::mem::swap(&mut self.records, &mut self.scratch);
        self.sorted_by_name = key == SortKey::Name;

        debug!(
            %key,
            algorithm = key.algorithm(),
            len = self.records.len(),
            comparisons = measurement.comparisons,
            elapsed = ?measurement.elapsed,
            "sort.commit"
        );

        SortReport { key, measurement }
    }

    /// Binary search for a record named `key`.
    ///
    /// Fails with [`Error::NotSortedByName`] unless the canonical sequence is currently
    /// sorted by name, and with [`Error::EmptyKey`] for an empty key. When duplicate
    /// names exist, the returned index points at one of them, not necessarily the first.
    pub fn search(&mut self, key: &str) -> Result<SearchReport> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        if !self.sorted_by_name {
            warn!(key, "search.blocked: records are not sorted by name");
            return Err(Error::NotSortedByName);
        }

        let mut index = None;
        let measurement = measure(
            |records: &mut [Record]| {
                let (found, comparisons) = algo::binary_search_by_name(records, key);
                index = found;
                comparisons
            },
            &mut self.records,
        );

        debug!(
            key,
            ?index,
            comparisons = measurement.comparisons,
            elapsed = ?measurement.elapsed,
            "search.done"
        );

        Ok(SearchReport {
            key: key.to_string(),
            index,
            measurement,
        })
    }

    /// Record at `index` in the canonical sequence.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Ends the session, handing back the canonical sequence.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
