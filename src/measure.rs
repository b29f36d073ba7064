//! Instrumentation harness.
//!
//! [`measure`] wraps any routine that takes a record slice and reports a comparison
//! count, and times it with the monotonic clock. Sorts and searches go through the
//! same path.

use crate::algo;
use crate::core::{Record, SortKey};
use std::fmt;
use std::time::{Duration, Instant};

/// An operation over a record slice that reports how many comparisons it made.
///
/// Implemented for every `FnMut(&mut [Record]) -> u64` closure and for [`SortKey`],
/// which runs the algorithm bound to the key.
pub trait Instrumented {
    fn run(&mut self, records: &mut [Record]) -> u64;
}

impl<F> Instrumented for F
where
    F: FnMut(&mut [Record]) -> u64,
{
    #[inline]
    fn run(&mut self, records: &mut [Record]) -> u64 {
        self(records)
    }
}

impl Instrumented for SortKey {
    #[inline]
    fn run(&mut self, records: &mut [Record]) -> u64 {
        algo::sort_by(records, *self)
    }
}

/// Comparison count and wall time of one invocation.
///
/// `elapsed` can read as zero on small inputs. That is the clock's resolution, not a
/// failed measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Measurement {
    pub comparisons: u64,
    pub elapsed: Duration,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparisons: {}, time: {:.6} s",
            self.comparisons,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Runs `op` over `records` and returns what it reported together with its wall time.
///
/// # Examples
///
/// ```
/// use invsort::core::{Record, SortKey};
/// use invsort::measure::measure;
///
/// let mut records = vec![
///     Record::new("Zeta", "core", 3),
///     Record::new("Alpha", "core", 7),
///     Record::new("Mid", "aux", 1),
/// ];
/// let measurement = measure(SortKey::Name, &mut records);
///
/// assert_eq!(measurement.comparisons, 3);
/// assert_eq!(records[0].name, "Alpha");
/// ```
pub fn measure<O: Instrumented>(mut op: O, records: &mut [Record]) -> Measurement {
    let start = Instant::now();
    let comparisons = op.run(records);
    let elapsed = start.elapsed();

    Measurement {
        comparisons,
        elapsed,
    }
}
