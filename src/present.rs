//! Presenter.
//!
//! The algorithms and the session never format anything; their results are handed to a
//! [`Presenter`]. [`TablePresenter`] renders them as a bordered text table.

use crate::core::Record;
use crate::error::Result;
use crate::session::{SearchReport, SortReport};
use std::io::Write;

pub trait Presenter {
    /// Shows a record sequence.
    fn records(&mut self, records: &[Record]) -> Result<()>;

    /// Shows the result of a committed sort, including the sorted sequence.
    fn sort_report(&mut self, report: &SortReport, records: &[Record]) -> Result<()>;

    /// Shows the result of a search. `record` is the match, if one was found.
    fn search_report(&mut self, report: &SearchReport, record: Option<&Record>) -> Result<()>;

    /// Shows a free-form line.
    fn notice(&mut self, message: &str) -> Result<()>;

    /// Shows a prompt and leaves the cursor on the same line.
    fn prompt(&mut self, text: &str) -> Result<()>;
}

const BORDER: &str = "+----+------------------------------+--------------------+-----------+";

/// Writes tables and reports as plain text.
pub struct TablePresenter<W: Write> {
    out: W,
}

impl<W: Write> TablePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TablePresenter<W> {
    fn records(&mut self, records: &[Record]) -> Result<()> {
        if records.is_empty() {
            writeln!(self.out, "No records registered.")?;
            return Ok(());
        }

        writeln!(self.out, "\nRecords ({}):", records.len())?;
        writeln!(self.out, "{BORDER}")?;
        writeln!(
            self.out,
            "| ID | Name                         | Type               |  Priority |"
        )?;
        writeln!(self.out, "{BORDER}")?;
        for (i, record) in records.iter().enumerate() {
            writeln!(
                self.out,
                "| {:2} | {:<28} | {:<18} | {:9} |",
                i, record.name, record.kind, record.priority
            )?;
        }
        writeln!(self.out, "{BORDER}")?;
        Ok(())
    }

    fn sort_report(&mut self, report: &SortReport, records: &[Record]) -> Result<()> {
        writeln!(
            self.out,
            "\nResult: {} by {} (ascending)",
            report.key.algorithm(),
            report.key
        )?;
        self.records(records)?;
        writeln!(self.out, "Comparisons: {}", report.measurement.comparisons)?;
        writeln!(
            self.out,
            "Time: {:.6} s",
            report.measurement.elapsed.as_secs_f64()
        )?;
        Ok(())
    }

    fn search_report(&mut self, report: &SearchReport, record: Option<&Record>) -> Result<()> {
        writeln!(
            self.out,
            "Binary search comparisons: {}",
            report.measurement.comparisons
        )?;
        match (report.index, record) {
            (Some(index), Some(record)) => {
                writeln!(self.out, "Record found at index {index}:")?;
                writeln!(self.out, "  Name: {}", record.name)?;
                writeln!(self.out, "  Type: {}", record.kind)?;
                writeln!(self.out, "  Priority: {}", record.priority)?;
            }
            _ => {
                writeln!(self.out, "Record '{}' not found in the current list.", report.key)?;
            }
        }
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}
