//! Record source.
//!
//! Everything the algorithms assume about their input is established here: names are
//! non-empty and bounded, types are bounded and defaulted, priorities are within range,
//! and no more than `capacity` records are produced.
//!
//! The validation helpers are pure; [`read_records`] drives them from a line-oriented
//! reader, prompting on a writer.

use crate::config::Limits;
use crate::core::Record;
use crate::error::{Error, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Cuts `s` to at most `max` bytes without splitting a char.
pub fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Trims and bounds a record name. An empty name is an error.
pub fn validate_name(input: &str, limits: &Limits) -> Result<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(truncate(name, limits.max_name_len).to_string())
}

/// Trims and bounds a record type, substituting the default type when blank.
pub fn normalize_type(input: &str, limits: &Limits) -> String {
    let kind = input.trim();
    if kind.is_empty() {
        return limits.default_type.clone();
    }
    truncate(kind, limits.max_type_len).to_string()
}

/// Parses a priority. Blank input yields the default priority.
///
/// # Examples
///
/// ```
/// use invsort::config::Limits;
/// use invsort::intake::parse_priority;
///
/// let limits = Limits::default();
/// assert_eq!(parse_priority("7", &limits).unwrap(), 7);
/// assert_eq!(parse_priority("", &limits).unwrap(), 1);
/// assert!(parse_priority("11", &limits).is_err());
/// ```
pub fn parse_priority(input: &str, limits: &Limits) -> Result<u8> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(limits.default_priority);
    }

    let invalid = || Error::InvalidPriority {
        input: trimmed.to_string(),
        min: *limits.priority.start(),
        max: *limits.priority.end(),
    };

    let value: u8 = trimmed.parse().map_err(|_| invalid())?;
    if limits.priority.contains(&value) {
        Ok(value)
    } else {
        Err(invalid())
    }
}

/// Accumulates validated records up to the configured capacity.
#[derive(Clone, Debug)]
pub struct Intake {
    limits: Limits,
    records: Vec<Record>,
}

impl Intake {
    pub fn new(limits: Limits) -> Self {
        let records = Vec::with_capacity(limits.capacity);
        Self { limits, records }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.limits.capacity
    }

    /// Validates raw fields and appends the resulting record.
    pub fn register(&mut self, name: &str, kind: &str, priority: &str) -> Result<&Record> {
        let name = validate_name(name, &self.limits)?;
        let kind = normalize_type(kind, &self.limits);
        let priority = parse_priority(priority, &self.limits)?;
        self.push(Record::new(name, kind, priority))
    }

    /// Appends a record. Fails once capacity is reached.
    pub fn push(&mut self, record: Record) -> Result<&Record> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.limits.capacity,
            });
        }
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Reads one line without its terminator. `None` at end of input.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}

/// Interactively registers records until an empty name, end of input, or capacity.
///
/// - A blank type becomes the default type.
/// - A blank priority becomes the default priority; an invalid one is re-prompted.
/// - End of input at the type prompt keeps the record with defaults and stops.
/// - End of input at the priority prompt keeps the record with the default priority.
pub fn read_records<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    limits: Limits,
) -> Result<Vec<Record>> {
    let mut intake = Intake::new(limits);
    writeln!(
        output,
        "Record registration (max {}). Leave the name empty to stop.",
        intake.limits().capacity
    )?;

    while !intake.is_full() {
        writeln!(output, "\nRecord {}:", intake.len() + 1)?;

        let Some(raw_name) = prompt(input, output, "  Name: ")? else {
            writeln!(output, "End of input. Registration finished.")?;
            break;
        };
        let name = match validate_name(&raw_name, intake.limits()) {
            Ok(name) => name,
            Err(Error::EmptyName) => {
                writeln!(output, "Registration stopped by the user.")?;
                break;
            }
            Err(e) => return Err(e),
        };

        let Some(raw_kind) = prompt(input, output, "  Type: ")? else {
            let kind = intake.limits().default_type.clone();
            let priority = intake.limits().default_priority;
            intake.push(Record::new(name, kind, priority))?;
            writeln!(output, "End of input. Registration finished.")?;
            break;
        };
        let kind = normalize_type(&raw_kind, intake.limits());

        let priority = loop {
            let range = intake.limits().priority.clone();
            let text = format!("  Priority ({} to {}): ", range.start(), range.end());
            let Some(raw) = prompt(input, output, &text)? else {
                let fallback = intake.limits().default_priority;
                writeln!(output, "End of input. Priority = {fallback}")?;
                break fallback;
            };
            match parse_priority(&raw, intake.limits()) {
                Ok(priority) => break priority,
                Err(e @ Error::InvalidPriority { .. }) => {
                    debug!(error = %e, "intake.priority.rejected");
                    writeln!(output, "  {e}")?;
                }
                Err(e) => return Err(e),
            }
        };

        intake.push(Record::new(name, kind, priority))?;
    }

    if intake.is_full() {
        writeln!(
            output,
            "Maximum number of records ({}) reached.",
            intake.limits().capacity
        )?;
    }

    info!(count = intake.len(), "intake.done");
    Ok(intake.into_records())
}
