// Duplicate detection over row streams, with a unique-set fallback for containers.
use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::core::error::{Error, ErrorKind};
use crate::core::source::{Container, Source, Stream};

#[derive(Clone, Debug)]
pub struct DuplicateOptions {
    pub column: String,
    /// When true, values are compared case-insensitively. An earlier
    /// revision called this `case_sensitive` while lower-casing when
    /// true; the name is fixed here, the observable behavior is not.
    pub ignore_case: bool,
}

impl DuplicateOptions {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ignore_case: false,
        }
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Duplicates {
    /// Normalized column value mapped to its occurrence count; only
    /// counts above 1 are retained.
    Tally(BTreeMap<String, u64>),
    /// Distinct values in first-seen order (container fallback; the
    /// column dimension is not consulted).
    Unique(Vec<Value>),
}

impl Duplicates {
    pub fn tally(&self) -> Option<&BTreeMap<String, u64>> {
        match self {
            Duplicates::Tally(tally) => Some(tally),
            Duplicates::Unique(_) => None,
        }
    }

    pub fn unique(&self) -> Option<&[Value]> {
        match self {
            Duplicates::Tally(_) => None,
            Duplicates::Unique(values) => Some(values),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Duplicates::Tally(tally) => {
                let mut map = Map::new();
                for (value, count) in tally {
                    map.insert(value, Value::from(count));
                }
                Value::Object(map)
            }
            Duplicates::Unique(values) => Value::Array(values),
        }
    }
}

/// Tallies repeated values of one column across row-like records.
///
/// Stream inputs are consumed in full: each row must be an object whose
/// `column` member is a scalar. The value's text form is trimmed, then
/// lower-cased when `ignore_case` is set, and rows matching the
/// lower-cased column name are skipped as repeated header rows. The
/// result maps each normalized value that occurred more than once to its
/// count; this operation is not lazy in its return shape even for lazy
/// inputs. Container inputs take the legacy fallback and report the
/// distinct values instead.
pub fn duplicates(input: Source, options: DuplicateOptions) -> Result<Duplicates, Error> {
    if options.column.is_empty() {
        return Err(Error::new(ErrorKind::InvalidInput)
            .with_operation("duplicates")
            .with_message("column name must not be empty"));
    }
    debug!(shape = ?input.shape(), column = %options.column, "duplicates dispatch");

    match input {
        Source::Container(container) => Ok(Duplicates::Unique(unique_values(container))),
        Source::Stream(stream) => Ok(Duplicates::Tally(tally_stream(stream, &options)?)),
    }
}

fn unique_values(container: Container) -> Vec<Value> {
    let mut unique: Vec<Value> = Vec::new();
    for (_, value) in container {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

fn tally_stream(stream: Stream, options: &DuplicateOptions) -> Result<BTreeMap<String, u64>, Error> {
    let header = options.column.to_lowercase();
    let mut tally: BTreeMap<String, u64> = BTreeMap::new();
    for (ordinal, (_, row)) in stream.enumerate() {
        let normalized = normalized_column(&row, options, ordinal as u64)?;
        if normalized == header {
            // A repeated header row is not data.
            continue;
        }
        *tally.entry(normalized).or_insert(0) += 1;
    }
    tally.retain(|_, count| *count > 1);
    Ok(tally)
}

fn normalized_column(row: &Value, options: &DuplicateOptions, ordinal: u64) -> Result<String, Error> {
    let Value::Object(fields) = row else {
        return Err(Error::new(ErrorKind::InvalidInput)
            .with_operation("duplicates")
            .with_index(ordinal)
            .with_message("row is not an object"));
    };
    let cell = fields.get(&options.column).ok_or_else(|| {
        Error::new(ErrorKind::InvalidInput)
            .with_operation("duplicates")
            .with_column(options.column.clone())
            .with_index(ordinal)
            .with_message("row has no such column")
    })?;
    let text = match cell {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => {
            return Err(Error::new(ErrorKind::InvalidInput)
                .with_operation("duplicates")
                .with_column(options.column.clone())
                .with_index(ordinal)
                .with_message("column value is not a scalar"));
        }
    };
    if options.ignore_case {
        Ok(text.to_lowercase())
    } else {
        Ok(text)
    }
}
