// Dual input shapes: realized containers and single-pass entry streams.
use std::fmt;

use serde_json::{Map, Value};

use crate::core::error::{Error, ErrorKind};
use crate::core::key::Key;

pub type Entry = (Key, Value);

/// Finite, re-iterable, key-addressable collection of entries.
///
/// Built from a JSON array (index keys), a JSON object (member-name keys,
/// map iteration order), or an explicit entry list. Scalars are not
/// iterable and are rejected at construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Container {
    entries: Vec<Entry>,
}

impl Container {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn from_value(value: Value) -> Result<Self, Error> {
        match entries_of(value) {
            Ok(entries) => Ok(Self { entries }),
            Err(other) => Err(Error::new(ErrorKind::InvalidInput)
                .with_message(format!("input is not iterable: {}", value_type_name(&other)))),
        }
    }

    pub fn from_json(input: &str) -> Result<Self, Error> {
        let value: Value = crate::json::parse::from_str(input).map_err(|err| {
            Error::new(ErrorKind::InvalidInput)
                .with_message("input is not valid JSON")
                .with_source(err)
        })?;
        Self::from_value(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }

    pub fn get_name(&self, name: &str) -> Option<&Value> {
        self.get(&Key::Name(name.to_string()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn into_stream(self) -> Stream {
        Stream::from_iter(self.entries.into_iter())
    }

    /// Realizes the container back into a JSON value. Index keys that are
    /// dense from 0 produce an array; any other key set produces an object
    /// keyed by the display form, later duplicates winning.
    pub fn into_value(self) -> Value {
        let dense = self
            .entries
            .iter()
            .enumerate()
            .all(|(position, (key, _))| key.as_index() == Some(position as u64));
        if dense {
            return Value::Array(self.entries.into_iter().map(|(_, value)| value).collect());
        }
        let mut map = Map::new();
        for (key, value) in self.entries {
            map.insert(key.to_string(), value);
        }
        Value::Object(map)
    }
}

impl IntoIterator for Container {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Single-pass, possibly unbounded producer of entries.
///
/// Consumed by value; once a stream has been driven it cannot be
/// restarted. Abandoning a partially consumed stream is always safe.
pub struct Stream {
    inner: Box<dyn Iterator<Item = Entry>>,
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").finish_non_exhaustive()
    }
}

impl Stream {
    pub fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = Entry> + 'static,
    {
        Self { inner: Box::new(iter) }
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self::from_iter(entries.into_iter())
    }

    /// Wraps a plain value producer, assigning index keys from 0.
    pub fn from_values<I>(values: I) -> Self
    where
        I: Iterator<Item = Value> + 'static,
    {
        Self::from_iter(
            values
                .enumerate()
                .map(|(index, value)| (Key::from(index), value)),
        )
    }

    pub fn from_json(input: &str) -> Result<Self, Error> {
        Ok(Container::from_json(input)?.into_stream())
    }

    /// Builds a row stream from line-delimited JSON, one entry per
    /// non-blank line, index keys from 0. The whole text is decoded up
    /// front; laziness starts at the entry level.
    pub fn from_json_lines(input: &str) -> Result<Self, Error> {
        let rows = crate::json::parse::values_from_lines(input).map_err(|err| {
            Error::new(ErrorKind::InvalidInput)
                .with_message("input is not valid line-delimited JSON")
                .with_source(err)
        })?;
        Ok(Self::from_values(rows.into_iter()))
    }
}

impl Iterator for Stream {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        self.inner.next()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shape {
    Container,
    Stream,
}

/// Operation input: a realized container or a single-pass stream.
///
/// The shape decides the production strategy of every operation:
/// containers get eager, realized results; streams get lazy ones. The
/// "is it iterable" check lives at the typed construction boundary
/// (`Container::from_value`), so holding a `Source` already implies an
/// iterable input.
#[derive(Debug)]
pub enum Source {
    Container(Container),
    Stream(Stream),
}

impl Source {
    pub fn from_value(value: Value) -> Result<Self, Error> {
        Ok(Source::Container(Container::from_value(value)?))
    }

    pub fn shape(&self) -> Shape {
        match self {
            Source::Container(_) => Shape::Container,
            Source::Stream(_) => Shape::Stream,
        }
    }
}

impl From<Container> for Source {
    fn from(container: Container) -> Self {
        Source::Container(container)
    }
}

impl From<Stream> for Source {
    fn from(stream: Stream) -> Self {
        Source::Stream(stream)
    }
}

// Scalars come back unchanged so callers can report what they saw.
pub(crate) fn entries_of(value: Value) -> Result<Vec<Entry>, Value> {
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (Key::from(index), item))
            .collect()),
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(name, item)| (Key::Name(name), item))
            .collect()),
        other => Err(other),
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
