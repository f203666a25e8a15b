// Value transformation that preserves keys, eager or on demand.
use tracing::debug;

use serde_json::Value;

use crate::core::source::{Container, Source, Stream};

#[derive(Debug)]
pub enum Mapped {
    Eager(Container),
    Lazy(Stream),
}

impl Mapped {
    pub fn is_lazy(&self) -> bool {
        matches!(self, Mapped::Lazy(_))
    }

    /// Drives a lazy result to completion; an eager result is returned
    /// as-is. Runs forever on an unbounded stream.
    pub fn realize(self) -> Container {
        match self {
            Mapped::Eager(container) => container,
            Mapped::Lazy(stream) => Container::from_entries(stream.collect()),
        }
    }
}

/// Applies `transform` to every value, keeping the associated key.
///
/// Container inputs are transformed eagerly into a new container. Stream
/// inputs return a lazy stream; `transform` runs exactly once per entry,
/// at the moment that entry is pulled. A panic inside `transform` is not
/// caught and surfaces in whichever frame is driving the stream.
pub fn map<F>(input: Source, mut transform: F) -> Mapped
where
    F: FnMut(Value) -> Value + 'static,
{
    debug!(shape = ?input.shape(), "map dispatch");
    match input {
        Source::Container(container) => {
            let entries = container
                .into_entries()
                .into_iter()
                .map(|(key, value)| (key, transform(value)))
                .collect();
            Mapped::Eager(Container::from_entries(entries))
        }
        Source::Stream(stream) => Mapped::Lazy(Stream::from_iter(
            stream.map(move |(key, value)| (key, transform(value))),
        )),
    }
}
