// Depth-first pre-order leaf walk over nested arrays and objects.
use tracing::debug;

use crate::core::source::{Container, Entry, Source, Stream};

#[derive(Debug)]
pub enum Flattened {
    Eager(Container),
    Lazy(FlattenStream),
}

impl Flattened {
    pub fn is_lazy(&self) -> bool {
        matches!(self, Flattened::Lazy(_))
    }

    /// Drives a lazy result to completion; an eager result is returned
    /// as-is. Runs forever on an unbounded stream.
    pub fn realize(self) -> Container {
        match self {
            Flattened::Eager(container) => container,
            Flattened::Lazy(stream) => Container::from_entries(stream.collect()),
        }
    }
}

/// Recursively descends into nested array/object values and yields the
/// leaves as entries carrying the innermost key.
///
/// Traversal is depth-first pre-order; children follow their node's
/// natural iteration order. Keys from outer levels are not composed into
/// the yielded key, so collisions across nesting levels are expected and
/// callers needing uniqueness must not rely on keys. Both paths share
/// one walk: container inputs drain it eagerly into a new container,
/// stream inputs keep it lazy with memory bounded by the nesting depth.
/// (Realized inputs once flattened to bare values; both paths now agree
/// on keyed leaves.)
pub fn flatten(input: Source) -> Flattened {
    debug!(shape = ?input.shape(), "flatten dispatch");
    match input {
        Source::Container(container) => {
            let walk = FlattenStream::over(Frame::Entries(container.into_entries().into_iter()));
            Flattened::Eager(Container::from_entries(walk.collect()))
        }
        Source::Stream(stream) => Flattened::Lazy(FlattenStream::over(Frame::Stream(stream))),
    }
}

#[derive(Debug)]
pub struct FlattenStream {
    // One frame per open nesting level; the deepest frame is last.
    stack: Vec<Frame>,
}

#[derive(Debug)]
enum Frame {
    Stream(Stream),
    Entries(std::vec::IntoIter<Entry>),
}

impl Frame {
    fn next_entry(&mut self) -> Option<Entry> {
        match self {
            Frame::Stream(stream) => stream.next(),
            Frame::Entries(entries) => entries.next(),
        }
    }
}

impl FlattenStream {
    fn over(root: Frame) -> Self {
        Self { stack: vec![root] }
    }
}

impl Iterator for FlattenStream {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            let frame = self.stack.last_mut()?;
            match frame.next_entry() {
                None => {
                    self.stack.pop();
                }
                Some((key, value)) => match crate::core::source::entries_of(value) {
                    Ok(nested) => self.stack.push(Frame::Entries(nested.into_iter())),
                    Err(leaf) => return Some((key, leaf)),
                },
            }
        }
    }
}
