// Partition an input into bounded chunks, eagerly or one chunk at a time.
use tracing::debug;

use crate::core::error::{Error, ErrorKind};
use crate::core::key::Key;
use crate::core::source::{Container, Entry, Source, Stream};

#[derive(Clone, Debug)]
pub struct ChunkOptions {
    pub size: usize,
    pub preserve_keys: bool,
}

impl ChunkOptions {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            preserve_keys: false,
        }
    }

    pub fn preserve_keys(mut self, preserve_keys: bool) -> Self {
        self.preserve_keys = preserve_keys;
        self
    }
}

#[derive(Debug)]
pub enum Chunked {
    Eager(Vec<Container>),
    Lazy(ChunkStream),
}

impl Chunked {
    pub fn is_lazy(&self) -> bool {
        matches!(self, Chunked::Lazy(_))
    }
}

impl IntoIterator for Chunked {
    type Item = Container;
    type IntoIter = ChunkedIter;

    fn into_iter(self) -> ChunkedIter {
        match self {
            Chunked::Eager(chunks) => ChunkedIter::Eager(chunks.into_iter()),
            Chunked::Lazy(stream) => ChunkedIter::Lazy(stream),
        }
    }
}

pub enum ChunkedIter {
    Eager(std::vec::IntoIter<Container>),
    Lazy(ChunkStream),
}

impl Iterator for ChunkedIter {
    type Item = Container;

    fn next(&mut self) -> Option<Container> {
        match self {
            ChunkedIter::Eager(chunks) => chunks.next(),
            ChunkedIter::Lazy(stream) => stream.next(),
        }
    }
}

/// Groups consecutive entries into containers of up to `size` elements.
///
/// The size check fails before any lazy production begins; a `Chunked`
/// in hand means the call was well-formed. Container inputs partition
/// eagerly; stream inputs yield one chunk per pull and never buffer more
/// than the chunk in progress. A trailing partial chunk is yielded once.
pub fn chunk(input: Source, options: ChunkOptions) -> Result<Chunked, Error> {
    if options.size == 0 {
        return Err(Error::new(ErrorKind::InvalidInput)
            .with_operation("chunk")
            .with_message("chunk size must be positive"));
    }
    debug!(shape = ?input.shape(), size = options.size, "chunk dispatch");

    match input {
        Source::Container(container) => Ok(Chunked::Eager(chunk_eager(container, &options))),
        Source::Stream(stream) => Ok(Chunked::Lazy(ChunkStream::new(stream, options))),
    }
}

fn chunk_eager(container: Container, options: &ChunkOptions) -> Vec<Container> {
    let mut chunks = Vec::new();
    let mut pending: Vec<Entry> = Vec::new();
    for entry in container {
        push_entry(&mut pending, entry, options.preserve_keys);
        if pending.len() == options.size {
            chunks.push(Container::from_entries(std::mem::take(&mut pending)));
        }
    }
    if !pending.is_empty() {
        chunks.push(Container::from_entries(pending));
    }
    chunks
}

#[derive(Debug)]
pub struct ChunkStream {
    source: Stream,
    size: usize,
    preserve_keys: bool,
    done: bool,
}

impl ChunkStream {
    fn new(source: Stream, options: ChunkOptions) -> Self {
        Self {
            source,
            size: options.size,
            preserve_keys: options.preserve_keys,
            done: false,
        }
    }
}

impl Iterator for ChunkStream {
    type Item = Container;

    fn next(&mut self) -> Option<Container> {
        if self.done {
            return None;
        }
        let mut pending: Vec<Entry> = Vec::new();
        while pending.len() < self.size {
            match self.source.next() {
                Some(entry) => push_entry(&mut pending, entry, self.preserve_keys),
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if pending.is_empty() {
            return None;
        }
        Some(Container::from_entries(pending))
    }
}

fn push_entry(pending: &mut Vec<Entry>, entry: Entry, preserve_keys: bool) {
    if preserve_keys {
        pending.push(entry);
    } else {
        let (_, value) = entry;
        pending.push((Key::from(pending.len()), value));
    }
}
