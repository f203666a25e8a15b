//! Purpose: Define the stable public Rust API boundary for Lazurite.
//! Exports: Source shapes, the six sequence operations, and their result types.
//! Role: Public, additive-only surface; one import path for downstream callers.
//! Invariants: This module is the only path bindings and callers need.
//! Invariants: Re-exports stay aligned with `core`; nothing is renamed in flight.

pub use crate::core::apply::{apply, Applied, ApplyStream};
pub use crate::core::chunk::{chunk, ChunkOptions, ChunkStream, Chunked, ChunkedIter};
pub use crate::core::duplicates::{duplicates, DuplicateOptions, Duplicates};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::flatten::{flatten, FlattenStream, Flattened};
pub use crate::core::key::Key;
pub use crate::core::map::{map, Mapped};
pub use crate::core::range::{range, Range};
pub use crate::core::source::{Container, Entry, Shape, Source, Stream};
