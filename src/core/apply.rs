// Side-effecting traversal; effects run eagerly for containers, on pull for streams.
use tracing::debug;

use serde_json::Value;

use crate::core::source::{Source, Stream};

pub enum Applied {
    Done,
    Lazy(ApplyStream),
}

impl Applied {
    pub fn is_lazy(&self) -> bool {
        matches!(self, Applied::Lazy(_))
    }
}

/// Invokes `effect` on every value, discarding results.
///
/// Container inputs run the effect once per element, in container order,
/// before this function returns. Stream inputs defer entirely: the
/// returned `ApplyStream` invokes the effect once per entry as it is
/// pulled, and nothing runs if it is never driven.
pub fn apply<F>(input: Source, mut effect: F) -> Applied
where
    F: FnMut(&Value) + 'static,
{
    debug!(shape = ?input.shape(), "apply dispatch");
    match input {
        Source::Container(container) => {
            for (_, value) in &container {
                effect(value);
            }
            Applied::Done
        }
        Source::Stream(stream) => Applied::Lazy(ApplyStream {
            source: stream,
            effect: Box::new(effect),
        }),
    }
}

/// Driver for the deferred side effects of `apply` on a stream input.
///
/// Each pull consumes one entry from the source and runs the effect on
/// its value; the yielded unit is only a progress tick.
pub struct ApplyStream {
    source: Stream,
    effect: Box<dyn FnMut(&Value)>,
}

impl std::fmt::Debug for ApplyStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplyStream").finish_non_exhaustive()
    }
}

impl ApplyStream {
    /// Drives the remaining entries to completion and reports how many
    /// effects ran. Runs forever on an unbounded source.
    pub fn drain(self) -> usize {
        self.count()
    }
}

impl Iterator for ApplyStream {
    type Item = ();

    fn next(&mut self) -> Option<()> {
        let (_, value) = self.source.next()?;
        (self.effect)(&value);
        Some(())
    }
}
