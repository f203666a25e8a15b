// Validated lazy arithmetic progressions, inclusive of the stop bound.
use tracing::debug;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::core::source::Stream;

/// Builds a lazy progression from `start` to `stop` inclusive.
///
/// The step's sign must agree with the direction from `start` to `stop`;
/// a contradiction fails with `InvalidArgument` here, before anything is
/// yielded. `start == stop` is degenerate and yields exactly `start`
/// once, whatever the step. The last element is the last value that does
/// not overshoot `stop` in the configured direction.
pub fn range(start: i64, stop: i64, step: i64) -> Result<Range, Error> {
    if start > stop && step >= 0 {
        return Err(Error::new(ErrorKind::InvalidArgument)
            .with_operation("range")
            .with_message("step must be negative when start > stop"));
    }
    if start < stop && step <= 0 {
        return Err(Error::new(ErrorKind::InvalidArgument)
            .with_operation("range")
            .with_message("step must be positive when start < stop"));
    }
    debug!(start, stop, step, "range dispatch");

    Ok(Range {
        next: start,
        stop,
        step: if start == stop { 0 } else { step },
        done: false,
    })
}

#[derive(Clone, Copy, Debug)]
pub struct Range {
    next: i64,
    stop: i64,
    // 0 marks the degenerate single-element progression.
    step: i64,
    done: bool,
}

impl Range {
    /// Adapts the progression into an index-keyed entry stream.
    pub fn into_stream(self) -> Stream {
        Stream::from_values(self.map(Value::from))
    }
}

impl Iterator for Range {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        let current = self.next;
        if self.step == 0 {
            self.done = true;
            return Some(current);
        }
        match current.checked_add(self.step) {
            Some(upcoming) => {
                let overshoots = if self.step > 0 {
                    upcoming > self.stop
                } else {
                    upcoming < self.stop
                };
                if overshoots {
                    self.done = true;
                } else {
                    self.next = upcoming;
                }
            }
            // The next tick would leave i64; the progression ends here.
            None => self.done = true,
        }
        Some(current)
    }
}
