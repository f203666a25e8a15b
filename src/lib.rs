//! Purpose: Dual-mode sequence operations over JSON values.
//! Exports: `api` (stable surface), `core` (sources, operations, errors), `meminfo`.
//! Role: Library crate; every operation accepts a realized container or a
//! single-pass stream and answers in kind, eager for containers and lazy
//! for streams.
//! Invariants: Lazy results do no work until driven and buffer at most one
//! chunk or one frame per nesting level.
//! Invariants: Precondition failures surface at the call boundary, never
//! inside lazy consumption.
pub mod api;
pub mod core;
pub(crate) mod json;
pub mod meminfo;
