//! Purpose: Standalone process memory usage reporting with binary-suffix formatting.
//! Exports: `UsageKind`, `usage`, `format_bytes`, `report`, `usage_json`.
//! Role: Diagnostic collaborator; no coupling to the sequence kernel in either direction.
//! Invariants: Readings are best effort and fall back to 0 when the platform offers none.
//! Invariants: Formatting thresholds are binary (1024-based) with B/KiB/MiB/GiB suffixes.

use serde_json::{json, Map, Value};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UsageKind {
    Current,
    Peak,
}

impl UsageKind {
    fn label(self) -> &'static str {
        match self {
            UsageKind::Current => "current",
            UsageKind::Peak => "peak",
        }
    }
}

/// Reads the process resident-set size in bytes, 0 when unavailable.
pub fn usage(kind: UsageKind) -> u64 {
    match kind {
        UsageKind::Peak => peak_rss_bytes(),
        UsageKind::Current => current_rss_bytes(),
    }
}

/// Renders a byte count with a binary-magnitude suffix. GiB and MiB keep
/// one decimal; KiB and B are whole numbers (KiB truncates).
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{:.1} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{} KiB", bytes / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// One-call reading: the raw decimal byte count, or the formatted form.
pub fn report(kind: UsageKind, raw: bool) -> String {
    let bytes = usage(kind);
    if raw {
        bytes.to_string()
    } else {
        format_bytes(bytes)
    }
}

pub fn usage_json(kind: UsageKind) -> Value {
    let bytes = usage(kind);
    let mut map = Map::new();
    map.insert("kind".to_string(), json!(kind.label()));
    map.insert("bytes".to_string(), json!(bytes));
    map.insert("formatted".to_string(), json!(format_bytes(bytes)));
    Value::Object(map)
}

#[cfg(unix)]
fn peak_rss_bytes() -> u64 {
    let mut rusage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    if unsafe { libc::getrusage(libc::RUSAGE_SELF, rusage.as_mut_ptr()) } != 0 {
        return 0;
    }
    let rusage = unsafe { rusage.assume_init() };
    let maxrss = rusage.ru_maxrss.max(0) as u64;
    // ru_maxrss is kilobytes on Linux, bytes on macOS.
    if cfg!(target_os = "macos") {
        maxrss
    } else {
        maxrss * KIB
    }
}

#[cfg(not(unix))]
fn peak_rss_bytes() -> u64 {
    0
}

#[cfg(target_os = "linux")]
fn current_rss_bytes() -> u64 {
    let Ok(statm) = std::fs::read_to_string("/proc/self/statm") else {
        return 0;
    };
    let resident_pages: u64 = statm
        .split_whitespace()
        .nth(1)
        .and_then(|field| field.parse().ok())
        .unwrap_or(0);
    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) }.max(0) as u64;
    resident_pages * page_size
}

#[cfg(not(target_os = "linux"))]
fn current_rss_bytes() -> u64 {
    peak_rss_bytes()
}
