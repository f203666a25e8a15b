//! Purpose: Provide the internal JSON decode entrypoints for source constructors.
//! Exports: `from_str`, `values_from_lines`.
//! Role: Parser boundary that centralizes simd-json usage details.
//! Invariants: Input buffers are copied once to satisfy simd-json mutable-slice API.
//! Invariants: Blank lines in line-delimited input are skipped, not errors.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, simd_json::Error> {
    let mut bytes = input.as_bytes().to_vec();
    simd_json::serde::from_slice(&mut bytes)
}

/// Decodes line-delimited JSON into one value per non-blank line.
pub(crate) fn values_from_lines(input: &str) -> Result<Vec<Value>, simd_json::Error> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(from_str)
        .collect()
}
