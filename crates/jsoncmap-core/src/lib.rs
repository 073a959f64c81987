//! JSONC (JSON with Comments) processing.
//!
//! This crate turns JSONC and JSON5-flavoured text into strict JSON and
//! maps it onto Rust types via `serde_json`. Every preprocessing pass is a
//! single string-aware linear scan: comment delimiters, quotes and commas
//! inside JSON strings are always treated as string content, and no pass
//! uses backtracking or regular expressions.
//!
//! This crate is intentionally free of I/O beyond reading the input
//! handed to [`mapper::JsoncMapper`].

pub mod json5;
pub mod mapper;
pub mod strip;
