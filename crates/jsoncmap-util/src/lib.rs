//! Shared utilities for the jsoncmap workspace.
//!
//! This crate provides the cross-cutting concerns used by the other
//! jsoncmap crates: the unified error type and small filesystem helpers.

pub mod errors;
pub mod fs;
