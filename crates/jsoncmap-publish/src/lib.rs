//! Maven Central publishing readiness.
//!
//! This crate decides whether a project is configured to publish: which
//! credential source (OSSRH, Central Portal, or a caller-defined one) is
//! active, which configuration fields are missing, and what parameters
//! the downstream publisher should run with. It performs no network I/O
//! and no signing; the actual upload, staging transitions and GPG work
//! belong to an external publisher that consumes these values.
//!
//! Everything here is computed from an explicit [`env::EnvSnapshot`]
//! rather than ambient process state, so resolution is a pure function of
//! its inputs: same snapshot in, same answer out.

pub mod env;
pub mod report;
pub mod resolver;
pub mod settings;
