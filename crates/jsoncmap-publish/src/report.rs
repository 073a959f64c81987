//! Configuration validation reports.
//!
//! A report is structured data only; rendering it (with checkmarks,
//! colours, warnings) is the caller's concern. Which fields are required
//! is also the caller's call: signing keys and staging profiles are
//! mandatory in some publishing setups and irrelevant in others, so the
//! core assumes no fixed policy.

use crate::env::EnvSnapshot;
use crate::resolver::{self, CredentialSet, CredentialSource};

/// Whether a missing field blocks readiness or is merely reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

/// A named configuration field and the snapshot keys that can supply it.
///
/// The field is present when any of its keys has a non-empty value;
/// multiple keys model fields that can arrive under more than one naming
/// scheme (e.g. a username from either OSSRH or the Central Portal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub name: String,
    pub keys: Vec<String>,
    pub requirement: Requirement,
}

impl FieldCheck {
    pub fn required<I, K>(name: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            name: name.into(),
            keys: keys.into_iter().map(Into::into).collect(),
            requirement: Requirement::Required,
        }
    }

    pub fn optional<I, K>(name: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            name: name.into(),
            keys: keys.into_iter().map(Into::into).collect(),
            requirement: Requirement::Optional,
        }
    }

    fn present_in(&self, env: &EnvSnapshot) -> bool {
        self.keys.iter().any(|k| env.get_non_empty(k).is_some())
    }
}

/// Presence of a single field, in the caller's declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStatus {
    pub name: String,
    pub present: bool,
    pub required: bool,
}

/// Structured summary of a validation pass over one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// One status per checked field, in the order the checks were given.
    pub fields: Vec<FieldStatus>,
    /// Name of the credential source that resolved, if any.
    pub active_source: Option<String>,
    /// True iff every required field is present.
    pub ready: bool,
}

impl ValidationReport {
    /// Names of required fields that are absent.
    pub fn missing(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.required && !f.present)
            .map(|f| f.name.as_str())
            .collect()
    }
}

/// Evaluate each field check independently against the snapshot.
///
/// The report's field order matches the order of `checks`, so output is
/// reproducible. This never fails: missing configuration is reported,
/// not raised.
pub fn validate(checks: &[FieldCheck], env: &EnvSnapshot) -> ValidationReport {
    let fields: Vec<FieldStatus> = checks
        .iter()
        .map(|check| FieldStatus {
            name: check.name.clone(),
            present: check.present_in(env),
            required: check.requirement == Requirement::Required,
        })
        .collect();
    let ready = fields.iter().all(|f| f.present || !f.required);
    ValidationReport {
        fields,
        active_source: None,
        ready,
    }
}

/// Combined outcome of credential resolution and field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readiness {
    pub credentials: Option<CredentialSet>,
    pub report: ValidationReport,
}

/// Resolve credentials and validate fields against one snapshot.
///
/// The resolved source's name is recorded in the report so a renderer
/// can say where the active credentials came from.
pub fn check_readiness(
    sources: &[CredentialSource],
    checks: &[FieldCheck],
    env: &EnvSnapshot,
) -> Readiness {
    let credentials = resolver::resolve(sources, env);
    let mut report = validate(checks, env);
    report.active_source = credentials.as_ref().map(|c| c.source.clone());
    Readiness {
        credentials,
        report,
    }
}
