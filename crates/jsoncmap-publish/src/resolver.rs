//! Credential source fallback chains.
//!
//! Publishing credentials can arrive under several naming schemes
//! (legacy OSSRH variables, Central Portal variables, or anything a
//! caller defines). The chain is an ordered list, most preferred first,
//! and the first source with a complete username/password pair wins.

use tracing::debug;

use crate::env::EnvSnapshot;

/// A named way of supplying publishing credentials: two lookup keys into
/// an environment snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSource {
    pub name: String,
    pub username_key: String,
    pub password_key: String,
}

impl CredentialSource {
    pub fn new(
        name: impl Into<String>,
        username_key: impl Into<String>,
        password_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username_key: username_key.into(),
            password_key: password_key.into(),
        }
    }

    /// The legacy Sonatype OSSRH variables.
    pub fn ossrh() -> Self {
        Self::new("OSSRH", "OSSRH_USERNAME", "OSSRH_PASSWORD")
    }

    /// The Central Portal token variables.
    pub fn central_portal() -> Self {
        Self::new(
            "CentralPortal",
            "CENTRAL_PORTAL_USERNAME",
            "CENTRAL_PORTAL_PASSWORD",
        )
    }

    /// The standard fallback chain: OSSRH first, then Central Portal.
    pub fn default_chain() -> Vec<CredentialSource> {
        vec![Self::ossrh(), Self::central_portal()]
    }
}

/// A resolved credential pair, tagged with the source that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSet {
    pub username: String,
    pub password: String,
    pub source: String,
}

/// Pick the highest-priority complete credential source.
///
/// Sources are probed strictly in the given order and the first one with
/// both username and password non-empty wins. A partial pair in an
/// earlier source does not block fallback to a complete later one. An
/// empty value counts the same as an absent key. Returns `None` when no
/// source is complete; incompleteness is a state, not an error.
pub fn resolve(sources: &[CredentialSource], env: &EnvSnapshot) -> Option<CredentialSet> {
    for source in sources {
        let username = env.get_non_empty(&source.username_key);
        let password = env.get_non_empty(&source.password_key);
        if let (Some(username), Some(password)) = (username, password) {
            debug!(source = %source.name, "credentials resolved");
            return Some(CredentialSet {
                username: username.to_string(),
                password: password.to_string(),
                source: source.name.clone(),
            });
        }
    }
    None
}
