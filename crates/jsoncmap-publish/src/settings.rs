//! Publisher parameters.
//!
//! These are the values a downstream Maven Central publisher runs with:
//! endpoint URLs, connection timeouts, and how long to keep polling a
//! staging repository transition. This crate only carries them as data;
//! the upload and the polling themselves happen elsewhere.
//!
//! Settings load from a `publish.jsonc` file through this workspace's
//! own mapper, with trailing commas and JSON5 conveniences accepted.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use jsoncmap_core::mapper::JsoncMapper;
use jsoncmap_util::errors::JsoncmapResult;

/// Central Portal publisher API base URL.
pub const CENTRAL_PORTAL_URL: &str = "https://central.sonatype.com/api/v1/publisher/";

/// Legacy OSSRH Nexus service URL.
pub const OSSRH_NEXUS_URL: &str = "https://s01.oss.sonatype.org/service/local/";

/// Legacy OSSRH snapshot repository URL.
pub const OSSRH_SNAPSHOT_URL: &str = "https://s01.oss.sonatype.org/content/repositories/snapshots/";

/// How the publisher polls a staging repository state transition.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TransitionCheck {
    pub max_retries: u32,
    pub delay_between_secs: u64,
}

impl Default for TransitionCheck {
    fn default() -> Self {
        Self {
            max_retries: 60,
            delay_between_secs: 10,
        }
    }
}

impl TransitionCheck {
    pub fn delay_between(&self) -> Duration {
        Duration::from_secs(self.delay_between_secs)
    }
}

/// Parameters handed to the downstream publisher.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PublishSettings {
    pub nexus_url: String,
    pub snapshot_repository_url: String,
    pub connect_timeout_secs: u64,
    pub client_timeout_secs: u64,
    pub transition_check: TransitionCheck,
    pub staging_profile_id: Option<String>,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self::central_portal()
    }
}

impl PublishSettings {
    /// Central Portal endpoints with the standard timeouts.
    pub fn central_portal() -> Self {
        Self {
            nexus_url: CENTRAL_PORTAL_URL.to_string(),
            snapshot_repository_url: CENTRAL_PORTAL_URL.to_string(),
            connect_timeout_secs: 180,
            client_timeout_secs: 180,
            transition_check: TransitionCheck::default(),
            staging_profile_id: None,
        }
    }

    /// Legacy OSSRH endpoints with the standard timeouts.
    pub fn ossrh() -> Self {
        Self {
            nexus_url: OSSRH_NEXUS_URL.to_string(),
            snapshot_repository_url: OSSRH_SNAPSHOT_URL.to_string(),
            ..Self::central_portal()
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn client_timeout(&self) -> Duration {
        Duration::from_secs(self.client_timeout_secs)
    }

    /// Load settings from a `publish.jsonc` file.
    ///
    /// Absent fields fall back to the Central Portal defaults.
    pub fn load(path: &Path) -> JsoncmapResult<Self> {
        let mapper = JsoncMapper::builder().json5(true).build();
        mapper.from_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_portal_profile() {
        let settings = PublishSettings::default();
        assert_eq!(settings.nexus_url, CENTRAL_PORTAL_URL);
        assert_eq!(settings.connect_timeout(), Duration::from_secs(180));
        assert_eq!(settings.transition_check.max_retries, 60);
        assert_eq!(
            settings.transition_check.delay_between(),
            Duration::from_secs(10)
        );
        assert_eq!(settings.staging_profile_id, None);
    }

    #[test]
    fn ossrh_profile_swaps_endpoints_only() {
        let settings = PublishSettings::ossrh();
        assert_eq!(settings.nexus_url, OSSRH_NEXUS_URL);
        assert_eq!(settings.snapshot_repository_url, OSSRH_SNAPSHOT_URL);
        assert_eq!(settings.client_timeout(), Duration::from_secs(180));
    }
}
