use jsoncmap_publish::settings::{PublishSettings, CENTRAL_PORTAL_URL};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn load_settings_from_jsonc_with_comments_and_trailing_commas() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(
        tmp,
        r#"{{
    // shorter timeouts for CI
    "connectTimeoutSecs": 30,
    "clientTimeoutSecs": 45,
    "transitionCheck": {{
        "maxRetries": 5,
        "delayBetweenSecs": 2, /* keep CI fast */
    }},
    "stagingProfileId": "com.example",
}}"#
    )
    .unwrap();
    tmp.flush().unwrap();

    let settings = PublishSettings::load(tmp.path()).unwrap();
    assert_eq!(settings.connect_timeout(), Duration::from_secs(30));
    assert_eq!(settings.client_timeout(), Duration::from_secs(45));
    assert_eq!(settings.transition_check.max_retries, 5);
    assert_eq!(
        settings.transition_check.delay_between(),
        Duration::from_secs(2)
    );
    assert_eq!(settings.staging_profile_id.as_deref(), Some("com.example"));
    // Unset endpoints fall back to the Central Portal defaults.
    assert_eq!(settings.nexus_url, CENTRAL_PORTAL_URL);
}

#[test]
fn empty_settings_file_uses_all_defaults() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{{}}").unwrap();
    tmp.flush().unwrap();

    let settings = PublishSettings::load(tmp.path()).unwrap();
    assert_eq!(settings, PublishSettings::central_portal());
}

#[test]
fn missing_settings_file_is_an_error() {
    let err = PublishSettings::load(std::path::Path::new("/nonexistent/publish.jsonc"));
    assert!(err.is_err());
}
