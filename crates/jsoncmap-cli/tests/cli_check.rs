use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CREDENTIAL_VARS: [&str; 7] = [
    "OSSRH_USERNAME",
    "OSSRH_PASSWORD",
    "CENTRAL_PORTAL_USERNAME",
    "CENTRAL_PORTAL_PASSWORD",
    "SIGNING_KEY",
    "SIGNING_PASSWORD",
    "STAGING_PROFILE_ID",
];

/// A `check` invocation isolated from the test runner's environment.
#[allow(deprecated)]
fn check_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jsoncmap").unwrap();
    cmd.current_dir(dir.path());
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd.arg("check");
    cmd
}

#[test]
fn test_check_help_documents_env_file_default() {
    let tmp = TempDir::new().unwrap();

    check_cmd(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(".publish.env"));
}

#[test]
fn test_check_empty_env_warns_but_succeeds() {
    let tmp = TempDir::new().unwrap();

    check_cmd(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ username"))
        .stdout(predicate::str::contains("✗ password"))
        .stdout(predicate::str::contains("Credential source: none"))
        .stdout(predicate::str::contains("Missing required configuration"))
        .stdout(predicate::str::contains(
            "username (OSSRH_USERNAME or CENTRAL_PORTAL_USERNAME)",
        ));
}

#[test]
fn test_check_strict_fails_when_not_ready() {
    let tmp = TempDir::new().unwrap();

    check_cmd(&tmp)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required fields"));
}

#[test]
fn test_check_portal_credentials_from_env_file() {
    let tmp = TempDir::new().unwrap();
    let env_file = tmp.path().join("ci.env");
    fs::write(
        &env_file,
        "CENTRAL_PORTAL_USERNAME=user\nCENTRAL_PORTAL_PASSWORD=token\n",
    )
    .unwrap();

    check_cmd(&tmp)
        .args(["--env-file", env_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ username"))
        .stdout(predicate::str::contains("Credential source: CentralPortal"))
        .stdout(predicate::str::contains("Ready for automated publishing"));
}

#[test]
fn test_check_prefers_ossrh_over_portal() {
    let tmp = TempDir::new().unwrap();
    let env_file = tmp.path().join("ci.env");
    fs::write(
        &env_file,
        "OSSRH_USERNAME=legacy\nOSSRH_PASSWORD=pass\n\
         CENTRAL_PORTAL_USERNAME=user\nCENTRAL_PORTAL_PASSWORD=token\n",
    )
    .unwrap();

    check_cmd(&tmp)
        .args(["--env-file", env_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Credential source: OSSRH"));
}

#[test]
fn test_check_partial_source_falls_back() {
    let tmp = TempDir::new().unwrap();
    let env_file = tmp.path().join("ci.env");
    // OSSRH has only a username; the complete Portal pair must win.
    fs::write(
        &env_file,
        "OSSRH_USERNAME=legacy\n\
         CENTRAL_PORTAL_USERNAME=user\nCENTRAL_PORTAL_PASSWORD=token\n",
    )
    .unwrap();

    check_cmd(&tmp)
        .args(["--env-file", env_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Credential source: CentralPortal"))
        .stdout(predicate::str::contains("Ready for automated publishing"));
}

#[test]
fn test_check_require_signing_blocks_readiness() {
    let tmp = TempDir::new().unwrap();
    let env_file = tmp.path().join("ci.env");
    fs::write(
        &env_file,
        "CENTRAL_PORTAL_USERNAME=user\nCENTRAL_PORTAL_PASSWORD=token\n",
    )
    .unwrap();

    check_cmd(&tmp)
        .args(["--env-file", env_file.to_str().unwrap(), "--require-signing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ signingKey"))
        .stdout(predicate::str::contains("Missing required configuration"));
}

#[test]
fn test_check_reports_publisher_settings() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("publish.jsonc");
    fs::write(
        &settings,
        "{\n  // CI profile\n  \"connectTimeoutSecs\": 30,\n  \"stagingProfileId\": \"com.example\",\n}\n",
    )
    .unwrap();

    check_cmd(&tmp)
        .args(["--settings", settings.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Publisher settings"))
        .stdout(predicate::str::contains("connect 30s, client 180s"))
        .stdout(predicate::str::contains("60 retries, 10s apart"))
        .stdout(predicate::str::contains("stagingProfileId: com.example"));
}
