use std::path::{Path, PathBuf};

use console::style;
use miette::Result;
use tracing::debug;

use jsoncmap_publish::env::EnvSnapshot;
use jsoncmap_publish::report::{check_readiness, FieldCheck};
use jsoncmap_publish::resolver::CredentialSource;
use jsoncmap_publish::settings::PublishSettings;
use jsoncmap_util::errors::JsoncmapError;
use jsoncmap_util::fs::find_ancestor_with;

pub fn exec(
    env_file: Option<&Path>,
    settings: Option<&Path>,
    require_signing: bool,
    strict: bool,
) -> Result<()> {
    let process = EnvSnapshot::from_process();
    let file_env = match env_file.map(Path::to_path_buf).or_else(default_env_file) {
        Some(path) => {
            debug!(path = %path.display(), "loading secrets file");
            EnvSnapshot::from_env_file(&path)?
        }
        None => EnvSnapshot::new(),
    };
    // Secrets files win over inherited process variables.
    let env = process.merged(&file_env);

    let signing = |name: &str, key: &str| {
        if require_signing {
            FieldCheck::required(name, [key])
        } else {
            FieldCheck::optional(name, [key])
        }
    };
    let checks = vec![
        FieldCheck::required("username", ["OSSRH_USERNAME", "CENTRAL_PORTAL_USERNAME"]),
        FieldCheck::required("password", ["OSSRH_PASSWORD", "CENTRAL_PORTAL_PASSWORD"]),
        signing("signingKey", "SIGNING_KEY"),
        signing("signingPassword", "SIGNING_PASSWORD"),
        FieldCheck::optional("stagingProfileId", ["STAGING_PROFILE_ID"]),
    ];

    let readiness = check_readiness(&CredentialSource::default_chain(), &checks, &env);
    let report = &readiness.report;

    println!("=== Maven Central publishing configuration ===");
    for field in &report.fields {
        let mark = if field.present {
            style("✓").green()
        } else if field.required {
            style("✗").red()
        } else {
            style("-").dim()
        };
        let suffix = if field.required { "" } else { " (optional)" };
        println!("  {} {}{}", mark, field.name, suffix);
    }
    match &report.active_source {
        Some(source) => println!("Credential source: {source}"),
        None => println!("Credential source: none"),
    }

    if let Some(path) = settings {
        let settings = PublishSettings::load(path)?;
        println!();
        println!("Publisher settings ({}):", path.display());
        println!("  nexusUrl: {}", settings.nexus_url);
        println!(
            "  timeouts: connect {}s, client {}s",
            settings.connect_timeout_secs, settings.client_timeout_secs
        );
        println!(
            "  transition checks: {} retries, {}s apart",
            settings.transition_check.max_retries, settings.transition_check.delay_between_secs
        );
        if let Some(id) = &settings.staging_profile_id {
            println!("  stagingProfileId: {id}");
        }
    }

    println!();
    if report.ready {
        println!("{} Ready for automated publishing", style("✓").green());
        return Ok(());
    }

    println!("{} Missing required configuration:", style("⚠").yellow());
    let missing = report.missing();
    for check in checks.iter().filter(|c| missing.contains(&c.name.as_str())) {
        println!("  • {} ({})", check.name, check.keys.join(" or "));
    }
    if strict {
        return Err(JsoncmapError::Config {
            message: format!("missing required fields: {}", missing.join(", ")),
        }
        .into());
    }
    Ok(())
}

fn default_env_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_ancestor_with(&cwd, ".publish.env").map(|dir| dir.join(".publish.env"))
}
