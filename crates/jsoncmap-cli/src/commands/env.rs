use std::path::Path;

use miette::Result;

use jsoncmap_publish::env::EnvSnapshot;
use jsoncmap_util::errors::JsoncmapError;
use jsoncmap_util::fs::find_ancestor_with;

pub fn exec(env_file: Option<&Path>, reveal: bool) -> Result<()> {
    let path = match env_file {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().map_err(JsoncmapError::Io)?;
            find_ancestor_with(&cwd, ".publish.env")
                .map(|dir| dir.join(".publish.env"))
                .ok_or_else(|| JsoncmapError::Config {
                    message: "Could not find .publish.env in this directory or any parent"
                        .to_string(),
                })?
        }
    };

    let env = EnvSnapshot::from_env_file(&path)?;

    if env.is_empty() {
        println!("No environment variables configured.");
        println!("  {}", path.display());
        return Ok(());
    }

    println!("{} ({} entries):", path.display(), env.len());
    for (key, value) in env.iter() {
        let display_value = if reveal { value } else { "********" };
        println!("  {} = {}", key, display_value);
    }

    Ok(())
}
