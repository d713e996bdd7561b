use anyhow::{Context, Result};
use colored::*;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::env;

pub const CONFIG_FILE: &str = "mish.toml";
pub const ENV_SELECTOR: &str = "MISH_ENV";

#[derive(Debug, Default, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub env: HashMap<String, String>,
}

/// Loads the shell config and layers `.env` on top of its `[env]` table.
///
/// `explicit` must exist; the default `mish.toml` in `dir` is optional.
pub fn load_config(dir: &Path, explicit: Option<&Path>, dotenv: bool) -> Result<ShellConfig> {
    let (config_path, required): (PathBuf, bool) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => (dir.join(CONFIG_FILE), false),
    };

    // 1. Parse mish.toml (Base Layer)
    let mut config = if config_path.exists() || required {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        info!("loaded config from {}", config_path.display());
        parse_config(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?
    } else {
        ShellConfig::default()
    };

    if !dotenv {
        return Ok(config);
    }

    // 2. Load .env using dotenvy (Override Layer)
    // Determines filename: .env or .env.prod based on MISH_ENV
    let env_filename = env::var(ENV_SELECTOR)
        .map(|v| format!(".env.{}", v))
        .unwrap_or_else(|_| ".env".to_string());

    let env_path = dir.join(&env_filename);

    if env_path.exists() {
        eprintln!("{} Loading environment from: {}", "🌿".green(), env_filename.bold());

        // Read into the config map only; the real process environment is left untouched.
        for item in dotenvy::from_path_iter(&env_path)
            .with_context(|| format!("Failed to open {}", env_filename))?
        {
            let (key, val) = item.with_context(|| format!("Failed to parse {}", env_filename))?;
            config.env.insert(key, val);
        }
    }

    Ok(config)
}

pub fn parse_config(content: &str) -> Result<ShellConfig> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_default_config_is_empty() {
        let dir = tempdir().unwrap();
        let config = load_config(dir.path(), None, false).unwrap();
        assert!(config.env.is_empty());
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(dir.path(), Some(missing.as_path()), false).is_err());
    }

    #[test]
    fn test_env_table_and_dotenv_override() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[env]\nGREETING = \"hello\"\nEDITOR = \"vi\"\n",
        )
        .unwrap();
        fs::write(dir.path().join(".env"), "EDITOR=nano\n").unwrap();

        let config = load_config(dir.path(), None, true).unwrap();
        assert_eq!(config.env.get("GREETING").unwrap(), "hello");
        assert_eq!(config.env.get("EDITOR").unwrap(), "nano");

        let config = load_config(dir.path(), None, false).unwrap();
        assert_eq!(config.env.get("EDITOR").unwrap(), "vi");
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(parse_config("[env\n").is_err());
        assert!(parse_config("env = 3").is_err());
    }
}
