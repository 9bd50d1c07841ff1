use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/limoneta.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefilled on the login screen.
    pub username: String,
    pub auth: AuthConfig,
    pub log_level: String,
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            auth: AuthConfig::default(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// The single username/password pair the login screen accepts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: "joeyang".to_string(),
            password: "1234".to_string(),
        }
    }
}

#[derive(Debug, Default, Parser)]
#[command(name = "limoneta_tui", disable_version_flag = true)]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long, env = "LIMONETA_CONFIG")]
    config: Option<String>,
    /// Prefill the login username (the password is never read from CLI).
    #[arg(long)]
    username: Option<String>,
    /// Log level for the file subscriber (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    resolve(Args::parse())
}

fn resolve(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(
        config::Environment::with_prefix("LIMONETA")
            .prefix_separator("_")
            .separator("__"),
    );
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(username) = args.username {
        settings.username = username;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn args_with_file(path: &std::path::Path) -> Args {
        Args {
            config: Some(path.display().to_string()),
            ..Args::default()
        }
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = resolve(Args {
            config: Some("does/not/exist.toml".to_string()),
            ..Args::default()
        })
        .unwrap();
        assert_eq!(settings.auth.username, "joeyang");
        assert_eq!(settings.auth.password, "1234");
        assert_eq!(settings.log_level, "info");
        assert!(settings.log_file.is_none());
    }

    #[test]
    fn file_values_and_cli_overrides() {
        let path = std::env::temp_dir().join("limoneta_config_test.toml");
        fs::write(
            &path,
            "username = \"ana\"\nlog_level = \"debug\"\n\n[auth]\nusername = \"ana\"\npassword = \"s3cret\"\n",
        )
        .unwrap();

        let settings = resolve(args_with_file(&path)).unwrap();
        assert_eq!(settings.username, "ana");
        assert_eq!(settings.auth.password, "s3cret");
        assert_eq!(settings.log_level, "debug");

        let settings = resolve(Args {
            username: Some("bea".to_string()),
            log_file: Some("tui.log".to_string()),
            ..args_with_file(&path)
        })
        .unwrap();
        assert_eq!(settings.username, "bea");
        assert_eq!(settings.auth.username, "ana");
        assert_eq!(settings.log_file.as_deref(), Some("tui.log"));

        fs::remove_file(path).unwrap();
    }
}
