use std::{fs::OpenOptions, sync::Mutex};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

/// Installs a file subscriber when `log_file` is configured.
///
/// The terminal is owned by the UI, so without a log file nothing is recorded.
pub fn init(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter_directives(&config.log_level))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))?;

    tracing::info!(path, "logging initialised");
    Ok(())
}

fn filter_directives(level: &str) -> String {
    format!("limoneta_tui={level},engine={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_both_crates() {
        assert_eq!(filter_directives("debug"), "limoneta_tui=debug,engine=debug");
    }

    #[test]
    fn no_log_file_is_a_no_op() {
        let config = AppConfig::default();
        assert!(config.log_file.is_none());
        assert!(init(&config).is_ok());
    }
}
