//! File logging.
//!
//! The terminal is owned by the animation, so events are written to
//! `glyphrain.log` in the platform data directory.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{WrapErr, eyre};
use tracing_subscriber::EnvFilter;

/// Name of the log file inside the data directory.
pub const LOG_FILE: &str = "glyphrain.log";

/// Build the event filter: `RUST_LOG` when set, otherwise `default_directives`.
pub fn filter(default_directives: &str) -> color_eyre::Result<EnvFilter> {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok(), default_directives)
}

/// Pick between the environment's directives and the configured ones.
fn filter_from(
    env_directives: Option<String>,
    default_directives: &str,
) -> color_eyre::Result<EnvFilter> {
    match env_directives {
        Some(directives) if !directives.is_empty() => parse_filter(&directives),
        _ => parse_filter(default_directives),
    }
}

fn parse_filter(directives: &str) -> color_eyre::Result<EnvFilter> {
    EnvFilter::try_new(directives).wrap_err_with(|| format!("invalid log filter {directives:?}"))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the log file path, or `None` when the platform has no data
/// directory and logging stays disabled.
pub fn init(default_directives: &str) -> color_eyre::Result<Option<PathBuf>> {
    let filter = filter(default_directives)?;
    let Some(dir) = glyphrain_config::data_dir() else {
        return Ok(None);
    };

    fs::create_dir_all(&dir)
        .wrap_err_with(|| format!("failed to create log directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| eyre!("failed to install logger: {err}"))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_parse_filter() {
        assert!(parse_filter("info").is_ok());
        assert!(parse_filter("glyphrain_rain=trace,warn").is_ok());
        assert!(parse_filter("glyphrain=notalevel").is_err());
    }

    #[test]
    fn test_env_directives_override_config_level() {
        let filter = filter_from(Some("debug".to_string()), "warn").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_unset_or_empty_env_uses_config_level() {
        let filter = filter_from(None, "warn").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let filter = filter_from(Some(String::new()), "warn").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_invalid_env_directives_are_reported() {
        assert!(filter_from(Some("glyphrain=notalevel".to_string()), "info").is_err());
    }
}
