//! Configuration for glyphrain.
//!
//! Settings are read from `config.toml` in the platform config directory, or
//! from an explicit path. A missing default file means built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{WrapErr, bail};
use directories::ProjectDirs;
use glyphrain_core::{DEFAULT_FADE_ALPHA, DEFAULT_RECYCLE_THRESHOLD, DEFAULT_TICK, RainSettings};
use serde::{Deserialize, Serialize};

/// Name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Text shown on the banner unless configured otherwise.
pub const DEFAULT_BANNER_TEXT: &str = "WAKE UP, NEO";

/// User configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Text drawn on the banner.
    pub banner_text: String,
    /// Whether the banner is drawn at startup.
    pub show_banner: bool,
    /// Milliseconds between render steps.
    pub tick_ms: u64,
    /// Opacity of the trail overlay.
    pub fade_alpha: f32,
    /// Draw a drop past the bottom must exceed to restart it.
    pub recycle_threshold: f64,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner_text: DEFAULT_BANNER_TEXT.to_string(),
            show_banner: true,
            tick_ms: DEFAULT_TICK.as_millis() as u64,
            fade_alpha: DEFAULT_FADE_ALPHA,
            recycle_threshold: DEFAULT_RECYCLE_THRESHOLD,
            log_level: "info".to_string(),
        }
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and defaults are used if nothing is there.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<(Self, ConfigSource)> {
        if let Some(path) = path {
            let config = Self::from_file(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                let config = Self::from_file(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            _ => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> color_eyre::Result<Self> {
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))
    }

    /// Parse and validate TOML.
    pub fn from_toml(contents: &str) -> color_eyre::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> color_eyre::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> color_eyre::Result<()> {
        if self.tick_ms == 0 {
            bail!("tick_ms must be greater than 0");
        }
        if !(self.fade_alpha > 0.0 && self.fade_alpha <= 1.0) {
            bail!("fade_alpha must be in (0, 1], got {}", self.fade_alpha);
        }
        if !(0.0..=1.0).contains(&self.recycle_threshold) {
            bail!(
                "recycle_threshold must be in [0, 1], got {}",
                self.recycle_threshold
            );
        }
        Ok(())
    }

    /// Rain renderer settings described by this config.
    pub fn rain_settings(&self) -> RainSettings {
        RainSettings {
            tick: Duration::from_millis(self.tick_ms),
            fade_alpha: self.fade_alpha,
            recycle_threshold: self.recycle_threshold,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "glyphrain")
}

/// Default location of the config file.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Directory for log files.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_rain_defaults() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rain_settings(), RainSettings::default());
        assert_eq!(config.banner_text, DEFAULT_BANNER_TEXT);
        assert!(config.show_banner);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("banner_text = \"FOLLOW THE WHITE RABBIT\"\ntick_ms = 50\n")
            .unwrap();
        assert_eq!(config.banner_text, "FOLLOW THE WHITE RABBIT");
        assert_eq!(config.rain_settings().tick, Duration::from_millis(50));
        assert_eq!(config.fade_alpha, DEFAULT_FADE_ALPHA);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_toml("colour = \"green\"\n").is_err());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(Config::from_toml("tick_ms = 0\n").is_err());
        assert!(Config::from_toml("fade_alpha = 0.0\n").is_err());
        assert!(Config::from_toml("fade_alpha = 1.5\n").is_err());
        assert!(Config::from_toml("recycle_threshold = -0.1\n").is_err());
        assert!(Config::from_toml("recycle_threshold = 1.0\n").is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            banner_text: "HELLO".to_string(),
            show_banner: false,
            ..Default::default()
        };
        let parsed = Config::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "show_banner = false\n").unwrap();

        let (config, source) = Config::load(Some(&path)).unwrap();

        assert!(!config.show_banner);
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn test_load_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "tick_ms = \"fast\"\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("invalid config file"));
    }
}
