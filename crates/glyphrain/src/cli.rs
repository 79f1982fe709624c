//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use glyphrain_config::Config;

/// Matrix-style digital rain for the terminal.
#[derive(Debug, Parser)]
#[command(name = "glyphrain", version, about)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Text shown on the banner
    #[arg(short, long, value_name = "TEXT")]
    pub banner: Option<String>,

    /// Start with the banner hidden
    #[arg(long, conflicts_with = "banner")]
    pub no_banner: bool,

    /// Milliseconds between animation steps
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: Option<u64>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Apply command line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(text) = &self.banner {
            config.banner_text = text.clone();
            config.show_banner = true;
        }
        if self.no_banner {
            config.show_banner = false;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_keeps_config() {
        let cli = Cli::try_parse_from(["glyphrain"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let args = ["glyphrain", "--banner", "THERE IS NO SPOON", "--tick-ms", "50"];
        let cli = Cli::try_parse_from(args).unwrap();
        let mut config = Config {
            show_banner: false,
            ..Default::default()
        };
        cli.apply(&mut config);
        assert_eq!(config.banner_text, "THERE IS NO SPOON");
        assert!(config.show_banner);
        assert_eq!(config.tick_ms, 50);
    }

    #[test]
    fn test_no_banner() {
        let cli = Cli::try_parse_from(["glyphrain", "--no-banner"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(!config.show_banner);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(Cli::try_parse_from(["glyphrain", "--tick-ms", "0"]).is_err());
        assert!(Cli::try_parse_from(["glyphrain", "--banner", "X", "--no-banner"]).is_err());
    }
}
