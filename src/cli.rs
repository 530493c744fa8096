//! CLI argument definitions.
//!
//! Svcinspect is a single-shot tool: one invocation runs the whole
//! inspect pipeline, so there are no subcommands, only flags.

use clap::Parser;
use std::path::PathBuf;

/// Default location of the inspector configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/svcinspect/config.toml";

/// Svcinspect - web service version inventory.
#[derive(Debug, Parser)]
#[command(name = "svcinspect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Dry run: print discovered versions instead of saving them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Report under this hostname instead of the system hostname
    #[arg(long, value_name = "NAME")]
    pub hostname: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_defaults_to_system_path() {
        let cli = Cli::parse_from(["svcinspect"]);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(!cli.dry_run);
        assert!(cli.hostname.is_none());
    }

    #[test]
    fn short_n_enables_dry_run() {
        let cli = Cli::parse_from(["svcinspect", "-n"]);
        assert!(cli.dry_run);
    }

    #[test]
    fn config_flag_overrides_default() {
        let cli = Cli::parse_from(["svcinspect", "-c", "/tmp/other.toml"]);
        assert_eq!(cli.config, PathBuf::from("/tmp/other.toml"));
    }

    #[test]
    fn hostname_flag_is_optional_override() {
        let cli = Cli::parse_from(["svcinspect", "--hostname", "web01"]);
        assert_eq!(cli.hostname.as_deref(), Some("web01"));
    }
}
