//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Consolidates the global flags from the CLI into a single unit, so handler
/// signatures stay stable when new global options are added.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format if set on the command line or via env; the config
    /// preference fills the gap later in `CommandContext`
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.graphctl/config.yaml)
    pub config: Option<String>,

    /// Custom API host for development/testing
    pub api_host: Option<String>,

    /// Verbose output (progress lines and a DONE marker on stderr)
    pub verbose: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    ///
    /// This is the primary constructor, called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
            verbose: cli.verbose,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
