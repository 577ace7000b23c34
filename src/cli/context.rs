//! Command execution context
//!
//! Unified context for command execution: config loading, auth validation,
//! and client construction in one place instead of in every handler.

use std::sync::Arc;

use crate::cli::args::GlobalOptions;
use crate::cli::OutputFormat;
use crate::client::GraphClient;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Context for command execution containing config, client, and runtime options
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// API client (Arc-wrapped so fetch closures can own a handle)
    pub client: Arc<GraphClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads config from the override path (or the default location),
    /// validates that an access token is present, and builds the client.
    /// The `--api-host` flag wins over a host configured in the file; the
    /// output format resolves flag > env > config preference > table.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        config.validate_auth()?;

        let token = config
            .access_token
            .clone()
            .ok_or(ConfigError::MissingToken)?;
        let api_host = opts
            .api_host_ref()
            .map(String::from)
            .or_else(|| config.api_host.clone());

        let client = Arc::new(GraphClient::with_host(token, api_host)?);

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::parse_config)
            })
            .unwrap_or_default();

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Page-size hint for list requests
    pub fn page_size(&self) -> usize {
        self.config.preferences.page_size
    }
}
