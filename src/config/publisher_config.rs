use crate::cli::Cli;
use crate::config::sheets_config::{ConfigError, SpreadsheetConfig};

/// Everything the publisher needs for one run, assembled from the command
/// line and passed down explicitly.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    pub sheets: SpreadsheetConfig,
}

impl PublisherConfig {
    pub fn load(cli: &Cli) -> error_stack::Result<Self, ConfigError> {
        let sheets = SpreadsheetConfig::load(&cli.client_email, &cli.private_key_path)?;
        Ok(PublisherConfig { sheets })
    }
}
