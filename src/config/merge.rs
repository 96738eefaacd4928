//! Apply CLI overrides on top of the loaded configuration

use crate::domain::Config;
use crate::error::ConfigError;

/// Values supplied on the command line that take precedence over config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub key: Option<String>,
}

/// Resolve the API key: `--key` beats the environment, which beats the file.
///
/// The environment/file precedence is already applied by the loader, so only
/// the CLI layer is merged here. Blank keys count as missing.
pub fn resolve_api_key(config: &Config, cli: &CliOverrides) -> Result<String, ConfigError> {
    fn usable(key: Option<&str>) -> Option<&str> {
        key.map(str::trim).filter(|key| !key.is_empty())
    }

    usable(cli.key.as_deref())
        .or_else(|| usable(config.clearbit_key.as_deref()))
        .map(str::to_string)
        .ok_or(ConfigError::MissingKey)
}
