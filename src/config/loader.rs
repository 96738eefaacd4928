//! Config file discovery and loading

use crate::domain::Config;
use crate::error::ConfigError;
use figment::providers::{Env, Format, Json, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

/// Config keys also read from the environment, matched case-insensitively.
const ENV_KEYS: [&str; 2] = ["clearbit_key", "clearbit_endpoint"];

const CONFIG_STEM: &str = "config";
const CONFIG_EXTENSIONS: [&str; 4] = ["yaml", "yml", "toml", "json"];

/// Directories searched for a config file when `--config` is not given,
/// in priority order: `$HOME/.stalk`, then the working directory.
pub fn default_search_dirs() -> Vec<PathBuf> {
    let mut search = Vec::with_capacity(2);
    if let Some(home) = dirs::home_dir() {
        search.push(home.join(".stalk"));
    }
    search.push(PathBuf::from("."));
    search
}

/// Load configuration from a config file overlaid with environment variables.
///
/// An explicit path must exist. Without one, the first `config.<ext>` found in
/// `search_dirs` is used. Failing to find any file is only fatal when the
/// environment does not supply the API key either.
pub fn load_config(
    config_path: Option<&Path>,
    search_dirs: &[PathBuf],
) -> Result<Config, ConfigError> {
    let discovered = match config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            Some(path.to_path_buf())
        }
        None => discover_config(search_dirs),
    };

    let mut figment = Figment::new();
    if let Some(ref file) = discovered {
        tracing::debug!("Reading config from {}", file.display());
        figment = merge_file(figment, file)?;
    }
    figment = figment.merge(Env::raw().only(&ENV_KEYS));

    let mut config: Config = figment.extract().map_err(Box::new)?;

    if discovered.is_none() && config.clearbit_key.is_none() {
        let searched =
            search_dirs.iter().map(|d| d.display().to_string()).collect::<Vec<_>>().join(", ");
        return Err(ConfigError::NotFound { searched });
    }

    config.source = discovered;
    Ok(config)
}

fn merge_file(figment: Figment, file: &Path) -> Result<Figment, ConfigError> {
    let ext = file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let figment = match ext.as_str() {
        "yaml" | "yml" => figment.merge(Yaml::file(file)),
        "toml" => figment.merge(Toml::file(file)),
        "json" => figment.merge(Json::file(file)),
        other => {
            return Err(ConfigError::UnsupportedFormat {
                path: file.to_path_buf(),
                ext: other.to_string(),
            })
        }
    };
    Ok(figment)
}

fn discover_config(search_dirs: &[PathBuf]) -> Option<PathBuf> {
    for dir in search_dirs {
        for ext in CONFIG_EXTENSIONS {
            let path = dir.join(format!("{CONFIG_STEM}.{ext}"));
            if path.is_file() {
                return Some(path);
            }
        }
    }

    None
}
