//! Load and save `ObserverConfig` as a JSON file

use std::path::Path;

use tremr_core::{ConfigError, ObserverConfig};

use crate::io::atomic_write;

/// Load the config file, writing defaults first when it does not exist.
///
/// Unparseable or invalid content is an error: the monitor must not start
/// against a config it cannot trust.
pub fn load_or_create_config(path: &Path) -> Result<ObserverConfig, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let config = ObserverConfig::default();
            save_config(path, &config)?;
            tracing::info!(path = %path.display(), "created default config file");
            return Ok(config);
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ObserverConfig::from_json_str(&contents)
}

/// Validate and write the config file
pub fn save_config(path: &Path, config: &ObserverConfig) -> Result<(), ConfigError> {
    config.validate()?;
    let json = serde_json::to_string_pretty(config)?;
    atomic_write(path, json.as_bytes()).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
