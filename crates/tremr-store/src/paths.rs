//! Path resolution for monitor state files

use std::path::PathBuf;

/// Environment variable that overrides the data directory
pub const HOME_ENV: &str = "TREMR_HOME";

/// Resolves standard paths for monitor files
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve the data directory from `TREMR_HOME`, falling back to `~/.tremr`
    pub fn new() -> std::io::Result<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self {
                data_dir: PathBuf::from(dir),
            });
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self {
            data_dir: home.join(".tremr"),
        })
    }

    /// Use an explicit data directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get config.json path
    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    /// Get seen_earthquakes.json path
    pub fn seen_file(&self) -> PathBuf {
        self.data_dir.join("seen_earthquakes.json")
    }

    /// Get the single-instance lock path
    pub fn lock_file(&self) -> PathBuf {
        self.data_dir.join("tremr.lock")
    }
}
