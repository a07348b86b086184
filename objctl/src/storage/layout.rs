//! Configuration file location

use std::path::PathBuf;

use crate::filesys::file::File;

/// Environment variable overriding the configuration file path
pub const CONFIG_ENV: &str = "OBJCTL_CONFIG";

/// Storage layout for objctl
#[derive(Debug, Clone)]
pub struct StorageLayout {
    /// Base directory for all storage
    pub base_dir: PathBuf,
}

impl StorageLayout {
    /// Create a new storage layout
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the config file path
    pub fn config_file(&self) -> File {
        File::new(self.base_dir.join("config.json"))
    }
}

impl Default for StorageLayout {
    fn default() -> Self {
        let base_dir = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".objctl");

        Self::new(base_dir)
    }
}

/// Resolve the configuration file: explicit path, then `OBJCTL_CONFIG`, then the default layout
pub fn config_file(explicit: Option<PathBuf>) -> File {
    explicit
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .map(File::new)
        .unwrap_or_else(|| StorageLayout::default().config_file())
}
