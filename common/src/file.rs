use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

pub trait SyncLoadFromTomlFile: DeserializeOwned {
    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&data).with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// Writes `default` to `path` first if nothing is there yet.
    fn from_file_or_default(path: &Path, default: &str) -> Result<Self> {
        if path.exists() {
            return Self::from_file(path);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, default)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Self::from_file(path)
    }
}
