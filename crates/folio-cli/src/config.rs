use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site content file used instead of the compiled-in one
    pub content: Option<PathBuf>,
}

impl Config {
    /// Get the config directory path (~/.config/folio)
    pub fn dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("folio"))
    }

    /// Get the config file path (~/.config/folio/config.toml)
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join("config.toml"))
    }

    /// Load config from file, returning default if file doesn't exist
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to file, creating directory if needed
    pub fn save(&self) -> Result<()> {
        let dir = Self::dir().context("Could not determine config directory")?;
        let path = Self::path().context("Could not determine config path")?;

        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn get_content(&self) -> Option<&PathBuf> {
        self.content.as_ref()
    }

    pub fn set_content(&mut self, path: PathBuf) {
        self.content = Some(path);
    }

    pub fn clear_content(&mut self) {
        self.content = None;
    }
}
