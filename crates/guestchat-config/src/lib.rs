//! Guestchat settings: where saved assistant messages live and which files
//! count as messages.
//!
//! Read from `~/.config/guestchat/config.toml`:
//!
//! ```toml
//! transcripts_path = "~/concierge/transcripts"
//! extensions = ["txt", "md"]
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR: &str = "~/.config/guestchat";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read guestchat config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("guestchat config {path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory of saved assistant messages.
    pub transcripts_path: PathBuf,
    /// File extensions treated as messages when scanning `transcripts_path`.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string(), "md".to_string()]
}

impl Config {
    pub fn new(transcripts_path: PathBuf) -> Self {
        Self {
            transcripts_path,
            extensions: default_extensions(),
        }
    }

    /// Loads the config at `path`; a missing file is `Ok(None)`, not an error.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(config.resolved()))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Writes the config as TOML, creating parent directories as needed.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating config directory {}", dir.display()))?;
        }
        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(CONFIG_DIR).as_ref()).join(CONFIG_FILE)
    }

    /// Expands `~` and `$VARS` in the transcripts path and accepts extensions
    /// written with a leading dot (`.txt`).
    fn resolved(mut self) -> Self {
        if let Some(expanded) = Self::expand_path(&self.transcripts_path) {
            self.transcripts_path = expanded;
        }
        for ext in &mut self.extensions {
            if let Some(bare) = ext.strip_prefix('.') {
                *ext = bare.to_string();
            }
        }
        self
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        shellexpand::full(&path.to_string_lossy())
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}
