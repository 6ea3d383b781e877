//! Configuration management for Callform CLI
//!
//! Stores the server URL, default voice, current prompt and saved prompts in
//! ~/.config/callform/config.toml

use anyhow::{Context, Result};
use callform::Voice;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "callform";
const CONFIG_FILE: &str = "config.toml";

/// Overrides `server_url` when set (also read from `.env`)
pub const SERVER_URL_ENV: &str = "CALLFORM_SERVER_URL";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default)]
    pub voice: Voice,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default)]
    pub saved_prompts: BTreeMap<String, String>,
}

fn default_server_url() -> String {
    "http://localhost:6060".to_string()
}

fn default_prompt() -> String {
    "You are a helpful AI assistant".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            voice: Voice::default(),
            prompt: default_prompt(),
            saved_prompts: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from the default location, or defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Store a prompt under `name`, replacing any previous one
    pub fn save_prompt(&mut self, name: String, text: String) {
        self.saved_prompts.insert(name, text);
    }

    /// Make a saved prompt current
    pub fn load_prompt(&mut self, name: &str) -> bool {
        match self.saved_prompts.get(name) {
            Some(text) => {
                self.prompt = text.clone();
                true
            }
            None => false,
        }
    }

    /// Server URL, in order: explicit override, environment, config file
    pub fn server_url(&self, override_url: Option<&str>) -> String {
        override_url
            .map(|s| s.to_string())
            .or_else(|| std::env::var(SERVER_URL_ENV).ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| self.server_url.clone())
    }
}
