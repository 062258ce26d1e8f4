//! Configuration loader plus strongly typed settings structures.
//!
//! The config is read-only: we look for a user file and otherwise fall back to
//! the defaults embedded at compile time. Nothing here ever writes to disk.

use crate::core::actions::parse_key_string;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

pub mod validator;

// Embed default configuration at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable overriding the data directory (~/.portfolio)
pub const DIR_ENV: &str = "PORTFOLIO_DIR";

/// Keybind value that removes a default binding
pub const UNBOUND: &str = "none";

/// Top-level configuration object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub colors: ColorConfig,
    /// Key combo -> action name
    #[serde(default)]
    pub keybinds: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
    #[serde(default = "default_border_style")]
    pub border_style: String, // "single", "double", "rounded", "thick", "none"
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: default_poll_timeout_ms(),
            border_style: default_border_style(),
            mouse: default_mouse(),
        }
    }
}

/// Hex colors ("#RRGGBB") or "default" for the terminal color
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub tab_bar_background: String,
    pub tab_selected: String,
    pub tab_unselected: String,
    pub heading: String,
    pub text: String,
    pub text_secondary: String,
    pub highlight_background: String,
    pub highlight_text: String,
    pub border: String,
    pub status_info: String,
    pub status_error: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            tab_bar_background: "#DBCA95".to_string(),
            tab_selected: "#C77E24".to_string(),
            tab_unselected: "#000000".to_string(),
            heading: "#C77E24".to_string(),
            text: "default".to_string(),
            text_secondary: "#808080".to_string(),
            highlight_background: "#DBCA95".to_string(),
            highlight_text: "#000000".to_string(),
            border: "#808080".to_string(),
            status_info: "#DBCA95".to_string(),
            status_error: "#FF5555".to_string(),
        }
    }
}

impl ColorConfig {
    /// (field name, value) pairs, used for validation and reporting
    pub fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("tab_bar_background", &self.tab_bar_background),
            ("tab_selected", &self.tab_selected),
            ("tab_unselected", &self.tab_unselected),
            ("heading", &self.heading),
            ("text", &self.text),
            ("text_secondary", &self.text_secondary),
            ("highlight_background", &self.highlight_background),
            ("highlight_text", &self.highlight_text),
            ("border", &self.border),
            ("status_info", &self.status_info),
            ("status_error", &self.status_error),
        ]
    }
}

fn default_poll_timeout_ms() -> u64 {
    50
}

fn default_border_style() -> String {
    "rounded".to_string()
}

fn default_mouse() -> bool {
    true
}

impl Config {
    /// The defaults compiled into the binary
    pub fn embedded() -> Result<Self> {
        toml::from_str(DEFAULT_CONFIG).context("Failed to parse embedded default config")
    }

    /// Parse a user config. Keybinds are layered over the embedded defaults;
    /// binding a key to "none" removes it.
    ///
    /// Defaults are matched by the key they name, not by spelling, so "Enter"
    /// replaces the default "enter" binding.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        let user = std::mem::take(&mut config.keybinds);

        let overridden: HashSet<_> = user
            .keys()
            .filter_map(|combo| parse_key_string(combo))
            .collect();
        let mut keybinds = Self::embedded()?.keybinds;
        keybinds.retain(|combo, _| {
            !user.contains_key(combo)
                && parse_key_string(combo).map_or(true, |key| !overridden.contains(&key))
        });

        for (combo, action) in user {
            if action.trim() != UNBOUND {
                keybinds.insert(combo, action);
            }
        }
        config.keybinds = keybinds;

        Ok(config)
    }

    /// Load config from a specific file; the file must exist
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_toml(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load config, checking in order:
    /// 1. $PORTFOLIO_DIR/config.toml
    /// 2. ~/.portfolio/config.toml
    /// 3. the embedded defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) if path.exists() => Self::load_from_path(&path),
            Ok(path) => {
                tracing::info!("No config at {:?}, using built-in defaults", path);
                Self::embedded()
            }
            Err(e) => {
                tracing::warn!("Could not resolve config directory: {:#}", e);
                Self::embedded()
            }
        }
    }

    /// Get the base directory (~/.portfolio/)
    /// Can be overridden with PORTFOLIO_DIR environment variable
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".portfolio"))
    }

    /// Returns: ~/.portfolio/config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
