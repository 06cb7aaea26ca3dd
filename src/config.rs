//! Host configuration.
//!
//! Reads `config.toml` from the platform config directory to decide which
//! plugins are enabled. A missing or unreadable file disables nothing.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[cfg(windows)]
fn config_dir() -> Option<PathBuf> {
    std::env::var("APPDATA")
        .map(PathBuf::from)
        .ok()
        .map(|p| p.join("plugin-host"))
}

#[cfg(not(windows))]
fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .map(PathBuf::from)
        .ok()
        .map(|p| p.join(".config").join("plugin-host"))
}

#[derive(Debug, Deserialize)]
struct PluginCfg {
    enabled: Option<bool>,
}

/// Per-plugin host settings loaded from `config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    plugins: HashMap<String, PluginCfg>,
}

impl HostConfig {
    /// Loads the configuration from the platform config directory.
    pub fn load() -> Self {
        let Some(dir) = config_dir() else {
            return Self::default();
        };
        match fs::read_to_string(dir.join("config.toml")) {
            Ok(data) => toml::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Names of the plugins the configuration turns off.
    pub fn disabled_plugins(&self) -> HashSet<String> {
        self.plugins
            .iter()
            .filter(|(_, cfg)| !cfg.enabled.unwrap_or(true))
            .map(|(name, _)| name.clone())
            .collect()
    }
}
