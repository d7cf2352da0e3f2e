use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_TOAST_MILLIS: u64 = 3500;
const DEFAULT_TICK_MILLIS: u64 = 100;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. GROUPLIST_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`<config_dir>/grouplist/config.toml`)
///
/// Returns `None` when no location can be determined; callers then run with
/// defaults.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("GROUPLIST_CONFIG") {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("grouplist").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file to read instead of the bundled data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
    /// Groups expanded when the list first shows.
    pub expanded: Vec<i64>,
    /// How long a toast stays on screen.
    pub toast_millis: u64,
    /// Input poll interval of the interactive list.
    pub tick_millis: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            expanded: Vec::new(),
            toast_millis: DEFAULT_TOAST_MILLIS,
            tick_millis: DEFAULT_TICK_MILLIS,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        // Relative data paths are relative to the config file.
        if let Some(data_path) = &config.data_path {
            if data_path.is_relative() {
                if let Some(parent) = path.parent() {
                    config.data_path = Some(parent.join(data_path));
                }
            }
        }

        Ok(config)
    }

    /// Load from the resolved location, or defaults if there is none.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_millis)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(10))
    }
}
