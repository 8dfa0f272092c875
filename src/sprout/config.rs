//! # Configuration
//!
//! Stored as `config.json` in the data directory. Every field has a default,
//! so a missing file or a partial one both load.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage-key` | `plants` | Key the plant collection is stored under |
//! | `sunlight-options` | `Full Sun, Partial Shade, Low Light` | Values offered for sunlight |
//! | `default-sort` | `none` | Sort used when `--sort` is not given |
//! | `alerts` | `true` | Warn about thirsty plants when listing |
//! | `tick-ms` | `1000` | Refresh interval of the `watch` board |

use crate::error::{Result, SproutError};
use crate::index::SortOrder;
use crate::store::DEFAULT_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: &[&str] = &[
    "storage-key",
    "sunlight-options",
    "default-sort",
    "alerts",
    "tick-ms",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct SproutConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_sunlight_options")]
    pub sunlight_options: Vec<String>,

    #[serde(default)]
    pub default_sort: SortOrder,

    #[serde(default = "default_alerts")]
    pub alerts: bool,

    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_storage_key() -> String {
    DEFAULT_KEY.to_string()
}

fn default_sunlight_options() -> Vec<String> {
    vec![
        "Full Sun".to_string(),
        "Partial Shade".to_string(),
        "Low Light".to_string(),
    ]
}

fn default_alerts() -> bool {
    true
}

fn default_tick_ms() -> u64 {
    1000
}

impl Default for SproutConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            sunlight_options: default_sunlight_options(),
            default_sort: SortOrder::default(),
            alerts: default_alerts(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl SproutConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SproutError::Io)?;
        let config: SproutConfig =
            serde_json::from_str(&content).map_err(SproutError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SproutError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SproutError::Serialization)?;
        fs::write(config_path, content).map_err(SproutError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "sunlight-options" => Some(self.sunlight_options.join(", ")),
            "default-sort" => Some(self.default_sort.to_string()),
            "alerts" => Some(self.alerts.to_string()),
            "tick-ms" => Some(self.tick_ms.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(format!("Invalid storage key: '{}'", value));
                }
                self.storage_key = value.to_string();
            }
            "sunlight-options" => {
                self.sunlight_options = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            "default-sort" => self.default_sort = value.parse()?,
            "alerts" => {
                self.alerts = value
                    .parse()
                    .map_err(|_| format!("alerts must be true or false, got '{}'", value))?
            }
            "tick-ms" => match value.parse::<u64>() {
                Ok(ms) if ms > 0 => self.tick_ms = ms,
                _ => return Err(format!("tick-ms must be a positive integer, got '{}'", value)),
            },
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}
