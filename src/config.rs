use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub generation: GenerationConfig,
}

/// Data file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
    /// Optional tables file; the built-in dataset is used when unset.
    pub tables_file: Option<PathBuf>,
}

/// Generation tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Smallest equipment loadout.
    pub min_equipment: u32,
    /// Largest equipment loadout.
    pub max_equipment: u32,
    /// Pronouns used when a request supplies none.
    pub default_pronouns: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            tables_file: None,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_equipment: 5,
            max_equipment: 15,
            default_pronouns: "they/them".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/rollwright/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}; using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}; using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("rollwright"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    /// Location of the favorites document.
    pub fn favorites_path(&self) -> PathBuf {
        self.data_dir().join("favorites.json")
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("rollwright").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
