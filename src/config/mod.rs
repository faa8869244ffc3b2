use crate::models::Visibility;
use crate::store::StoreSettings;
use crate::store::location::DEFAULT_LOCATION_TIMEOUT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_visibility")]
    pub default_visibility: String,
    #[serde(default = "default_location_timeout_ms")]
    pub location_timeout_ms: u64,
    #[serde(default = "default_share_host")]
    pub share_host: String,
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
    #[serde(default = "default_recent_limit")]
    pub default_recent_limit: usize,
}

fn default_visibility() -> String {
    "friends".to_string()
}
fn default_location_timeout_ms() -> u64 {
    DEFAULT_LOCATION_TIMEOUT.as_millis() as u64
}
fn default_share_host() -> String {
    "whensthefun.com".to_string()
}
fn default_radius_km() -> f64 {
    5.0
}
fn default_recent_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_visibility: default_visibility(),
            location_timeout_ms: default_location_timeout_ms(),
            share_host: default_share_host(),
            default_radius_km: default_radius_km(),
            default_recent_limit: default_recent_limit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("venuelog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".venuelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("venuelog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("venuelog.sqlite")
    }

    /// Load configuration from file, or return defaults if missing or
    /// unparseable.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Self::default(),
            }
        } else {
            Self::default()
        }
    }

    /// Translate config fields into engine settings.
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            location_timeout: Duration::from_millis(self.location_timeout_ms),
            default_visibility: Visibility::from_code(&self.default_visibility)
                .unwrap_or_default(),
            share_host: self.share_host.clone(),
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        // Write config file (skipped in test mode)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(db_path)
    }
}
