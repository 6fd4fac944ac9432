use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::utils::path::expand_tilde;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub roster: String,
    pub log: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_match_mode")]
    pub match_mode: String,
    /// Empty string disables the admin gate.
    #[serde(default)]
    pub admin_password: String,
    #[serde(default = "default_none")]
    pub submission_window: String,
    #[serde(default = "default_none")]
    pub retention: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_store() -> String {
    "csv".to_string()
}
fn default_match_mode() -> String {
    "auto".to_string()
}
fn default_none() -> String {
    "none".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: Self::roster_file().to_string_lossy().to_string(),
            log: Self::log_file().to_string_lossy().to_string(),
            database: default_database(),
            store: default_store(),
            match_mode: default_match_mode(),
            admin_password: String::new(),
            submission_window: default_none(),
            retention: default_none(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rollcall")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rollcall")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rollcall.conf")
    }

    pub fn roster_file() -> PathBuf {
        Self::config_dir().join("roster.csv")
    }

    pub fn log_file() -> PathBuf {
        Self::config_dir().join("attendance_log.csv")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rollcall.sqlite")
    }

    /// Load configuration from the given file, or return defaults when the
    /// file does not exist yet.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_yaml::from_str(&content).map_err(|e| {
                AppError::Config(format!("failed to parse {}: {}", path.display(), e))
            })
        } else {
            Ok(Config::default())
        }
    }

    pub fn roster_path(&self) -> PathBuf {
        expand_tilde(&self.roster)
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log)
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Create the config directory and write a default config file.
    /// An existing config file is left untouched.
    pub fn init_all(config_path: &Path) -> AppResult<PathBuf> {
        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir)?;
        }

        if !config_path.exists() {
            let config = Config::default();
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("failed to encode defaults: {}", e)))?;
            let mut file = fs::File::create(config_path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config_path.to_path_buf())
    }

    /// Keys of the current schema that are missing from the file on disk.
    /// Useful after upgrades, before serde fills them with defaults.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Err(AppError::SourceMissing(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let on_disk: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))?;

        let expected = serde_yaml::to_value(Config::default())
            .map_err(|e| AppError::Config(format!("failed to encode defaults: {}", e)))?;

        let mut missing = Vec::new();
        if let (Some(expected_map), Some(disk_map)) = (expected.as_mapping(), on_disk.as_mapping())
        {
            for key in expected_map.keys() {
                if !disk_map.contains_key(key) {
                    if let Some(name) = key.as_str() {
                        missing.push(name.to_string());
                    }
                }
            }
        }

        Ok(missing)
    }
}
