use crate::core::countdown::DEFAULT_DURATION;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_duration;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_time")]
    pub default_time: String,
    #[serde(default = "default_log_enabled")]
    pub log_enabled: bool,
    #[serde(default = "default_sound_file")]
    pub sound_file: String,
    #[serde(default = "default_sound_player")]
    pub sound_player: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_time() -> String {
    format!("{}m", DEFAULT_DURATION / 60)
}
fn default_log_enabled() -> bool {
    true
}
fn default_sound_file() -> String {
    "~/.pompom/sound.wav".to_string()
}
fn default_sound_player() -> String {
    "/usr/bin/play".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_time: default_time(),
            log_enabled: default_log_enabled(),
            sound_file: default_sound_file(),
            sound_player: default_sound_player(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pompom")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".pompom")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pompom.conf")
    }

    /// Return the full path of the SQLite work log
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("pompom.sqlite")
    }

    /// Load configuration from the standard file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    /// Default session length in seconds.
    pub fn default_seconds(&self) -> AppResult<u64> {
        parse_duration(&self.default_time)
    }

    /// Initialize the configuration directory and file; returns the work log path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => expand_tilde(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(db_path)
    }
}
