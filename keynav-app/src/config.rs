//! Simple configuration for keynav
//!
//! Stores the chord timeout and logging preferences. Key bindings are fixed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use keynav_input::CHORD_TIMEOUT;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Delay before an incomplete chord is abandoned
    pub chord_timeout: Duration,
    /// Default filter directive when `RUST_LOG` is unset
    pub log_level: String,
    /// Log file override
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chord_timeout: CHORD_TIMEOUT,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load config from the default location
    ///
    /// Returns default config if file doesn't exist or can't be read.
    pub fn load() -> Self {
        let path = Self::config_path();
        Self::load_from(&path).unwrap_or_default()
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Get the default config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keynav")
            .join("config.txt")
    }

    /// Where log output goes
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("keynav")
                .join("keynav.log")
        })
    }

    /// Parse config from simple key=value format
    fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let value = value.trim();

                match key.trim() {
                    "chord_timeout_ms" => {
                        if let Ok(ms) = value.parse::<u64>() {
                            if ms > 0 {
                                config.chord_timeout = Duration::from_millis(ms);
                            }
                        }
                    }
                    "log_level" => {
                        if !value.is_empty() {
                            config.log_level = value.to_string();
                        }
                    }
                    "log_file" => {
                        if !value.is_empty() {
                            config.log_file = Some(PathBuf::from(value));
                        }
                    }
                    _ => {} // Ignore unknown keys
                }
            }
        }

        config
    }
}
