//! User configuration stored as TOML.
//!
//! Default location: `<config dir>/sortviz/config.toml`. A missing file means
//! defaults; missing fields in an existing file fall back to their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;
use crate::engine::{Settings, SizeLimits, Speed};
use crate::sequence::ValueRange;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub sequence: SequenceConfig,
}

/// `[playback]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Algorithm selected on startup
    pub algorithm: Algorithm,
    /// Animation speed, 1 (slowest) to 10 (fastest)
    pub speed: u8,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            speed: Speed::default().get(),
        }
    }
}

/// `[sequence]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Number of bars generated on startup and on reset
    pub size: usize,
    pub size_min: usize,
    pub size_max: usize,
    /// Smallest random value (inclusive, must be positive)
    pub value_min: u32,
    /// Largest random value (inclusive)
    pub value_max: u32,
    /// Fixed RNG seed for reproducible sequences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            size: settings.size,
            size_min: settings.size_limits.min,
            size_max: settings.size_limits.max,
            value_min: settings.values.min,
            value_max: settings.values.max,
            seed: None,
        }
    }
}

impl Config {
    /// `<config dir>/sortviz/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("sortviz").join("config.toml"))
    }

    /// Explicit path if given, otherwise the default location.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load from `path`, returning defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate into engine settings.
    pub fn to_settings(&self) -> Result<Settings> {
        let settings = Settings {
            algorithm: self.playback.algorithm,
            speed: Speed::new(self.playback.speed)?,
            size: self.sequence.size,
            size_limits: SizeLimits {
                min: self.sequence.size_min,
                max: self.sequence.size_max,
            },
            values: ValueRange::new(self.sequence.value_min, self.sequence.value_max)?,
            seed: self.sequence.seed,
        };
        settings.validate()?;
        Ok(settings)
    }
}
