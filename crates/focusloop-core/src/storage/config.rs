//! TOML-based application configuration.
//!
//! Stores timer durations, the notification flag, and the relay address at
//! `~/.config/focusloop/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, CoreError, Result};
use crate::timer::TimerConfig;

/// Timer durations in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSection {
    #[serde(default = "default_session")]
    pub session_minutes: u64,
    #[serde(default = "default_break")]
    pub break_minutes: u64,
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelaySection {
    #[serde(default = "default_relay_addr")]
    pub addr: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/focusloop/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerSection,
    #[serde(default)]
    pub notifications: NotificationsSection,
    #[serde(default)]
    pub relay: RelaySection,
}

fn default_session() -> u64 {
    25
}
fn default_break() -> u64 {
    5
}
fn default_long_break() -> u64 {
    15
}
fn default_true() -> bool {
    true
}
fn default_relay_addr() -> String {
    "127.0.0.1:4750".into()
}

impl Default for TimerSection {
    fn default() -> Self {
        Self {
            session_minutes: default_session(),
            break_minutes: default_break(),
            long_break_minutes: default_long_break(),
        }
    }
}

impl Default for NotificationsSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for RelaySection {
    fn default() -> Self {
        Self {
            addr: default_relay_addr(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timer: TimerSection::default(),
            notifications: NotificationsSection::default(),
            relay: RelaySection::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the defaults on first run.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| {
                    CoreError::Config(ConfigError::LoadFailed {
                        path,
                        message: e.to_string(),
                    })
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| {
            CoreError::Config(ConfigError::SaveFailed {
                path: path.clone(),
                message: e.to_string(),
            })
        })?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig {
            session_minutes: self.timer.session_minutes,
            break_minutes: self.timer.break_minutes,
            long_break_minutes: self.timer.long_break_minutes,
        }
    }
}
