use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PaydeckError, Result};

/// RGB color values
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Theme color palette
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Section headers and the active view tab
    pub header: Rgb,
    /// Muted/secondary text (disabled navigation, dimmed columns)
    pub muted: Rgb,
    /// Completed payments
    pub success: Rgb,
    /// Pending payments
    pub warning: Rgb,
    /// Failed payments and error notices
    pub error: Rgb,
    /// Scheduled payments and informational notices
    pub info: Rgb,
}

impl Default for ThemeColors {
    fn default() -> Self {
        // Readable on most terminals
        Self {
            header: Rgb::new(147, 197, 253),
            muted: Rgb::new(140, 140, 140),
            success: Rgb::new(134, 239, 172),
            warning: Rgb::new(253, 224, 71),
            error: Rgb::new(252, 129, 129),
            info: Rgb::new(216, 180, 254),
        }
    }
}

/// Client configuration, read from `config.json` in the paydeck config
/// directory. Every field has a default so a missing or partial file works.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub server_url: String,
    /// Records per page in the history view; fixed for the session.
    pub history_page_size: usize,
    /// Records per page in the schedule view; fixed for the session.
    pub schedule_page_size: usize,
    pub theme: ThemeColors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            history_page_size: 25,
            schedule_page_size: 25,
            theme: ThemeColors::default(),
        }
    }
}

impl Config {
    /// `~/.config/paydeck` (or the platform equivalent).
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("paydeck"))
    }

    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_dir().map(|d| d.join("config.json")) else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)?;
        let mut config: Config = serde_json::from_str(&contents)
            .map_err(|e| PaydeckError::Config(format!("{}: {e}", path.display())))?;
        if config.history_page_size == 0 {
            config.history_page_size = Config::default().history_page_size;
        }
        if config.schedule_page_size == 0 {
            config.schedule_page_size = Config::default().schedule_page_size;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "serverUrl": "https://pay.example.com" }"#).unwrap();
        assert_eq!(config.server_url, "https://pay.example.com");
        assert_eq!(config.history_page_size, 25);
        assert_eq!(config.schedule_page_size, 25);
    }

    #[test]
    fn test_default_round_trips() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.server_url, Config::default().server_url);
    }
}
