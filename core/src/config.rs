// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use eagleboard_api::ApiConfig;

use crate::datetime::{DEFAULT_DATE_FORMAT, is_valid_format};

/// The name of the EagleBoard application.
pub const APP_NAME: &str = "eagleboard";

/// Configuration for the EagleBoard client. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend connection settings.
    pub api: ApiConfig,

    /// Board presentation and modal behaviour.
    pub board: BoardConfig,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        let base_url = self.api.base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err("api.base_url must not be empty".into());
        }
        self.api.base_url = base_url.to_string();

        if !is_valid_format(&self.board.date_format) {
            return Err(format!("Invalid board.date_format: {}", self.board.date_format).into());
        }

        Ok(())
    }
}

/// Board settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// strftime pattern for event dates on cards.
    pub date_format: String,

    /// What happens to an unsubmitted draft when the modal is dismissed.
    pub draft_retention: DraftRetention,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            draft_retention: DraftRetention::default(),
        }
    }
}

/// Whether a dismissed draft survives until the modal is opened again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftRetention {
    /// Every open starts from an empty form.
    #[default]
    Discard,

    /// Reopening after a dismiss restores what was typed.
    Keep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.board.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(config.board.draft_retention, DraftRetention::Discard);
    }

    #[test]
    fn test_config_partial_sections() {
        let config: Config = toml::from_str(
            r#"
[api]
base_url = "https://events.example.edu/"

[board]
draft_retention = "keep"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://events.example.edu/");
        assert_eq!(config.board.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(config.board.draft_retention, DraftRetention::Keep);
    }

    #[test]
    fn test_config_rejects_unknown_retention() {
        let result: Result<Config, _> = toml::from_str("[board]\ndraft_retention = \"forever\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize() {
        let mut config = Config::default();
        config.api.base_url = " https://events.example.edu/ ".to_string();
        config.normalize().unwrap();
        assert_eq!(config.api.base_url, "https://events.example.edu");

        let mut config = Config::default();
        config.board.date_format = "%Q".to_string();
        assert!(config.normalize().is_err());

        let mut config = Config::default();
        config.api.base_url = "  ".to_string();
        assert!(config.normalize().is_err());
    }
}
