// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use tokio::fs;

use eagleboard_core::{APP_NAME, Config};

const EAGLEBOARD_CONFIG_ENV: &str = "EAGLEBOARD_CONFIG";
const EAGLEBOARD_DEV_ENV: &str = "EAGLEBOARD_DEV";

const DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Loads the configuration.
///
/// An explicit path (flag or environment variable) must exist. The default
/// location may be absent, in which case the built-in defaults apply.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(EAGLEBOARD_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({EAGLEBOARD_DEV_ENV} is set): config must be explicitly specified via --config or {EAGLEBOARD_CONFIG_ENV} environment variable",
            ).into());
        }

        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        config
    };

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?;

    let mut config: Config = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;
    config.normalize()?;
    Ok(config)
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(EAGLEBOARD_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            EAGLEBOARD_DEV_ENV,
            val,
            DEV_VALID_TRUE.join(", "),
            DEV_VALID_FALSE.join(", ")
        );
        None
    }
}
