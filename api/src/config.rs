// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Address of the event API when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Event API server configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the API server. Poster paths are resolved against it too.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent string.
    pub user_agent: String,
}

impl ApiConfig {
    /// Returns a copy of the configuration pointing at another server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("eagleboard/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_section_falls_back_to_defaults() {
        let config: ApiConfig = serde_json::from_str(r#"{"base_url":"https://board.example.edu"}"#)
            .expect("valid config");
        assert_eq!(config.base_url, "https://board.example.edu");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("eagleboard/"));
    }

    #[test]
    fn with_base_url_overrides_only_the_address() {
        let config = ApiConfig {
            timeout_secs: 5,
            ..Default::default()
        }
        .with_base_url("http://127.0.0.1:9000");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout_secs, 5);
    }
}
