// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event API client.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{Event, EventSubmission, ServerInfo};

/// Client for the bulletin board event API.
///
/// # Example
///
/// ```ignore
/// use eagleboard_api::{ApiConfig, BoardClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BoardClient::new(ApiConfig::default())?;
/// for event in client.list_events().await? {
///     println!("{} @ {}", event.title, event.location);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BoardClient {
    http: Arc<HttpClient>,
}

impl BoardClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or HTTP client
    /// initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Base URL of the API, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Fetches the server banner (`GET /`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a banner.
    pub async fn info(&self) -> Result<ServerInfo, ApiError> {
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, "/"))
            .await?;
        decode(resp).await
    }

    /// Fetches every event the server knows about (`GET /events`).
    ///
    /// The order is whatever the server returns. Entries that are not
    /// readable events, such as one without a usable `event_date`, are
    /// skipped so the rest of the board still shows.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a JSON array.
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, "/events"))
            .await?;
        let entries: Vec<serde_json::Value> = decode(resp).await?;
        let events = events_from_entries(entries);
        tracing::debug!(count = events.len(), "events fetched");
        Ok(events)
    }

    /// Submits a new event as `multipart/form-data` (`POST /events`).
    ///
    /// Returns the created event when the server echoes one back. A success
    /// status with an unexpected body still counts as created and yields
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn create_event(
        &self,
        submission: EventSubmission,
    ) -> Result<Option<Event>, ApiError> {
        tracing::debug!(
            title = %submission.title,
            has_poster = submission.poster.is_some(),
            "submitting event"
        );
        let form = submission.into_form()?;
        let resp = self
            .http
            .execute(self.http.build_request(Method::POST, "/events").multipart(form))
            .await?;

        Ok(created_event(resp.text().await))
    }

    /// Absolute URL of an event's poster image, if it has one.
    #[must_use]
    pub fn poster_url(&self, event: &Event) -> Option<String> {
        event
            .poster_url
            .as_deref()
            .map(|path| resolve_url(self.base_url(), path))
    }
}

/// Joins a server-relative path onto a base URL. Absolute URLs pass through.
#[must_use]
pub fn resolve_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

fn events_from_entries(entries: Vec<serde_json::Value>) -> Vec<Event> {
    let total = entries.len();
    let events: Vec<Event> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Event>(entry) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping unreadable event");
                None
            }
        })
        .collect();

    if events.len() < total {
        tracing::warn!(skipped = total - events.len(), total, "some events were skipped");
    }
    events
}

/// The event echoed back by a successful create. The status already said the
/// event exists, so an unreadable body only loses the echo.
fn created_event<E: std::fmt::Display>(body: Result<String, E>) -> Option<Event> {
    let text = match body {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read created event body");
            return None;
        }
    };

    match serde_json::from_str::<Event>(&text) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::debug!(error = %e, "created event body not understood");
            None
        }
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}
