// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Deref;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ApiError;

/// Server-assigned event identifier.
///
/// Opaque to the client; only unique within one fetched list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new `EventId` from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for EventId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A campus event as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier.
    pub id: EventId,

    /// Event title.
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,

    /// Free-form description.
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,

    /// Where the event takes place.
    #[serde(default, deserialize_with = "nullable_string")]
    pub location: String,

    /// When the event takes place.
    #[serde(with = "timestamp")]
    pub event_date: DateTime<Utc>,

    /// Path of the poster image, relative to the API base URL.
    #[serde(default)]
    pub poster_url: Option<String>,

    /// When the server stored the event. Informational only.
    #[serde(default, with = "timestamp_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Banner returned by the API root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name, e.g. `EagleBoard`.
    #[serde(default, deserialize_with = "nullable_string")]
    pub message: String,

    /// Server version, if reported.
    #[serde(default)]
    pub version: Option<String>,
}

/// Poster image attached to a submission.
#[derive(Clone, PartialEq, Eq)]
pub struct PosterFile {
    /// File name sent with the upload.
    pub file_name: String,
    /// MIME type of the content.
    pub content_type: String,
    /// Raw image bytes.
    pub bytes: Vec<u8>,
}

impl PosterFile {
    /// Creates a poster, guessing the content type from the file extension.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Reads a poster image from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or has no file name.
    pub async fn from_path(path: &Path) -> Result<Self, ApiError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ApiError::Config(format!("not a file: {}", path.display())))?
            .to_string();

        let bytes = tokio::fs::read(path).await?;
        tracing::debug!(%file_name, size = bytes.len(), "poster loaded");
        Ok(Self::new(file_name, bytes))
    }
}

impl fmt::Debug for PosterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PosterFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// A validated event ready to be sent to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSubmission {
    /// Event title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Absolute event time.
    pub event_date: DateTime<Utc>,
    /// Where the event takes place.
    pub location: String,
    /// Optional poster image, sent as the `poster` part.
    pub poster: Option<PosterFile>,
}

impl EventSubmission {
    /// Field name of the poster file part.
    pub const POSTER_FIELD: &str = "poster";

    /// Builds the `multipart/form-data` body.
    ///
    /// # Errors
    ///
    /// Returns an error if the poster content type is not a valid MIME type.
    pub fn into_form(self) -> Result<reqwest::multipart::Form, ApiError> {
        use reqwest::multipart::{Form, Part};

        let mut form = Form::new()
            .text("title", self.title)
            .text("description", self.description)
            .text("event_date", format_timestamp(&self.event_date))
            .text("location", self.location);

        if let Some(poster) = self.poster {
            let part = Part::bytes(poster.bytes)
                .file_name(poster.file_name)
                .mime_str(&poster.content_type)?;
            form = form.part(Self::POSTER_FIELD, part);
        }

        Ok(form)
    }
}

/// Formats a timestamp the way the board sends it: ISO 8601, UTC, millisecond
/// precision, `Z` suffix.
#[must_use]
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a timestamp as found on the wire.
///
/// Accepts RFC 3339 with an offset, naive ISO 8601 date-times (taken as UTC)
/// with or without fractional seconds, and bare dates (midnight UTC).
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

mod timestamp {
    use super::{DateTime, Deserialize, Deserializer, Serializer, Utc};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_timestamp(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {s:?}")))
    }
}

mod timestamp_opt {
    use super::{DateTime, Deserialize, Deserializer, Serializer, Utc};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        dt: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => serializer.serialize_some(&super::format_timestamp(dt)),
            None => serializer.serialize_none(),
        }
    }

    // informational field, an unreadable value is dropped rather than failing the list
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.and_then(|s| {
            let parsed = super::parse_timestamp(&s);
            if parsed.is_none() {
                tracing::debug!(value = %s, "ignoring unreadable created_at");
            }
            parsed
        }))
    }
}
