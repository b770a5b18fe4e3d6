// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::TimeZone;
use eagleboard_api::{EventSubmission, PosterFile};

use crate::datetime::{local_to_utc, parse_local_datetime};

/// The in-progress, unsaved event held by the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Event title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Local date and time as typed, e.g. `2025-05-01T18:30`.
    pub event_date: String,
    /// Where the event takes place.
    pub location: String,
    /// Optional poster image.
    pub poster: Option<PosterFile>,
}

impl Draft {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_event_date(&mut self, event_date: impl Into<String>) {
        self.event_date = event_date.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn set_poster(&mut self, poster: Option<PosterFile>) {
        self.poster = poster;
    }

    /// Sets a text field by name.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        match field {
            DraftField::Title => self.set_title(value),
            DraftField::Description => self.set_description(value),
            DraftField::EventDate => self.set_event_date(value),
            DraftField::Location => self.set_location(value),
        }
    }

    /// Returns a text field by name.
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::EventDate => &self.event_date,
            DraftField::Location => &self.location,
        }
    }

    /// Resets every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether nothing has been entered yet.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.get(*f).trim().is_empty()) && self.poster.is_none()
    }

    /// Required fields that are empty or whitespace only, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// Validates the draft and converts it into a submission, reading the
    /// typed date as wall-clock time in `tz`.
    pub fn to_submission<Tz: TimeZone>(&self, tz: &Tz) -> Result<EventSubmission, DraftError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DraftError::MissingFields(missing));
        }

        let naive = parse_local_datetime(&self.event_date)
            .ok_or_else(|| DraftError::InvalidDate(self.event_date.trim().to_string()))?;

        Ok(EventSubmission {
            title: self.title.clone(),
            description: self.description.clone(),
            event_date: local_to_utc(tz, naive),
            location: self.location.clone(),
            poster: self.poster.clone(),
        })
    }
}

/// The required text fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Description,
    EventDate,
    Location,
}

impl DraftField {
    /// All fields, in form order.
    pub const ALL: [DraftField; 4] = [
        DraftField::Title,
        DraftField::Description,
        DraftField::EventDate,
        DraftField::Location,
    ];

    /// Label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Description => "Description",
            DraftField::EventDate => "Date & Time",
            DraftField::Location => "Location",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("All fields except poster are required.")]
    MissingFields(Vec<DraftField>),

    #[error("Invalid date and time: {0}")]
    InvalidDate(String),
}
