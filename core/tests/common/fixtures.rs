// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use eagleboard_core::{Config, Draft, DraftRetention, Event, EventId};

/// Creates a test configuration pointing at a fake server.
#[must_use]
pub fn test_config(retention: DraftRetention) -> Config {
    let mut config = Config::default();
    config.api.base_url = "http://board.test".to_string();
    config.board.date_format = "%Y-%m-%d %H:%M".to_string();
    config.board.draft_retention = retention;
    config
}

/// Creates an event dated at the given RFC 3339 timestamp.
///
/// # Example
///
/// ```ignore
/// let event = test_event("a", "2025-05-01T00:00:00Z");
/// ```
#[must_use]
pub fn test_event(id: &str, date: &str) -> Event {
    Event {
        id: EventId::from(id),
        title: format!("Event {id}"),
        description: format!("Description of {id}"),
        location: "Student Center".to_string(),
        event_date: eagleboard_api::parse_timestamp(date).expect("valid test date"),
        poster_url: None,
        created_at: None,
    }
}

/// Fills every required field of a draft.
pub fn fill_draft(draft: &mut Draft, title: &str) {
    draft.set_title(title);
    draft.set_description("Open to all students");
    draft.set_event_date("2025-04-15T17:00");
    draft.set_location("Gasson Hall");
}
