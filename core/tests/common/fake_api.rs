// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory stand-in for the event API.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use eagleboard_core::{ApiError, Event, EventApi, EventId, EventSubmission};

/// Serves a mutable event list and records every call.
///
/// Successful creations are appended to the list, so a reload after a
/// submission sees the new event.
#[derive(Debug, Default)]
pub struct FakeApi {
    events: Mutex<Vec<Event>>,
    create_failures: Mutex<VecDeque<ApiError>>,
    submissions: Mutex<Vec<EventSubmission>>,
    fail_list: AtomicBool,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl FakeApi {
    pub fn with_events(events: Vec<Event>) -> Self {
        let api = Self::default();
        *api.events.lock().unwrap() = events;
        api
    }

    /// Makes the next `create_event` call fail with `error`.
    pub fn fail_next_create(&self, error: ApiError) {
        self.create_failures.lock().unwrap().push_back(error);
    }

    /// Makes every `list_events` call fail until switched back.
    pub fn set_list_failing(&self, failing: bool) {
        self.fail_list.store(failing, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn submissions(&self) -> Vec<EventSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventApi for FakeApi {
    async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ApiError::InvalidResponse("connection reset".to_string()));
        }
        Ok(self.events.lock().unwrap().clone())
    }

    async fn create_event(&self, submission: EventSubmission) -> Result<Option<Event>, ApiError> {
        let n = self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.submissions.lock().unwrap().push(submission.clone());

        if let Some(error) = self.create_failures.lock().unwrap().pop_front() {
            return Err(error);
        }

        let event = Event {
            id: EventId::new(format!("created-{n}")),
            title: submission.title,
            description: submission.description,
            location: submission.location,
            event_date: submission.event_date,
            poster_url: submission
                .poster
                .map(|p| format!("/uploads/{n}_{}", p.file_name)),
            created_at: None,
        };
        self.events.lock().unwrap().push(event.clone());
        Ok(Some(event))
    }
}
