// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use eagleboard_api::{ApiError, Event, EventId, EventSubmission, resolve_url};

use crate::api::EventApi;
use crate::config::{BoardConfig, Config, DraftRetention};
use crate::datetime::format_in;
use crate::draft::Draft;
use crate::modal::{EventModal, SubmitError, SubmitOutcome};

/// Shown in place of the grid when there are no events.
pub const EMPTY_STATE_MESSAGE: &str = "No events yet. Be the first to add one!";

/// Where the board is in fetching its list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed. Whatever was loaded before is still shown.
    Failed(String),
}

/// One event, ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub id: EventId,
    pub title: String,
    pub event_date: DateTime<Utc>,
    /// Event date in local time, formatted with the configured pattern.
    pub when: String,
    pub location: String,
    pub description: String,
    /// Absolute URL of the poster image.
    pub poster_url: Option<String>,
}

/// The bulletin board: the list of events plus the add-event modal.
#[derive(Debug, Clone)]
pub struct Board {
    events: Vec<Event>,
    status: LoadStatus,
    modal: EventModal,
    kept_draft: Option<Draft>,
    config: BoardConfig,
    base_url: String,
}

impl Board {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            events: Vec::new(),
            status: LoadStatus::Idle,
            modal: EventModal::Closed,
            kept_draft: None,
            config: config.board.clone(),
            base_url: config.api.base_url.clone(),
        }
    }

    /// Events in display order, earliest first.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Message of the last failed fetch.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the empty-state message should be shown instead of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn modal(&self) -> &EventModal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut EventModal {
        &mut self.modal
    }

    /// What happens to an unsubmitted draft when the modal closes.
    #[must_use]
    pub fn draft_retention(&self) -> DraftRetention {
        self.config.draft_retention
    }

    /// Fetches the event list once.
    pub async fn load<A: EventApi + ?Sized>(&mut self, api: &A) {
        let result = api.list_events().await;
        self.apply_loaded(result);
    }

    /// Applies the result of a list fetch. A success replaces the list,
    /// sorted by event date; a failure keeps the current list.
    pub fn apply_loaded(&mut self, result: Result<Vec<Event>, ApiError>) {
        match result {
            Ok(mut events) => {
                // stable, so equal dates keep server order
                events.sort_by_key(|e| e.event_date);
                tracing::debug!(count = events.len(), "board loaded");
                self.events = events;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch events");
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    /// Opens the modal ("Add Event").
    pub fn open_modal(&mut self) {
        if self.modal.is_open() {
            return;
        }

        let draft = match self.config.draft_retention {
            DraftRetention::Keep => self.kept_draft.take().unwrap_or_default(),
            DraftRetention::Discard => Draft::default(),
        };
        self.modal.open_with(draft);
    }

    /// Closes the modal without submitting. Ignored while a submission is in
    /// flight.
    pub fn close_modal(&mut self) {
        if self.modal.is_submitting() {
            return;
        }

        let draft = self.modal.dismiss();
        if self.config.draft_retention == DraftRetention::Keep {
            self.kept_draft = draft.filter(|d| !d.is_blank());
        }
    }

    /// Starts a submission, reading the typed date in the local time zone.
    pub fn begin_submit(&mut self) -> Result<EventSubmission, SubmitError> {
        self.begin_submit_in(&Local)
    }

    pub fn begin_submit_in<Tz: TimeZone>(&mut self, tz: &Tz) -> Result<EventSubmission, SubmitError> {
        self.modal.begin_submit(tz)
    }

    /// Applies a submission result. The caller reloads the list when this
    /// returns [`SubmitOutcome::Created`].
    pub fn finish_submit(&mut self, result: Result<Option<Event>, ApiError>) -> SubmitOutcome {
        let outcome = self.modal.finish_submit(result);
        self.settle(&outcome);
        outcome
    }

    // a submitted draft is never offered again
    fn settle(&mut self, outcome: &SubmitOutcome) {
        if matches!(outcome, SubmitOutcome::Created(_)) {
            self.kept_draft = None;
        }
    }

    /// Submits the modal's draft and, on success, reloads the list once.
    pub async fn submit<A: EventApi + ?Sized>(
        &mut self,
        api: &A,
    ) -> Result<SubmitOutcome, SubmitError> {
        self.submit_in(api, &Local).await
    }

    pub async fn submit_in<A, Tz>(&mut self, api: &A, tz: &Tz) -> Result<SubmitOutcome, SubmitError>
    where
        A: EventApi + ?Sized,
        Tz: TimeZone,
    {
        let outcome = self.modal.submit(api, tz).await?;
        self.settle(&outcome);
        if matches!(outcome, SubmitOutcome::Created(_)) {
            self.load(api).await;
        }
        Ok(outcome)
    }

    /// Cards in display order, dates shown in the local time zone.
    #[must_use]
    pub fn cards(&self) -> Vec<EventCard> {
        self.cards_in(&Local)
    }

    #[must_use]
    pub fn cards_in<Tz>(&self, tz: &Tz) -> Vec<EventCard>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.events
            .iter()
            .map(|e| EventCard {
                id: e.id.clone(),
                title: e.title.clone(),
                event_date: e.event_date,
                when: format_in(&e.event_date, tz, &self.config.date_format),
                location: e.location.clone(),
                description: e.description.clone(),
                poster_url: e
                    .poster_url
                    .as_deref()
                    .map(|path| resolve_url(&self.base_url, path)),
            })
            .collect()
    }
}
