// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::TimeZone;
use eagleboard_api::{ApiError, Event, EventSubmission};

use crate::api::EventApi;
use crate::draft::{Draft, DraftError};

/// Shown when a submission fails and the server gave no reason.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit event. Please try again.";

/// The add-event form.
///
/// The modal is a two-level state machine: `Closed`, or `Open` in one of the
/// [`ModalPhase`]s. Only an open modal owns a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventModal {
    #[default]
    Closed,
    Open(OpenModal),
}

/// State of an open modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenModal {
    pub draft: Draft,
    pub phase: ModalPhase,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalPhase {
    /// Accepting input.
    #[default]
    Editing,
    /// A submission is in flight; input and submit are inert.
    Submitting,
    /// The last attempt failed; input is accepted again.
    Error(String),
}

/// Result of a finished submission, reported to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server accepted the event. The parent should refresh its list.
    Created(Option<Event>),
    /// The server refused or could not be reached. The message is shown inline.
    Failed(String),
}

/// Why a submission did not start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("The event form is not open")]
    NotOpen,

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error(transparent)]
    Invalid(#[from] DraftError),
}

impl EventModal {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(
            self,
            Self::Open(OpenModal {
                phase: ModalPhase::Submitting,
                ..
            })
        )
    }

    /// The draft being edited, if the modal is open.
    #[must_use]
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Open(open) => Some(&open.draft),
            Self::Closed => None,
        }
    }

    /// The inline error message, if the last attempt failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Open(OpenModal {
                phase: ModalPhase::Error(message),
                ..
            }) => Some(message),
            _ => None,
        }
    }

    /// Opens the modal with an empty draft.
    pub fn open(&mut self) {
        self.open_with(Draft::default());
    }

    /// Opens the modal on an existing draft. Does nothing while a submission
    /// is in flight.
    pub fn open_with(&mut self, draft: Draft) {
        if self.is_submitting() {
            tracing::debug!("modal busy, open ignored");
            return;
        }

        *self = Self::Open(OpenModal {
            draft,
            phase: ModalPhase::Editing,
        });
    }

    /// Closes without submitting and hands back the draft, if there was one.
    pub fn dismiss(&mut self) -> Option<Draft> {
        match std::mem::take(self) {
            Self::Open(open) => Some(open.draft),
            Self::Closed => None,
        }
    }

    /// Mutable access to the draft for field updates. `None` when closed or
    /// while submitting, so updates are ignored in those states.
    pub fn edit(&mut self) -> Option<&mut Draft> {
        match self {
            Self::Open(OpenModal {
                draft,
                phase: ModalPhase::Editing | ModalPhase::Error(_),
            }) => Some(draft),
            _ => None,
        }
    }

    /// Validates the draft and enters `Submitting`.
    ///
    /// On a validation failure the modal moves to the error phase and no
    /// submission is produced, so nothing reaches the network.
    pub fn begin_submit<Tz: TimeZone>(&mut self, tz: &Tz) -> Result<EventSubmission, SubmitError> {
        let Self::Open(open) = self else {
            return Err(SubmitError::NotOpen);
        };

        if open.phase == ModalPhase::Submitting {
            return Err(SubmitError::AlreadySubmitting);
        }

        match open.draft.to_submission(tz) {
            Ok(submission) => {
                open.phase = ModalPhase::Submitting;
                Ok(submission)
            }
            Err(e) => {
                tracing::debug!(error = %e, "draft rejected");
                open.phase = ModalPhase::Error(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Applies the API result of a submission started by [`Self::begin_submit`].
    ///
    /// Success closes the modal and clears the draft. Failure keeps the draft
    /// and shows the server's message, or [`SUBMIT_FAILED_MESSAGE`].
    pub fn finish_submit(&mut self, result: Result<Option<Event>, ApiError>) -> SubmitOutcome {
        match result {
            Ok(created) => {
                tracing::debug!(id = ?created.as_ref().map(|e| e.id.as_str()), "event created");
                *self = Self::Closed;
                SubmitOutcome::Created(created)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to submit event");
                let message = e
                    .server_message()
                    .map_or_else(|| SUBMIT_FAILED_MESSAGE.to_string(), str::to_string);
                self.fail(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Leaves `Submitting` with an error shown inline. No effect when closed.
    pub fn fail(&mut self, message: impl Into<String>) {
        if let Self::Open(open) = self {
            open.phase = ModalPhase::Error(message.into());
        }
    }

    /// Validates, submits once and applies the result.
    pub async fn submit<A, Tz>(&mut self, api: &A, tz: &Tz) -> Result<SubmitOutcome, SubmitError>
    where
        A: EventApi + ?Sized,
        Tz: TimeZone,
    {
        let submission = self.begin_submit(tz)?;
        let result = api.create_event(submission).await;
        Ok(self.finish_submit(result))
    }
}
