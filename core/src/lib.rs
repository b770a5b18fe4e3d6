// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client-side state of the EagleBoard bulletin board: the board view model
//! and the add-event modal.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_lifetimes,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod api;
mod board;
mod config;
mod datetime;
mod draft;
mod modal;

pub use crate::api::EventApi;
pub use crate::board::{Board, EMPTY_STATE_MESSAGE, EventCard, LoadStatus};
pub use crate::config::{APP_NAME, BoardConfig, Config, DraftRetention};
pub use crate::datetime::{
    DEFAULT_DATE_FORMAT, format_in, is_valid_format, local_to_utc, parse_local_datetime,
};
pub use crate::draft::{Draft, DraftError, DraftField};
pub use crate::modal::{
    EventModal, ModalPhase, OpenModal, SUBMIT_FAILED_MESSAGE, SubmitError, SubmitOutcome,
};

pub use eagleboard_api::{ApiError, Event, EventId, EventSubmission, PosterFile};
