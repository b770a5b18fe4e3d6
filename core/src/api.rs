// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use eagleboard_api::{ApiError, BoardClient, Event, EventSubmission};

/// The two backend calls the board depends on.
#[async_trait]
pub trait EventApi: Send + Sync {
    /// Fetches the whole event collection, in server order.
    async fn list_events(&self) -> Result<Vec<Event>, ApiError>;

    /// Submits one event. `Ok(None)` means the server accepted it without
    /// echoing the created event back.
    async fn create_event(&self, submission: EventSubmission) -> Result<Option<Event>, ApiError>;
}

#[async_trait]
impl EventApi for BoardClient {
    async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        BoardClient::list_events(self).await
    }

    async fn create_event(&self, submission: EventSubmission) -> Result<Option<Event>, ApiError> {
        BoardClient::create_event(self, submission).await
    }
}
