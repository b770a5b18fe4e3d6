// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Utc;
use eagleboard_core::{ApiError, Board, DraftRetention};

use crate::common::{FakeApi, fill_draft, test_config};

#[tokio::test]
async fn dismissed_draft_is_discarded_by_default() {
    let mut board = Board::new(&test_config(DraftRetention::Discard));
    board.open_modal();
    fill_draft(board.modal_mut().edit().unwrap(), "Film Night");

    board.close_modal();
    board.open_modal();

    assert!(board.modal().draft().unwrap().is_blank());
}

#[tokio::test]
async fn dismissed_draft_is_restored_when_kept() {
    let mut board = Board::new(&test_config(DraftRetention::Keep));
    board.open_modal();
    fill_draft(board.modal_mut().edit().unwrap(), "Film Night");

    board.close_modal();
    assert!(!board.modal().is_open());
    board.open_modal();

    assert_eq!(board.modal().draft().unwrap().title, "Film Night");
}

#[tokio::test]
async fn kept_draft_is_dropped_after_successful_submit() {
    let api = FakeApi::default();
    let mut board = Board::new(&test_config(DraftRetention::Keep));
    board.open_modal();
    fill_draft(board.modal_mut().edit().unwrap(), "Film Night");

    board.submit_in(&api, &Utc).await.unwrap();
    board.open_modal();

    assert!(board.modal().draft().unwrap().is_blank());
}

#[tokio::test]
async fn failed_submit_then_dismiss_keeps_draft_when_kept() {
    let api = FakeApi::default();
    api.fail_next_create(ApiError::InvalidResponse("timeout".to_string()));
    let mut board = Board::new(&test_config(DraftRetention::Keep));
    board.open_modal();
    fill_draft(board.modal_mut().edit().unwrap(), "Film Night");

    board.submit_in(&api, &Utc).await.unwrap();
    board.close_modal();
    board.open_modal();

    let modal = board.modal();
    assert_eq!(modal.draft().unwrap().title, "Film Night");
    assert_eq!(modal.error(), None);
}
