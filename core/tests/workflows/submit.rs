// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{FixedOffset, Utc};
use eagleboard_core::{
    ApiError, Board, DraftError, DraftRetention, EventModal, PosterFile, SUBMIT_FAILED_MESSAGE, SubmitError,
    SubmitOutcome,
};

use crate::common::{FakeApi, fill_draft, test_config, test_event};

fn open_board() -> Board {
    let mut board = Board::new(&test_config(DraftRetention::Discard));
    board.open_modal();
    board
}

#[tokio::test]
async fn submit_success_refreshes_once_and_closes() {
    let api = FakeApi::with_events(vec![test_event("old", "2025-01-01T00:00:00Z")]);
    let mut board = open_board();
    fill_draft(board.modal_mut().edit().unwrap(), "Career Fair");

    let outcome = board.submit_in(&api, &Utc).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Created(Some(_))));
    assert_eq!(api.create_calls(), 1);
    assert_eq!(api.list_calls(), 1);
    assert!(!board.modal().is_open());

    let titles: Vec<_> = board.events().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Event old", "Career Fair"]);

    board.open_modal();
    assert!(board.modal().draft().unwrap().is_blank());
}

#[tokio::test]
async fn submit_with_any_missing_field_never_calls_api() {
    for missing in ["title", "description", "event_date", "location"] {
        let api = FakeApi::default();
        let mut board = open_board();
        let draft = board.modal_mut().edit().unwrap();
        fill_draft(draft, "Career Fair");
        match missing {
            "title" => draft.set_title(""),
            "description" => draft.set_description("  "),
            "event_date" => draft.set_event_date(""),
            _ => draft.set_location("\n"),
        }

        let err = board.submit_in(&api, &Utc).await.unwrap_err();

        assert!(
            matches!(err, SubmitError::Invalid(DraftError::MissingFields(_))),
            "{missing}: {err:?}"
        );
        assert_eq!(api.create_calls(), 0, "{missing}");
        assert_eq!(api.list_calls(), 0, "{missing}");
        assert_eq!(
            board.modal().error(),
            Some("All fields except poster are required.")
        );
        assert!(board.modal().is_open());
    }
}

#[tokio::test]
async fn submit_unparseable_date_never_calls_api() {
    let api = FakeApi::default();
    let mut board = open_board();
    let draft = board.modal_mut().edit().unwrap();
    fill_draft(draft, "Career Fair");
    draft.set_event_date("someday");

    let err = board.submit_in(&api, &Utc).await.unwrap_err();

    assert!(matches!(err, SubmitError::Invalid(DraftError::InvalidDate(_))));
    assert_eq!(api.create_calls(), 0);
    assert_eq!(board.modal().error(), Some("Invalid date and time: someday"));
}

#[tokio::test]
async fn submit_failure_keeps_modal_open_with_server_message() {
    let api = FakeApi::default();
    api.fail_next_create(ApiError::Status {
        status: eagleboard_api::StatusCode::BAD_REQUEST,
        message: Some("Missing required fields".to_string()),
    });
    let mut board = open_board();
    fill_draft(board.modal_mut().edit().unwrap(), "Career Fair");

    let outcome = board.submit_in(&api, &Utc).await.unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Failed("Missing required fields".to_string())
    );
    assert!(board.modal().is_open());
    assert!(!board.modal().is_submitting());
    assert_eq!(board.modal().error(), Some("Missing required fields"));
    assert_eq!(board.modal().draft().unwrap().title, "Career Fair");
    assert_eq!(api.list_calls(), 0);

    // resubmission goes through
    let outcome = board.submit_in(&api, &Utc).await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Created(_)));
    assert_eq!(api.create_calls(), 2);
    assert_eq!(api.list_calls(), 1);
}

#[tokio::test]
async fn submit_failure_without_server_message_uses_generic_text() {
    let api = FakeApi::default();
    api.fail_next_create(ApiError::Status {
        status: eagleboard_api::StatusCode::INTERNAL_SERVER_ERROR,
        message: None,
    });
    let mut board = open_board();
    fill_draft(board.modal_mut().edit().unwrap(), "Career Fair");

    board.submit_in(&api, &Utc).await.unwrap();

    assert_eq!(board.modal().error(), Some(SUBMIT_FAILED_MESSAGE));
}

#[tokio::test]
async fn submit_sends_utc_instant_and_poster() {
    let api = FakeApi::default();
    let mut board = open_board();
    let draft = board.modal_mut().edit().unwrap();
    fill_draft(draft, "Career Fair");
    draft.set_poster(Some(PosterFile::new("fair.jpg", vec![0xff, 0xd8, 0xff])));

    let tz = FixedOffset::west_opt(4 * 3600).unwrap();
    board.submit_in(&api, &tz).await.unwrap();

    let sent = api.submissions();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        eagleboard_api::format_timestamp(&sent[0].event_date),
        "2025-04-15T21:00:00.000Z"
    );
    let poster = sent[0].poster.as_ref().unwrap();
    assert_eq!(poster.file_name, "fair.jpg");
    assert_eq!(poster.content_type, "image/jpeg");

    let cards = board.cards_in(&Utc);
    assert_eq!(
        cards[0].poster_url.as_deref(),
        Some("http://board.test/uploads/0_fair.jpg")
    );
}

#[tokio::test]
async fn submit_when_closed_is_rejected() {
    let api = FakeApi::default();
    let mut board = Board::new(&test_config(DraftRetention::Discard));

    let err = board.submit_in(&api, &Utc).await.unwrap_err();

    assert_eq!(err, SubmitError::NotOpen);
    assert_eq!(api.create_calls(), 0);
}

#[tokio::test]
async fn split_submit_steps_match_one_shot_submit() {
    let api = FakeApi::default();
    let mut board = open_board();
    fill_draft(board.modal_mut().edit().unwrap(), "Career Fair");

    let submission = board.begin_submit_in(&Utc).unwrap();
    assert!(board.modal().is_submitting());
    assert!(board.modal_mut().edit().is_none());

    let result = eagleboard_core::EventApi::create_event(&api, submission).await;
    let outcome = board.finish_submit(result);
    assert!(matches!(outcome, SubmitOutcome::Created(_)));
    board.load(&api).await;

    assert!(!board.modal().is_open());
    assert_eq!(board.events().len(), 1);
}

#[tokio::test]
async fn modal_submit_posts_once_and_leaves_refresh_to_the_board() {
    let api = FakeApi::default();
    let mut modal = EventModal::default();
    modal.open();
    fill_draft(modal.edit().unwrap(), "Poetry Slam");

    let outcome = modal.submit(&api, &Utc).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Created(Some(_))));
    assert_eq!(api.create_calls(), 1);
    assert_eq!(api.list_calls(), 0);
    assert!(!modal.is_open());

    api.fail_next_create(ApiError::InvalidResponse("reset".to_string()));
    modal.open();
    fill_draft(modal.edit().unwrap(), "Poetry Slam");
    let outcome = modal.submit(&api, &Utc).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Failed(SUBMIT_FAILED_MESSAGE.to_string()));
    assert_eq!(modal.error(), Some(SUBMIT_FAILED_MESSAGE));
}
