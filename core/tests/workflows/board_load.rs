// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Utc;
use eagleboard_core::{Board, DraftRetention, EMPTY_STATE_MESSAGE, LoadStatus};

use crate::common::{FakeApi, test_config, test_event};

#[tokio::test]
async fn board_renders_events_in_date_order() {
    let api = FakeApi::with_events(vec![
        test_event("may", "2025-05-01T00:00:00Z"),
        test_event("march", "2025-03-01T00:00:00Z"),
    ]);
    let mut board = Board::new(&test_config(DraftRetention::Discard));

    board.load(&api).await;

    let cards = board.cards_in(&Utc);
    let whens: Vec<_> = cards.iter().map(|c| c.when.as_str()).collect();
    assert_eq!(whens, vec!["2025-03-01 00:00", "2025-05-01 00:00"]);
    assert_eq!(api.list_calls(), 1);
}

#[tokio::test]
async fn board_order_is_non_decreasing_for_any_server_order() {
    let dates = [
        "2025-09-01T12:00:00Z",
        "2024-12-31T23:59:59Z",
        "2025-09-01T12:00:00Z",
        "2025-01-15T08:30:00+02:00",
        "2025-01-15T06:30:00",
        "2026-02-28T00:00:00Z",
    ];
    let events = dates
        .iter()
        .enumerate()
        .map(|(i, d)| test_event(&i.to_string(), d))
        .collect();
    let api = FakeApi::with_events(events);
    let mut board = Board::new(&test_config(DraftRetention::Discard));

    board.load(&api).await;

    let sorted = board
        .events()
        .windows(2)
        .all(|w| w[0].event_date <= w[1].event_date);
    assert!(sorted, "events out of order: {:?}", board.events());
    assert_eq!(board.events().len(), dates.len());
}

#[tokio::test]
async fn board_empty_list_shows_empty_state() {
    let api = FakeApi::default();
    let mut board = Board::new(&test_config(DraftRetention::Discard));

    board.load(&api).await;

    assert!(board.is_empty());
    assert!(board.cards().is_empty());
    assert_eq!(board.status(), &LoadStatus::Loaded);
    assert!(!EMPTY_STATE_MESSAGE.is_empty());
}

#[tokio::test]
async fn board_failed_fetch_exposes_error_and_keeps_list() {
    let api = FakeApi::with_events(vec![test_event("a", "2025-03-01T00:00:00Z")]);
    let mut board = Board::new(&test_config(DraftRetention::Discard));
    board.load(&api).await;

    api.set_list_failing(true);
    board.load(&api).await;

    assert_eq!(board.events().len(), 1);
    assert!(board.load_error().is_some());
    assert!(matches!(board.status(), LoadStatus::Failed(_)));

    api.set_list_failing(false);
    board.load(&api).await;
    assert_eq!(board.load_error(), None);
}

#[tokio::test]
async fn board_first_fetch_failure_leaves_board_empty() {
    let api = FakeApi::default();
    api.set_list_failing(true);
    let mut board = Board::new(&test_config(DraftRetention::Discard));

    board.load(&api).await;

    assert!(board.is_empty());
    assert_eq!(
        board.load_error(),
        Some("Invalid server response: connection reset")
    );
}

#[tokio::test]
async fn board_cards_resolve_poster_urls_against_base() {
    let mut event = test_event("a", "2025-03-01T00:00:00Z");
    event.poster_url = Some("/uploads/abc_flyer.png".to_string());
    let api = FakeApi::with_events(vec![event]);
    let mut board = Board::new(&test_config(DraftRetention::Discard));

    board.load(&api).await;

    let cards = board.cards_in(&Utc);
    assert_eq!(
        cards[0].poster_url.as_deref(),
        Some("http://board.test/uploads/abc_flyer.png")
    );
}
