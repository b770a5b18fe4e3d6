// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client integration tests with wiremock.

use chrono::{TimeZone, Utc};
use eagleboard_api::{ApiConfig, ApiError, BoardClient, EventSubmission, PosterFile};
use wiremock::matchers::{body_string_contains, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BoardClient {
    let config = ApiConfig::default().with_base_url(server.uri());
    BoardClient::new(config).expect("Failed to create client")
}

fn submission(poster: Option<PosterFile>) -> EventSubmission {
    EventSubmission {
        title: "Spring Concert".to_string(),
        description: "Live music on the quad".to_string(),
        event_date: Utc.with_ymd_and_hms(2025, 5, 1, 18, 30, 0).unwrap(),
        location: "Main Quad".to_string(),
        poster,
    }
}

const CREATED: &str = r#"{
    "id": "9f1c",
    "title": "Spring Concert",
    "description": "Live music on the quad",
    "event_date": "2025-05-01T18:30:00.000Z",
    "location": "Main Quad",
    "poster_url": null,
    "created_at": "2025-04-01T10:00:00"
}"#;

#[tokio::test]
async fn client_info() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"message":"EagleBoard","version":"1.0.0"}"#, "application/json"),
        )
        .mount(&mock_server)
        .await;

    let info = client_for(&mock_server).info().await.expect("Failed to get info");
    assert_eq!(info.message, "EagleBoard");
    assert_eq!(info.version.as_deref(), Some("1.0.0"));
}

#[tokio::test]
async fn client_list_events() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[
  {"id":"a","title":"Later","description":"d","event_date":"2025-05-01T00:00:00Z","location":"Gym","poster_url":"/uploads/a.png","created_at":"2025-01-01T00:00:00"},
  {"id":"b","title":"Sooner","description":"d","event_date":"2025-03-01T00:00:00Z","location":"Hall","poster_url":null,"created_at":"2025-01-01T00:00:00"}
]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let events = client.list_events().await.expect("Failed to list events");

    // server order is preserved, sorting belongs to the board
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id.as_str(), "a");
    assert_eq!(events[1].id.as_str(), "b");
    assert_eq!(
        client.poster_url(&events[0]).as_deref(),
        Some(format!("{}/uploads/a.png", mock_server.uri()).as_str())
    );
    assert_eq!(client.poster_url(&events[1]), None);
}

#[tokio::test]
async fn client_list_events_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&mock_server)
        .await;

    let events = client_for(&mock_server).list_events().await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn client_list_events_skips_event_without_date() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[
  {"id":"a","title":"Film Night","description":"d","event_date":"2025-05-01T00:00:00Z","location":"Gym","poster_url":null,"created_at":null},
  {"id":"b","title":null,"description":null,"event_date":null,"location":null,"poster_url":null,"created_at":"2025-01-01T00:00:00"}
]"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let events = client_for(&mock_server)
        .list_events()
        .await
        .expect("one bad entry should not fail the list");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id.as_str(), "a");
    assert_eq!(events[0].title, "Film Night");
}

#[tokio::test]
async fn client_list_events_invalid_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>", "text/html"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).list_events().await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn client_list_events_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(500).set_body_raw("boom", "text/plain"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).list_events().await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, None);
        }
        other => panic!("Expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn client_create_event_sends_multipart_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"title\""))
        .and(body_string_contains("Spring Concert"))
        .and(body_string_contains("name=\"description\""))
        .and(body_string_contains("name=\"location\""))
        .and(body_string_contains("name=\"event_date\""))
        .and(body_string_contains("2025-05-01T18:30:00.000Z"))
        .respond_with(ResponseTemplate::new(201).set_body_raw(CREATED, "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = client_for(&mock_server)
        .create_event(submission(None))
        .await
        .expect("Failed to create event");

    let created = created.expect("server echoed the event");
    assert_eq!(created.id.as_str(), "9f1c");
    assert_eq!(created.title, "Spring Concert");
}

#[tokio::test]
async fn client_create_event_with_poster() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events"))
        .and(body_string_contains("name=\"poster\"; filename=\"flyer.png\""))
        .and(body_string_contains("Content-Type: image/png"))
        .respond_with(ResponseTemplate::new(201).set_body_raw(CREATED, "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let poster = PosterFile::new("flyer.png", b"not really a png".to_vec());
    let result = client_for(&mock_server)
        .create_event(submission(Some(poster)))
        .await;
    assert!(result.is_ok(), "got {result:?}");
}

#[tokio::test]
async fn client_create_event_without_poster_sends_no_file_part() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events"))
        .and(body_string_contains("filename="))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(201).set_body_raw(CREATED, "application/json"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).create_event(submission(None)).await;
    assert!(result.is_ok(), "got {result:?}");
}

#[tokio::test]
async fn client_create_event_keeps_server_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_raw(r#"{"error":"Missing required fields"}"#, "application/json"),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .create_event(submission(None))
        .await
        .unwrap_err();
    assert_eq!(err.server_message(), Some("Missing required fields"));
}

#[tokio::test]
async fn client_create_event_accepts_unexpected_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("ok", "text/plain"))
        .mount(&mock_server)
        .await;

    let created = client_for(&mock_server)
        .create_event(submission(None))
        .await
        .expect("success status counts as created");
    assert_eq!(created, None);
}

#[tokio::test]
async fn client_connection_refused_is_http_error() {
    // nothing listens on the discard port
    let config = ApiConfig::default().with_base_url("http://127.0.0.1:9");
    let client = BoardClient::new(config).unwrap();

    let err = client.list_events().await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)), "got {err:?}");
    assert_eq!(err.server_message(), None);
}
