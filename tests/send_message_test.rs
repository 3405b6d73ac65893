use mockito::Matcher;
use serde_json::json;

use pushwoosh_client::{Message, PushError, PushwooshClient, Session};

fn test_session() -> Session {
    Session::new("TEST_TOKEN", "APP-CODE").unwrap()
}

fn client_for(server: &mockito::ServerGuard) -> PushwooshClient {
    let endpoint = format!("{}/json/1.3/createMessage", server.url());
    PushwooshClient::with_endpoint(test_session(), endpoint).unwrap()
}

#[test]
fn send_posts_expected_wire_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/json/1.3/createMessage")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "request": {
                "application": "APP-CODE",
                "auth": "TEST_TOKEN",
                "notifications": [{
                    "send_date": "now",
                    "ignore_user_timezone": true,
                    "content": "Hello World",
                    "devices": ["D1", "D2"]
                }]
            }
        })))
        .with_status(200)
        .with_body(r#"{"status_code":200,"status_message":"OK"}"#)
        .create();

    let client = client_for(&server);
    let response = client
        .send(&Message::new(
            "Hello World",
            vec!["D1".to_string(), "D2".to_string()],
        ))
        .unwrap();

    assert_eq!(response["status_code"], 200);
    mock.assert();
}

#[test]
fn send_returns_parsed_response_unmodified() {
    // Application-level error payloads pass through as ordinary data
    let canned = json!({
        "status_code": 210,
        "status_message": "Argument error",
        "response": {
            "Messages": [],
            "nested": { "flag": true, "count": 3.5, "label": "x" }
        }
    });

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/json/1.3/createMessage")
        .with_status(200)
        .with_body(canned.to_string())
        .create();

    let client = client_for(&server);
    let response = client
        .send(&Message::new("Hello", vec!["D1".to_string()]))
        .unwrap();

    assert_eq!(response, canned);
    mock.assert();
}

#[test]
fn invalid_arguments_never_hit_the_network() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/json/1.3/createMessage")
        .expect(0)
        .create();

    let client = client_for(&server);

    let empty_devices = client.send(&Message::new("Hello", vec![]));
    assert!(matches!(
        empty_devices,
        Err(PushError::InvalidArgument { ref argument, .. }) if argument == "devices"
    ));

    let empty_message = client.send(&Message::new("", vec!["D1".to_string()]));
    assert!(matches!(
        empty_message,
        Err(PushError::InvalidArgument { ref argument, .. }) if argument == "content"
    ));

    let blank_token = client.send(&Message::new("Hello", vec!["D1".to_string(), String::new()]));
    assert!(matches!(
        blank_token,
        Err(PushError::InvalidArgument { .. })
    ));

    mock.assert();
}

#[test]
fn http_error_status_surfaces_as_transport_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/json/1.3/createMessage")
        .with_status(500)
        .with_body("internal error")
        .create();

    let client = client_for(&server);
    let err = client
        .send(&Message::new("Hello", vec!["D1".to_string()]))
        .unwrap_err();

    assert!(matches!(err, PushError::Transport { .. }));
    mock.assert();
}

#[test]
fn connection_failure_surfaces_as_transport_error() {
    // Discard port; nothing is listening here
    let client = PushwooshClient::with_endpoint(
        test_session(),
        "http://127.0.0.1:9/json/1.3/createMessage",
    )
    .unwrap();

    let err = client
        .send(&Message::new("Hello", vec!["D1".to_string()]))
        .unwrap_err();

    match err {
        PushError::Transport { source, .. } => assert!(source.is_some()),
        other => panic!("Expected transport error, got {other:?}"),
    }
}

#[test]
fn non_json_body_surfaces_as_decode_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/json/1.3/createMessage")
        .with_status(200)
        .with_body("not json")
        .create();

    let client = client_for(&server);
    let err = client
        .send(&Message::new("Hello", vec!["D1".to_string()]))
        .unwrap_err();

    match err {
        PushError::Decode { source, .. } => assert!(source.is_some()),
        other => panic!("Expected decode error, got {other:?}"),
    }
    mock.assert();
}

#[test]
fn send_message_convenience_matches_send() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/json/1.3/createMessage")
        .match_body(Matcher::PartialJson(json!({
            "request": { "application": "APP-CODE" }
        })))
        .with_status(200)
        .with_body("{}")
        .create();

    let client = client_for(&server);
    let response = client
        .send_message("Hello", &["D1".to_string()])
        .unwrap();

    assert_eq!(response, json!({}));
    mock.assert();
}
