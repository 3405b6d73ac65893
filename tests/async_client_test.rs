use serde_json::json;

use pushwoosh_client::{AsyncPushwooshClient, Message, PushError, Session};

fn test_session() -> Session {
    Session::new("TEST_TOKEN", "APP-CODE").unwrap()
}

#[tokio::test]
async fn async_send_round_trips_response() {
    let mut server = mockito::Server::new_async().await;
    let canned = json!({
        "status_code": 200,
        "status_message": "OK",
        "response": { "Messages": ["MESSAGE-CODE"] }
    });
    let mock = server
        .mock("POST", "/json/1.3/createMessage")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(canned.to_string())
        .create_async()
        .await;

    let endpoint = format!("{}/json/1.3/createMessage", server.url());
    let client = AsyncPushwooshClient::with_endpoint(test_session(), endpoint).unwrap();

    let response = client
        .send(&Message::new("Hello World", vec!["D1".to_string()]))
        .await
        .unwrap();

    assert_eq!(response, canned);
    mock.assert_async().await;
}

#[tokio::test]
async fn async_invalid_message_fails_before_any_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/json/1.3/createMessage")
        .expect(0)
        .create_async()
        .await;

    let endpoint = format!("{}/json/1.3/createMessage", server.url());
    let client = AsyncPushwooshClient::with_endpoint(test_session(), endpoint).unwrap();

    let result = client.send(&Message::new("Hello", vec![])).await;
    assert!(matches!(
        result,
        Err(PushError::InvalidArgument { ref argument, .. }) if argument == "devices"
    ));

    mock.assert_async().await;
}

#[tokio::test]
async fn async_non_json_body_surfaces_as_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/json/1.3/createMessage")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let endpoint = format!("{}/json/1.3/createMessage", server.url());
    let client = AsyncPushwooshClient::with_endpoint(test_session(), endpoint).unwrap();

    let err = client
        .send(&Message::new("Hello", vec!["D1".to_string()]))
        .await
        .unwrap_err();

    assert!(matches!(err, PushError::Decode { .. }));
    mock.assert_async().await;
}
