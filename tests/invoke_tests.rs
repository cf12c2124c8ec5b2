//! End-to-end invocation tests using WireMock.
//!
//! These tests mock Bot API responses to verify request construction and
//! response decoding without making real network calls.

use telegram_bot_sdk::api::chats::GetChatMemberRequest;
use telegram_bot_sdk::api::messages::SendMessageRequest;
use telegram_bot_sdk::api::updates::GetUpdatesRequest;
use telegram_bot_sdk::{Bot, BotError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a test bot pointing at the mock server
fn test_bot(mock_server: &MockServer) -> Bot {
    let client = telegram_bot_sdk::BotClient::builder()
        .token("TEST_TOKEN")
        .api_url(mock_server.uri())
        .file_url(format!("{}/file", mock_server.uri()))
        .build()
        .unwrap();
    Bot::with_client(client)
}

/// Send a text message and unwrap the envelope down to the Message
#[tokio::test]
async fn send_message_unwraps_envelope_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/sendMessage"))
        .and(header("content-type", "application/json; charset=UTF-8"))
        .and(body_json(serde_json::json!({"chat_id": 42, "text": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": {
                "message_id": 55,
                "date": 1700000000,
                "chat": {"id": 42, "type": "private"},
                "text": "hello"
            }
        })))
        .mount(&mock_server)
        .await;

    let bot = test_bot(&mock_server);
    let sent = bot
        .send_message(SendMessageRequest::new(42, "hello"))
        .await
        .unwrap();

    assert_eq!(sent.message_id, 55);
    assert_eq!(sent.text.as_deref(), Some("hello"));
}

/// An ok:false envelope surfaces as an Api error with the server's fields
/// verbatim, regardless of the HTTP status code
#[tokio::test]
async fn rejected_call_preserves_error_code_and_description() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/sendMessage"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "ok": false,
            "error_code": 403,
            "description": "Forbidden: bot was blocked by the user"
        })))
        .mount(&mock_server)
        .await;

    let bot = test_bot(&mock_server);
    let err = bot
        .send_message(SendMessageRequest::new(42, "hello"))
        .await
        .unwrap_err();

    match err {
        BotError::Api {
            method,
            error_code,
            description,
            parameters,
        } => {
            assert_eq!(method, "sendMessage");
            assert_eq!(error_code, 403);
            assert_eq!(description, "Forbidden: bot was blocked by the user");
            assert!(parameters.is_none());
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

/// Rate-limit responses expose retry_after through the error helper
#[tokio::test]
async fn rate_limited_call_exposes_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/sendMessage"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "ok": false,
            "error_code": 429,
            "description": "Too Many Requests: retry after 17",
            "parameters": {"retry_after": 17}
        })))
        .mount(&mock_server)
        .await;

    let bot = test_bot(&mock_server);
    let err = bot
        .send_message(SendMessageRequest::new(42, "hello"))
        .await
        .unwrap_err();

    assert_eq!(err.retry_after(), Some(17));
}

/// A result payload with an unrecognized discriminator is a Schema error
/// that names the offending tag and keeps the raw body
#[tokio::test]
async fn unknown_member_status_is_a_schema_error() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "ok": true,
        "result": {
            "status": "super-admin",
            "user": {"id": 7, "is_bot": false, "first_name": "A"}
        }
    });
    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/getChatMember"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let bot = test_bot(&mock_server);
    let err = bot
        .get_chat_member(GetChatMemberRequest {
            chat_id: (-100).into(),
            user_id: 7,
        })
        .await
        .unwrap_err();

    match &err {
        BotError::Schema { method, message, .. } => {
            assert_eq!(method, "getChatMember");
            assert!(message.contains("super-admin"), "message: {message}");
        }
        other => panic!("expected Schema error, got {other:?}"),
    }
    assert!(err.raw_response().is_some());
}

/// A non-JSON body (proxy error page) is a MalformedResponse that keeps the
/// raw bytes for debugging
#[tokio::test]
async fn html_error_page_is_malformed_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/getUpdates"))
        .respond_with(
            ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
        )
        .mount(&mock_server)
        .await;

    let bot = test_bot(&mock_server);
    let err = bot.get_updates(GetUpdatesRequest::default()).await.unwrap_err();

    match &err {
        BotError::MalformedResponse { method, raw, .. } => {
            assert_eq!(method, "getUpdates");
            assert_eq!(raw.as_slice(), b"<html>Bad Gateway</html>");
        }
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

/// getUpdates decodes a batch and classifies each update
#[tokio::test]
async fn get_updates_decodes_a_batch() {
    use telegram_bot_sdk::types::UpdateKind;

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/getUpdates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": [
                {
                    "update_id": 1001,
                    "message": {
                        "message_id": 1,
                        "date": 1700000000,
                        "chat": {"id": 42, "type": "private"},
                        "text": "hi"
                    }
                },
                {
                    "update_id": 1002,
                    "poll": {
                        "id": "p1",
                        "question": "?",
                        "options": [],
                        "total_voter_count": 0,
                        "is_closed": false,
                        "is_anonymous": true,
                        "type": "regular",
                        "allows_multiple_answers": false
                    }
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let bot = test_bot(&mock_server);
    let updates = bot.get_updates(GetUpdatesRequest::default()).await.unwrap();

    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].update_id, 1001);
    assert!(matches!(updates[0].kind(), UpdateKind::Message(_)));
    assert!(matches!(updates[1].kind(), UpdateKind::Poll(_)));
}

/// getMe works through the facade with an empty request body
#[tokio::test]
async fn get_me_sends_empty_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/getMe"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": {
                "id": 1,
                "is_bot": true,
                "first_name": "TestBot",
                "username": "test_bot"
            }
        })))
        .mount(&mock_server)
        .await;

    let bot = test_bot(&mock_server);
    let me = bot.get_me().await.unwrap();
    assert!(me.is_bot);
    assert_eq!(me.username.as_deref(), Some("test_bot"));
}

/// The untyped escape hatch reaches methods outside the catalogue
#[tokio::test]
async fn call_by_name_reaches_uncatalogued_methods() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/deleteStickerFromSet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": true
        })))
        .mount(&mock_server)
        .await;

    let bot = test_bot(&mock_server);
    let ok: bool = bot
        .client()
        .call("deleteStickerFromSet", &serde_json::json!({"sticker": "s1"}))
        .await
        .unwrap();
    assert!(ok);
}

/// invoke_raw hands back the untouched response bytes on success, so
/// callers can inspect envelope fields the typed model does not cover
#[tokio::test]
async fn invoke_raw_returns_the_raw_body_on_success() {
    let mock_server = MockServer::start().await;

    let body = r#"{"ok":true,"result":true,"description":"Webhook was set"}"#;
    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/deleteWebhook"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let bot = test_bot(&mock_server);
    let raw = bot
        .client()
        .invoke_raw("deleteWebhook", &serde_json::json!({}))
        .await
        .unwrap();

    assert_eq!(raw, body.as_bytes());
    // the same bytes still decode through the envelope
    let ok: bool = telegram_bot_sdk::decode_response("deleteWebhook", &raw).unwrap();
    assert!(ok);
}

/// The client is shareable and calls can run concurrently
#[tokio::test]
async fn concurrent_invocations_share_one_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/botTEST_TOKEN/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": {
                "message_id": 1,
                "date": 1700000000,
                "chat": {"id": 42, "type": "private"}
            }
        })))
        .expect(4)
        .mount(&mock_server)
        .await;

    let bot = test_bot(&mock_server);
    let calls = (0..4).map(|i| {
        let bot = bot.clone();
        async move {
            bot.send_message(SendMessageRequest::new(42, format!("msg {i}")))
                .await
        }
    });

    let results = futures::future::join_all(calls).await;
    assert!(results.into_iter().all(|r| r.is_ok()));
}
