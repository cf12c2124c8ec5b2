//! Envelope and payload decoding tests exercising the public decoder
//! directly, without a network in the loop.

use telegram_bot_sdk::types::{
    ChatMember, InlineQueryResult, MaybeUnknown, Message, MessageContent, MessageOrTrue,
    MessageOrigin, ReplyMarkup, Update, UpdateKind,
};
use telegram_bot_sdk::{decode_response, BotError};

#[test]
fn success_envelope_yields_the_result_payload() {
    let raw = br#"{"ok":true,"result":{"message_id":55,"date":1700000000,"chat":{"id":42,"type":"private"},"text":"hello"}}"#;
    let message: Message = decode_response("sendMessage", raw).unwrap();
    assert_eq!(message.message_id, 55);
    assert!(matches!(message.content(), MessageContent::Text(_)));
}

#[test]
fn failure_envelope_yields_an_api_error() {
    let raw = br#"{"ok":false,"error_code":400,"description":"Bad Request: message text is empty"}"#;
    let err = decode_response::<Message>("sendMessage", raw).unwrap_err();
    match err {
        BotError::Api {
            error_code,
            description,
            ..
        } => {
            assert_eq!(error_code, 400);
            assert_eq!(description, "Bad Request: message text is empty");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn member_payload_decodes_through_the_envelope() {
    let raw = br#"{"ok":true,"result":{"status":"member","user":{"id":7,"is_bot":false,"first_name":"A"}}}"#;
    let member: ChatMember = decode_response("getChatMember", raw).unwrap();
    assert_eq!(member.status(), "member");
    assert_eq!(member.user().id, 7);
}

#[test]
fn forwarded_message_decodes_its_origin() {
    let raw = br#"{"ok":true,"result":{"message_id":9,"date":1700000000,"chat":{"id":1,"type":"private"},"forward_origin":{"type":"channel","date":1699999999,"chat":{"id":-100,"type":"channel"},"message_id":3}}}"#;
    let message: Message = decode_response("forwardMessage", raw).unwrap();
    match message.forward_origin {
        Some(MessageOrigin::Channel(origin)) => assert_eq!(origin.message_id, 3),
        other => panic!("expected channel origin, got {other:?}"),
    }
}

#[test]
fn edit_result_decodes_both_message_and_true() {
    let as_true: MessageOrTrue =
        decode_response("editMessageText", br#"{"ok":true,"result":true}"#).unwrap();
    assert!(matches!(as_true, MessageOrTrue::True(true)));

    let as_message: MessageOrTrue = decode_response(
        "editMessageText",
        br#"{"ok":true,"result":{"message_id":5,"date":1700000000,"chat":{"id":1,"type":"private"}}}"#,
    )
    .unwrap();
    assert!(matches!(as_message, MessageOrTrue::Message(_)));
}

#[test]
fn update_batch_classifies_each_event() {
    let raw = br#"{"ok":true,"result":[
        {"update_id":1,"callback_query":{"id":"cq1","from":{"id":7,"is_bot":false,"first_name":"A"},"chat_instance":"ci"}},
        {"update_id":2}
    ]}"#;
    let updates: Vec<Update> = decode_response("getUpdates", raw).unwrap();
    assert!(matches!(updates[0].kind(), UpdateKind::CallbackQuery(_)));
    assert!(matches!(updates[1].kind(), UpdateKind::Empty));
}

#[test]
fn update_batch_survives_a_reaction_kind_newer_than_the_sdk() {
    let raw = br#"{"ok":true,"result":[
        {"update_id":1,"message_reaction":{
            "chat":{"id":42,"type":"private"},
            "message_id":5,
            "date":1700000000,
            "old_reaction":[],
            "new_reaction":[{"type":"paid"}]
        }},
        {"update_id":2,"message":{"message_id":7,"date":1700000000,"chat":{"id":42,"type":"private"},"text":"hi"}}
    ]}"#;

    let updates: Vec<Update> = decode_response("getUpdates", raw).unwrap();
    assert_eq!(updates.len(), 2);

    match updates[0].kind() {
        UpdateKind::MessageReaction(reaction) => {
            assert!(reaction.new_reaction[0].is_unknown());
        }
        other => panic!("expected a reaction update, got {other:?}"),
    }
    // the unrelated update in the same batch stays fully typed
    assert!(matches!(updates[1].kind(), UpdateKind::Message(_)));
}

#[test]
fn inline_result_round_trips_fresh_and_cached_shapes() {
    let fresh = serde_json::json!({
        "type": "photo",
        "id": "p1",
        "photo_url": "https://example.org/p.jpg",
        "thumbnail_url": "https://example.org/t.jpg"
    });
    let cached = serde_json::json!({
        "type": "photo",
        "id": "p2",
        "photo_file_id": "AgAC"
    });

    let fresh: InlineQueryResult = serde_json::from_value(fresh).unwrap();
    assert!(matches!(fresh, InlineQueryResult::Photo(_)));
    let cached: InlineQueryResult = serde_json::from_value(cached).unwrap();
    assert!(matches!(cached, InlineQueryResult::CachedPhoto(_)));
}

#[test]
fn lenient_wrapper_preserves_unrecognized_variants() {
    let raw = serde_json::json!({"status":"super-admin","user":{"id":1,"is_bot":false,"first_name":"A"}});

    let strict: Result<ChatMember, _> = serde_json::from_value(raw.clone());
    assert!(strict.is_err());

    let lenient: MaybeUnknown<ChatMember> = serde_json::from_value(raw.clone()).unwrap();
    assert!(lenient.is_unknown());
    // the lenient wrapper re-emits the original payload untouched
    assert_eq!(serde_json::to_value(&lenient).unwrap(), raw);
}

#[test]
fn reply_markup_serializes_each_keyboard_shape() {
    let remove = ReplyMarkup::from(telegram_bot_sdk::types::ReplyKeyboardRemove::default());
    let value = serde_json::to_value(&remove).unwrap();
    assert_eq!(value["remove_keyboard"], true);

    let force = ReplyMarkup::from(telegram_bot_sdk::types::ForceReply::default());
    let value = serde_json::to_value(&force).unwrap();
    assert_eq!(value["force_reply"], true);
}
