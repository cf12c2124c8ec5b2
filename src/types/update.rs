//! The incoming `Update` object and its derived event view.

use serde::{Deserialize, Serialize};

use super::chat::{ChatJoinRequest, ChatMemberUpdated};
use super::inline::{ChosenInlineResult, InlineQuery};
use super::media::{Poll, PollAnswer};
use super::message::Message;
use super::reaction::{MessageReactionCountUpdated, MessageReactionUpdated};
use super::user::User;

/// An incoming callback query from an inline keyboard button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    pub chat_instance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_short_name: Option<String>,
}

/// An incoming update.
///
/// At most one of the optional event fields is populated in well-formed
/// server data; [`Update::kind`] gives a tagged view over them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_reaction: Option<MessageReactionUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_reaction_count: Option<MessageReactionCountUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<InlineQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_inline_result: Option<ChosenInlineResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_answer: Option<PollAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_chat_member: Option<ChatMemberUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_member: Option<ChatMemberUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_join_request: Option<ChatJoinRequest>,
}

/// Tagged view over the mutually exclusive event fields of an [`Update`].
///
/// Produced by [`Update::kind`]; variants borrow from the update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateKind<'a> {
    Message(&'a Message),
    EditedMessage(&'a Message),
    ChannelPost(&'a Message),
    EditedChannelPost(&'a Message),
    MessageReaction(&'a MessageReactionUpdated),
    MessageReactionCount(&'a MessageReactionCountUpdated),
    InlineQuery(&'a InlineQuery),
    ChosenInlineResult(&'a ChosenInlineResult),
    CallbackQuery(&'a CallbackQuery),
    Poll(&'a Poll),
    PollAnswer(&'a PollAnswer),
    MyChatMember(&'a ChatMemberUpdated),
    ChatMember(&'a ChatMemberUpdated),
    ChatJoinRequest(&'a ChatJoinRequest),
    /// No known event field is populated. Updates of kinds this SDK does
    /// not model yet land here rather than failing.
    Empty,
}

impl Update {
    /// Which event this update carries.
    ///
    /// Well-formed server data populates exactly one event field. Should
    /// more than one ever be populated, the first in declared order wins;
    /// the order is the field order of [`Update`], which follows the Bot
    /// API reference.
    pub fn kind(&self) -> UpdateKind<'_> {
        if let Some(message) = &self.message {
            return UpdateKind::Message(message);
        }
        if let Some(message) = &self.edited_message {
            return UpdateKind::EditedMessage(message);
        }
        if let Some(post) = &self.channel_post {
            return UpdateKind::ChannelPost(post);
        }
        if let Some(post) = &self.edited_channel_post {
            return UpdateKind::EditedChannelPost(post);
        }
        if let Some(reaction) = &self.message_reaction {
            return UpdateKind::MessageReaction(reaction);
        }
        if let Some(count) = &self.message_reaction_count {
            return UpdateKind::MessageReactionCount(count);
        }
        if let Some(query) = &self.inline_query {
            return UpdateKind::InlineQuery(query);
        }
        if let Some(result) = &self.chosen_inline_result {
            return UpdateKind::ChosenInlineResult(result);
        }
        if let Some(query) = &self.callback_query {
            return UpdateKind::CallbackQuery(query);
        }
        if let Some(poll) = &self.poll {
            return UpdateKind::Poll(poll);
        }
        if let Some(answer) = &self.poll_answer {
            return UpdateKind::PollAnswer(answer);
        }
        if let Some(member) = &self.my_chat_member {
            return UpdateKind::MyChatMember(member);
        }
        if let Some(member) = &self.chat_member {
            return UpdateKind::ChatMember(member);
        }
        if let Some(request) = &self.chat_join_request {
            return UpdateKind::ChatJoinRequest(request);
        }
        UpdateKind::Empty
    }
}

/// Current status of a webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookInfo {
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_synchronization_error_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message_value() -> serde_json::Value {
        json!({
            "message_id": 10,
            "date": 1_700_000_000,
            "chat": {"id": 1, "type": "private"},
            "text": "hello"
        })
    }

    #[test]
    fn kind_is_empty_when_no_event_field_is_populated() {
        let update: Update = serde_json::from_value(json!({"update_id": 1})).unwrap();
        assert_eq!(update.kind(), UpdateKind::Empty);
    }

    #[test]
    fn kind_returns_the_single_populated_event() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 2, "message": message_value()
        }))
        .unwrap();
        match update.kind() {
            UpdateKind::Message(message) => assert_eq!(message.text.as_deref(), Some("hello")),
            other => panic!("wrong kind: {other:?}"),
        }
    }

    #[test]
    fn first_declared_field_wins_when_two_are_populated() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 3,
            "edited_message": message_value(),
            "poll": {
                "id": "p", "question": "?", "options": [],
                "total_voter_count": 0, "is_closed": false, "is_anonymous": true,
                "type": "regular", "allows_multiple_answers": false
            }
        }))
        .unwrap();
        assert!(matches!(update.kind(), UpdateKind::EditedMessage(_)));
    }

    #[test]
    fn unmodelled_update_payloads_are_ignored_not_fatal() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 4,
            "shipping_query": {"id": "s", "invoice_payload": "x"}
        }))
        .unwrap();
        assert_eq!(update.kind(), UpdateKind::Empty);
    }
}
