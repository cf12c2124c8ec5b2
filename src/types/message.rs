//! Message objects: the message record, its entity annotations, the
//! `MessageOrigin` one-of family and the derived content view.

use serde::{Deserialize, Serialize};

use super::chat::Chat;
use super::keyboard::InlineKeyboardMarkup;
use super::media::{
    Animation, Audio, Contact, Dice, Document, Location, PhotoSize, Poll, Sticker, Venue, Video,
    VideoNote, Voice,
};
use super::user::User;

/// A unique message identifier, returned by `copyMessage` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageId {
    pub message_id: i64,
}

/// One special entity in a text message: hashtag, mention, URL, etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: String,
    pub offset: i64,
    pub length: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
}

/// Origin of a forwarded message, discriminated by the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MessageOrigin {
    #[serde(rename = "user")]
    User(MessageOriginUser),
    #[serde(rename = "hidden_user")]
    HiddenUser(MessageOriginHiddenUser),
    #[serde(rename = "chat")]
    Chat(MessageOriginChat),
    #[serde(rename = "channel")]
    Channel(MessageOriginChannel),
}

/// Message originally sent by a known user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginUser {
    pub date: i64,
    pub sender_user: User,
}

/// Message originally sent by a user who hides their account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginHiddenUser {
    pub date: i64,
    pub sender_user_name: String,
}

/// Message originally sent on behalf of a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginChat {
    pub date: i64,
    pub sender_chat: Chat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
}

/// Message originally posted to a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginChannel {
    pub date: i64,
    pub chat: Chat,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
}

/// A message.
///
/// The content fields (`text`, `photo`, `document`, ...) are mutually
/// exclusive in well-formed server data; [`Message::content`] gives a
/// tagged view over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_chat: Option<Chat>,
    pub date: i64,
    pub chat: Chat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_origin: Option<MessageOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_topic_message: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_automatic_forward: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via_bot: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_protected_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<PhotoSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_note: Option<VideoNote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_media_spoiler: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dice: Option<Dice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_members: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_chat_member: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_photo: Option<Vec<PhotoSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_chat_photo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_chat_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supergroup_chat_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_chat_created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_from_chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// Tagged view over a message's mutually exclusive content fields.
///
/// Produced by [`Message::content`]; variants borrow from the message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageContent<'a> {
    Text(&'a str),
    Animation(&'a Animation),
    Audio(&'a Audio),
    Document(&'a Document),
    Photo(&'a [PhotoSize]),
    Sticker(&'a Sticker),
    Video(&'a Video),
    VideoNote(&'a VideoNote),
    Voice(&'a Voice),
    Contact(&'a Contact),
    Dice(&'a Dice),
    Poll(&'a Poll),
    Venue(&'a Venue),
    Location(&'a Location),
    NewChatMembers(&'a [User]),
    LeftChatMember(&'a User),
    NewChatTitle(&'a str),
    NewChatPhoto(&'a [PhotoSize]),
    DeleteChatPhoto,
    GroupChatCreated,
    SupergroupChatCreated,
    ChannelChatCreated,
    MigrateToChatId(i64),
    MigrateFromChatId(i64),
    PinnedMessage(&'a Message),
    /// None of the known content fields is populated. Service updates the
    /// SDK does not model yet land here rather than failing.
    Empty,
}

impl Message {
    /// Which kind of content this message carries.
    ///
    /// Well-formed server data populates at most one content field. Should
    /// more than one ever be populated, the first in declared order wins;
    /// the order is the Bot API reference order of the fields above. Note
    /// that `animation` messages also carry a backward-compatibility
    /// `document`, which is why `Animation` is checked first.
    pub fn content(&self) -> MessageContent<'_> {
        if let Some(text) = &self.text {
            return MessageContent::Text(text);
        }
        if let Some(animation) = &self.animation {
            return MessageContent::Animation(animation);
        }
        if let Some(audio) = &self.audio {
            return MessageContent::Audio(audio);
        }
        if let Some(document) = &self.document {
            return MessageContent::Document(document);
        }
        if let Some(photo) = &self.photo {
            return MessageContent::Photo(photo);
        }
        if let Some(sticker) = &self.sticker {
            return MessageContent::Sticker(sticker);
        }
        if let Some(video) = &self.video {
            return MessageContent::Video(video);
        }
        if let Some(video_note) = &self.video_note {
            return MessageContent::VideoNote(video_note);
        }
        if let Some(voice) = &self.voice {
            return MessageContent::Voice(voice);
        }
        if let Some(contact) = &self.contact {
            return MessageContent::Contact(contact);
        }
        if let Some(dice) = &self.dice {
            return MessageContent::Dice(dice);
        }
        if let Some(poll) = &self.poll {
            return MessageContent::Poll(poll);
        }
        if let Some(venue) = &self.venue {
            return MessageContent::Venue(venue);
        }
        if let Some(location) = &self.location {
            return MessageContent::Location(location);
        }
        if let Some(members) = &self.new_chat_members {
            return MessageContent::NewChatMembers(members);
        }
        if let Some(member) = &self.left_chat_member {
            return MessageContent::LeftChatMember(member);
        }
        if let Some(title) = &self.new_chat_title {
            return MessageContent::NewChatTitle(title);
        }
        if let Some(photo) = &self.new_chat_photo {
            return MessageContent::NewChatPhoto(photo);
        }
        if self.delete_chat_photo.unwrap_or(false) {
            return MessageContent::DeleteChatPhoto;
        }
        if self.group_chat_created.unwrap_or(false) {
            return MessageContent::GroupChatCreated;
        }
        if self.supergroup_chat_created.unwrap_or(false) {
            return MessageContent::SupergroupChatCreated;
        }
        if self.channel_chat_created.unwrap_or(false) {
            return MessageContent::ChannelChatCreated;
        }
        if let Some(id) = self.migrate_to_chat_id {
            return MessageContent::MigrateToChatId(id);
        }
        if let Some(id) = self.migrate_from_chat_id {
            return MessageContent::MigrateFromChatId(id);
        }
        if let Some(pinned) = &self.pinned_message {
            return MessageContent::PinnedMessage(pinned);
        }
        MessageContent::Empty
    }
}

/// Result shape of the `editMessage*` family: the edited [`Message`] when
/// the bot owns the message, or `true` for inline-mode messages.
///
/// Untagged; the message shape is tried first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageOrTrue {
    Message(Box<Message>),
    True(bool),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_message(extra: serde_json::Value) -> Message {
        let mut value = json!({
            "message_id": 1,
            "date": 1_700_000_000,
            "chat": {"id": 5, "type": "private"}
        });
        value
            .as_object_mut()
            .unwrap()
            .extend(extra.as_object().unwrap().clone());
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn content_is_empty_when_no_field_is_populated() {
        assert_eq!(base_message(json!({})).content(), MessageContent::Empty);
    }

    #[test]
    fn content_returns_the_single_populated_field() {
        let message = base_message(json!({"text": "hi"}));
        assert_eq!(message.content(), MessageContent::Text("hi"));
    }

    #[test]
    fn animation_wins_over_its_compatibility_document() {
        let message = base_message(json!({
            "animation": {
                "file_id": "a", "file_unique_id": "au",
                "width": 1, "height": 1, "duration": 2
            },
            "document": {"file_id": "d", "file_unique_id": "du"}
        }));
        assert!(matches!(message.content(), MessageContent::Animation(_)));
    }

    #[test]
    fn forward_origin_dispatches_on_type_tag() {
        let message = base_message(json!({
            "forward_origin": {"type": "hidden_user", "date": 1, "sender_user_name": "anon"}
        }));
        match message.forward_origin.unwrap() {
            MessageOrigin::HiddenUser(origin) => assert_eq!(origin.sender_user_name, "anon"),
            other => panic!("wrong origin variant: {other:?}"),
        }
    }

    #[test]
    fn message_or_true_accepts_both_shapes() {
        let edited: MessageOrTrue = serde_json::from_value(json!({
            "message_id": 2, "date": 0, "chat": {"id": 5, "type": "private"}
        }))
        .unwrap();
        assert!(matches!(edited, MessageOrTrue::Message(_)));

        let inline: MessageOrTrue = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(inline, MessageOrTrue::True(true));
    }
}
