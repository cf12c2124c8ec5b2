//! The `ChatMember` one-of family, discriminated by the `status` field.

use serde::{Deserialize, Serialize};

use super::user::User;

/// Information about one member of a chat.
///
/// The wire shape is selected by the `status` tag; serializing a variant
/// always stamps its canonical tag, so the tag and the payload cannot
/// disagree. An unrecognized `status` value fails deserialization with an
/// error naming the literal tag; use
/// [`MaybeUnknown`](super::unknown::MaybeUnknown) to decode leniently
/// instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ChatMember {
    #[serde(rename = "creator")]
    Owner(ChatMemberOwner),
    #[serde(rename = "administrator")]
    Administrator(ChatMemberAdministrator),
    #[serde(rename = "member")]
    Member(ChatMemberMember),
    #[serde(rename = "restricted")]
    Restricted(ChatMemberRestricted),
    #[serde(rename = "left")]
    Left(ChatMemberLeft),
    #[serde(rename = "kicked")]
    Banned(ChatMemberBanned),
}

impl ChatMember {
    /// The user this membership record describes.
    pub fn user(&self) -> &User {
        match self {
            ChatMember::Owner(m) => &m.user,
            ChatMember::Administrator(m) => &m.user,
            ChatMember::Member(m) => &m.user,
            ChatMember::Restricted(m) => &m.user,
            ChatMember::Left(m) => &m.user,
            ChatMember::Banned(m) => &m.user,
        }
    }

    /// Canonical `status` tag for this variant.
    pub fn status(&self) -> &'static str {
        match self {
            ChatMember::Owner(_) => "creator",
            ChatMember::Administrator(_) => "administrator",
            ChatMember::Member(_) => "member",
            ChatMember::Restricted(_) => "restricted",
            ChatMember::Left(_) => "left",
            ChatMember::Banned(_) => "kicked",
        }
    }
}

/// Chat owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberOwner {
    pub user: User,
    pub is_anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

/// Chat administrator with granted rights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberAdministrator {
    pub user: User,
    pub can_be_edited: bool,
    pub is_anonymous: bool,
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_topics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

/// Ordinary member without additional privileges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberMember {
    pub user: User,
}

/// Member under restrictions (supergroups only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberRestricted {
    pub user: User,
    pub is_member: bool,
    pub can_send_messages: bool,
    pub can_send_audios: bool,
    pub can_send_documents: bool,
    pub can_send_photos: bool,
    pub can_send_videos: bool,
    pub can_send_video_notes: bool,
    pub can_send_voice_notes: bool,
    pub can_send_polls: bool,
    pub can_send_other_messages: bool,
    pub can_add_web_page_previews: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_pin_messages: bool,
    pub can_manage_topics: bool,
    /// Unix time when restrictions are lifted; 0 means restricted forever.
    pub until_date: i64,
}

/// A user who is not currently a member but may join on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberLeft {
    pub user: User,
}

/// A banned user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberBanned {
    pub user: User,
    /// Unix time when the ban expires; 0 means banned forever.
    pub until_date: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user() -> serde_json::Value {
        json!({"id": 7, "is_bot": false, "first_name": "Ann"})
    }

    #[test]
    fn decodes_by_status_tag() {
        let member: ChatMember = serde_json::from_value(json!({
            "status": "creator",
            "user": sample_user(),
            "is_anonymous": false
        }))
        .unwrap();
        assert!(matches!(member, ChatMember::Owner(_)));
        assert_eq!(member.user().first_name, "Ann");
        assert_eq!(member.status(), "creator");
    }

    #[test]
    fn encoding_stamps_the_canonical_tag() {
        let member = ChatMember::Banned(ChatMemberBanned {
            user: serde_json::from_value(sample_user()).unwrap(),
            until_date: 0,
        });
        let value = serde_json::to_value(&member).unwrap();
        assert_eq!(value["status"], "kicked");
        assert_eq!(value["until_date"], 0);
    }

    #[test]
    fn unrecognized_status_fails_with_the_literal_tag() {
        let err = serde_json::from_value::<ChatMember>(json!({
            "status": "super-admin",
            "user": sample_user()
        }))
        .unwrap_err();
        assert!(err.to_string().contains("super-admin"), "{err}");
    }
}
