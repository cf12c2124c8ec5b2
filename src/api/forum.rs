//! Forum topic management for supergroups with topics enabled.

use serde::Serialize;

use super::Method;
use crate::types::{ChatId, ForumTopic, Sticker};

/// `getForumTopicIconStickers`: custom emoji stickers usable as topic icons.
#[derive(Debug, Clone, Serialize)]
pub struct GetForumTopicIconStickersRequest {}

impl Method for GetForumTopicIconStickersRequest {
    const NAME: &'static str = "getForumTopicIconStickers";
    type Response = Vec<Sticker>;
}

/// `createForumTopic`: create a topic in a forum supergroup.
#[derive(Debug, Clone, Serialize)]
pub struct CreateForumTopicRequest {
    pub chat_id: ChatId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_custom_emoji_id: Option<String>,
}

impl CreateForumTopicRequest {
    pub fn new(chat_id: impl Into<ChatId>, name: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            name: name.into(),
            icon_color: None,
            icon_custom_emoji_id: None,
        }
    }
}

impl Method for CreateForumTopicRequest {
    const NAME: &'static str = "createForumTopic";
    type Response = ForumTopic;
}

/// `editForumTopic`: edit the name or icon of a topic.
#[derive(Debug, Clone, Serialize)]
pub struct EditForumTopicRequest {
    pub chat_id: ChatId,
    pub message_thread_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_custom_emoji_id: Option<String>,
}

impl Method for EditForumTopicRequest {
    const NAME: &'static str = "editForumTopic";
    type Response = bool;
}

/// `closeForumTopic`: close an open topic.
#[derive(Debug, Clone, Serialize)]
pub struct CloseForumTopicRequest {
    pub chat_id: ChatId,
    pub message_thread_id: i64,
}

impl Method for CloseForumTopicRequest {
    const NAME: &'static str = "closeForumTopic";
    type Response = bool;
}

/// `reopenForumTopic`: reopen a closed topic.
#[derive(Debug, Clone, Serialize)]
pub struct ReopenForumTopicRequest {
    pub chat_id: ChatId,
    pub message_thread_id: i64,
}

impl Method for ReopenForumTopicRequest {
    const NAME: &'static str = "reopenForumTopic";
    type Response = bool;
}

/// `deleteForumTopic`: delete a topic along with all its messages.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteForumTopicRequest {
    pub chat_id: ChatId,
    pub message_thread_id: i64,
}

impl Method for DeleteForumTopicRequest {
    const NAME: &'static str = "deleteForumTopic";
    type Response = bool;
}

/// `unpinAllForumTopicMessages`: clear the pinned list inside a topic.
#[derive(Debug, Clone, Serialize)]
pub struct UnpinAllForumTopicMessagesRequest {
    pub chat_id: ChatId,
    pub message_thread_id: i64,
}

impl Method for UnpinAllForumTopicMessagesRequest {
    const NAME: &'static str = "unpinAllForumTopicMessages";
    type Response = bool;
}

/// `editGeneralForumTopic`: rename the "General" topic.
#[derive(Debug, Clone, Serialize)]
pub struct EditGeneralForumTopicRequest {
    pub chat_id: ChatId,
    pub name: String,
}

impl Method for EditGeneralForumTopicRequest {
    const NAME: &'static str = "editGeneralForumTopic";
    type Response = bool;
}

/// `closeGeneralForumTopic`: close the "General" topic.
#[derive(Debug, Clone, Serialize)]
pub struct CloseGeneralForumTopicRequest {
    pub chat_id: ChatId,
}

impl Method for CloseGeneralForumTopicRequest {
    const NAME: &'static str = "closeGeneralForumTopic";
    type Response = bool;
}

/// `reopenGeneralForumTopic`: reopen the "General" topic, unhiding it if
/// hidden.
#[derive(Debug, Clone, Serialize)]
pub struct ReopenGeneralForumTopicRequest {
    pub chat_id: ChatId,
}

impl Method for ReopenGeneralForumTopicRequest {
    const NAME: &'static str = "reopenGeneralForumTopic";
    type Response = bool;
}

/// `hideGeneralForumTopic`: hide the "General" topic, closing it if open.
#[derive(Debug, Clone, Serialize)]
pub struct HideGeneralForumTopicRequest {
    pub chat_id: ChatId,
}

impl Method for HideGeneralForumTopicRequest {
    const NAME: &'static str = "hideGeneralForumTopic";
    type Response = bool;
}

/// `unhideGeneralForumTopic`: unhide the "General" topic.
#[derive(Debug, Clone, Serialize)]
pub struct UnhideGeneralForumTopicRequest {
    pub chat_id: ChatId,
}

impl Method for UnhideGeneralForumTopicRequest {
    const NAME: &'static str = "unhideGeneralForumTopic";
    type Response = bool;
}

/// `unpinAllGeneralForumTopicMessages`: clear the pinned list of the
/// "General" topic.
#[derive(Debug, Clone, Serialize)]
pub struct UnpinAllGeneralForumTopicMessagesRequest {
    pub chat_id: ChatId,
}

impl Method for UnpinAllGeneralForumTopicMessagesRequest {
    const NAME: &'static str = "unpinAllGeneralForumTopicMessages";
    type Response = bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;

    #[test]
    fn create_forum_topic_serializes_required_fields_only() {
        let request = CreateForumTopicRequest::new(-100123, "releases");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"chat_id": -100123, "name": "releases"})
        );
        assert_eq!(CreateForumTopicRequest::NAME, "createForumTopic");
    }
}
