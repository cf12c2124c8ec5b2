//! Chat administration: membership, permissions, invite links, pinned
//! messages and chat metadata.

use serde::Serialize;

use super::Method;
use crate::types::{Chat, ChatId, ChatInviteLink, ChatMember, ChatPermissions};

/// `banChatMember`: ban a user from a group, supergroup or channel.
#[derive(Debug, Clone, Serialize)]
pub struct BanChatMemberRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoke_messages: Option<bool>,
}

impl Method for BanChatMemberRequest {
    const NAME: &'static str = "banChatMember";
    type Response = bool;
}

/// `unbanChatMember`: lift a ban on a user.
#[derive(Debug, Clone, Serialize)]
pub struct UnbanChatMemberRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_if_banned: Option<bool>,
}

impl Method for UnbanChatMemberRequest {
    const NAME: &'static str = "unbanChatMember";
    type Response = bool;
}

/// `restrictChatMember`: restrict a user in a supergroup.
#[derive(Debug, Clone, Serialize)]
pub struct RestrictChatMemberRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub permissions: ChatPermissions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_independent_chat_permissions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
}

impl Method for RestrictChatMemberRequest {
    const NAME: &'static str = "restrictChatMember";
    type Response = bool;
}

/// `promoteChatMember`: promote or demote a user. All rights default to
/// unchanged when omitted.
#[derive(Debug, Clone, Serialize)]
pub struct PromoteChatMemberRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_chat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_delete_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_video_chats: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_restrict_members: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_promote_members: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_change_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_invite_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_topics: Option<bool>,
}

impl Method for PromoteChatMemberRequest {
    const NAME: &'static str = "promoteChatMember";
    type Response = bool;
}

/// `setChatAdministratorCustomTitle`: set a custom title for an administrator.
#[derive(Debug, Clone, Serialize)]
pub struct SetChatAdministratorCustomTitleRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub custom_title: String,
}

impl Method for SetChatAdministratorCustomTitleRequest {
    const NAME: &'static str = "setChatAdministratorCustomTitle";
    type Response = bool;
}

/// `banChatSenderChat`: ban a channel chat from posting in a supergroup or
/// channel.
#[derive(Debug, Clone, Serialize)]
pub struct BanChatSenderChatRequest {
    pub chat_id: ChatId,
    pub sender_chat_id: i64,
}

impl Method for BanChatSenderChatRequest {
    const NAME: &'static str = "banChatSenderChat";
    type Response = bool;
}

/// `unbanChatSenderChat`: lift a ban on a channel chat.
#[derive(Debug, Clone, Serialize)]
pub struct UnbanChatSenderChatRequest {
    pub chat_id: ChatId,
    pub sender_chat_id: i64,
}

impl Method for UnbanChatSenderChatRequest {
    const NAME: &'static str = "unbanChatSenderChat";
    type Response = bool;
}

/// `setChatPermissions`: set default member permissions for a supergroup.
#[derive(Debug, Clone, Serialize)]
pub struct SetChatPermissionsRequest {
    pub chat_id: ChatId,
    pub permissions: ChatPermissions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_independent_chat_permissions: Option<bool>,
}

impl Method for SetChatPermissionsRequest {
    const NAME: &'static str = "setChatPermissions";
    type Response = bool;
}

/// `exportChatInviteLink`: generate a fresh primary invite link.
#[derive(Debug, Clone, Serialize)]
pub struct ExportChatInviteLinkRequest {
    pub chat_id: ChatId,
}

impl Method for ExportChatInviteLinkRequest {
    const NAME: &'static str = "exportChatInviteLink";
    type Response = String;
}

/// `createChatInviteLink`: create an additional invite link.
#[derive(Debug, Clone, Serialize)]
pub struct CreateChatInviteLinkRequest {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creates_join_request: Option<bool>,
}

impl Method for CreateChatInviteLinkRequest {
    const NAME: &'static str = "createChatInviteLink";
    type Response = ChatInviteLink;
}

/// `editChatInviteLink`: edit a non-primary invite link.
#[derive(Debug, Clone, Serialize)]
pub struct EditChatInviteLinkRequest {
    pub chat_id: ChatId,
    pub invite_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creates_join_request: Option<bool>,
}

impl Method for EditChatInviteLinkRequest {
    const NAME: &'static str = "editChatInviteLink";
    type Response = ChatInviteLink;
}

/// `revokeChatInviteLink`: revoke an invite link.
#[derive(Debug, Clone, Serialize)]
pub struct RevokeChatInviteLinkRequest {
    pub chat_id: ChatId,
    pub invite_link: String,
}

impl Method for RevokeChatInviteLinkRequest {
    const NAME: &'static str = "revokeChatInviteLink";
    type Response = ChatInviteLink;
}

/// `approveChatJoinRequest`: approve a pending join request.
#[derive(Debug, Clone, Serialize)]
pub struct ApproveChatJoinRequestRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Method for ApproveChatJoinRequestRequest {
    const NAME: &'static str = "approveChatJoinRequest";
    type Response = bool;
}

/// `declineChatJoinRequest`: decline a pending join request.
#[derive(Debug, Clone, Serialize)]
pub struct DeclineChatJoinRequestRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Method for DeclineChatJoinRequestRequest {
    const NAME: &'static str = "declineChatJoinRequest";
    type Response = bool;
}

/// `setChatTitle`: change the title of a chat.
#[derive(Debug, Clone, Serialize)]
pub struct SetChatTitleRequest {
    pub chat_id: ChatId,
    pub title: String,
}

impl Method for SetChatTitleRequest {
    const NAME: &'static str = "setChatTitle";
    type Response = bool;
}

/// `setChatDescription`: change the description of a chat.
#[derive(Debug, Clone, Serialize)]
pub struct SetChatDescriptionRequest {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Method for SetChatDescriptionRequest {
    const NAME: &'static str = "setChatDescription";
    type Response = bool;
}

/// `deleteChatPhoto`: remove the chat photo.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteChatPhotoRequest {
    pub chat_id: ChatId,
}

impl Method for DeleteChatPhotoRequest {
    const NAME: &'static str = "deleteChatPhoto";
    type Response = bool;
}

/// `pinChatMessage`: add a message to the list of pinned messages.
#[derive(Debug, Clone, Serialize)]
pub struct PinChatMessageRequest {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl Method for PinChatMessageRequest {
    const NAME: &'static str = "pinChatMessage";
    type Response = bool;
}

/// `unpinChatMessage`: remove a message from the pinned list. Unpins the most
/// recent pinned message when `message_id` is omitted.
#[derive(Debug, Clone, Serialize)]
pub struct UnpinChatMessageRequest {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
}

impl Method for UnpinChatMessageRequest {
    const NAME: &'static str = "unpinChatMessage";
    type Response = bool;
}

/// `unpinAllChatMessages`: clear the pinned list.
#[derive(Debug, Clone, Serialize)]
pub struct UnpinAllChatMessagesRequest {
    pub chat_id: ChatId,
}

impl Method for UnpinAllChatMessagesRequest {
    const NAME: &'static str = "unpinAllChatMessages";
    type Response = bool;
}

/// `leaveChat`: make the bot leave a chat.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveChatRequest {
    pub chat_id: ChatId,
}

impl Method for LeaveChatRequest {
    const NAME: &'static str = "leaveChat";
    type Response = bool;
}

/// `getChat`: get up-to-date information about a chat.
#[derive(Debug, Clone, Serialize)]
pub struct GetChatRequest {
    pub chat_id: ChatId,
}

impl Method for GetChatRequest {
    const NAME: &'static str = "getChat";
    type Response = Chat;
}

/// `getChatAdministrators`: list administrators of a chat.
#[derive(Debug, Clone, Serialize)]
pub struct GetChatAdministratorsRequest {
    pub chat_id: ChatId,
}

impl Method for GetChatAdministratorsRequest {
    const NAME: &'static str = "getChatAdministrators";
    type Response = Vec<ChatMember>;
}

/// `getChatMemberCount`: number of members in a chat.
#[derive(Debug, Clone, Serialize)]
pub struct GetChatMemberCountRequest {
    pub chat_id: ChatId,
}

impl Method for GetChatMemberCountRequest {
    const NAME: &'static str = "getChatMemberCount";
    type Response = i64;
}

/// `getChatMember`: information about one member of a chat.
#[derive(Debug, Clone, Serialize)]
pub struct GetChatMemberRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Method for GetChatMemberRequest {
    const NAME: &'static str = "getChatMember";
    type Response = ChatMember;
}

/// `setChatStickerSet`: set the sticker set of a supergroup.
#[derive(Debug, Clone, Serialize)]
pub struct SetChatStickerSetRequest {
    pub chat_id: ChatId,
    pub sticker_set_name: String,
}

impl Method for SetChatStickerSetRequest {
    const NAME: &'static str = "setChatStickerSet";
    type Response = bool;
}

/// `deleteChatStickerSet`: remove the sticker set of a supergroup.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteChatStickerSetRequest {
    pub chat_id: ChatId,
}

impl Method for DeleteChatStickerSetRequest {
    const NAME: &'static str = "deleteChatStickerSet";
    type Response = bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;

    #[test]
    fn get_chat_member_serializes_both_ids() {
        let request = GetChatMemberRequest {
            chat_id: ChatId::from("@group"),
            user_id: 7,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"chat_id": "@group", "user_id": 7}));
        assert_eq!(GetChatMemberRequest::NAME, "getChatMember");
    }
}
