//! Flat facade over the operation catalogue.
//!
//! One async method per Bot API method, each delegating to
//! [`BotClient::invoke`]. Purely a convenience surface; everything here can
//! be done with `invoke` and a request struct directly.

use crate::api::bot_profile::*;
use crate::api::chats::*;
use crate::api::files::*;
use crate::api::forum::*;
use crate::api::inline::*;
use crate::api::messages::*;
use crate::api::updates::*;
use crate::error::BotError;
use crate::types::{
    BotCommand, BotDescription, BotName, BotShortDescription, Chat, ChatAdministratorRights,
    ChatInviteLink, ChatMember, File, ForumTopic, MenuButton, Message, MessageId, MessageOrTrue,
    Poll, SentWebAppMessage, Sticker, Update, User, UserProfilePhotos, WebhookInfo,
};

use super::BotClient;

/// High-level bot handle.
///
/// ```no_run
/// use telegram_bot_sdk::{api::messages::SendMessageRequest, Bot};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let bot = Bot::new("123456:ABC-DEF")?;
/// let sent = bot.send_message(SendMessageRequest::new(42, "hello")).await?;
/// println!("message_id: {}", sent.message_id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Bot {
    client: BotClient,
}

impl Bot {
    /// Create a bot with default client settings.
    pub fn new(token: impl Into<String>) -> Result<Self, BotError> {
        Ok(Self {
            client: BotClient::new(token)?,
        })
    }

    /// Wrap an already-configured client.
    pub fn with_client(client: BotClient) -> Self {
        Self { client }
    }

    /// The underlying client, for `invoke`, `call` and `file_url`.
    pub fn client(&self) -> &BotClient {
        &self.client
    }

    // getting updates

    pub async fn get_updates(&self, request: GetUpdatesRequest) -> Result<Vec<Update>, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn set_webhook(&self, request: SetWebhookRequest) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn delete_webhook(&self, request: DeleteWebhookRequest) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn get_webhook_info(&self) -> Result<WebhookInfo, BotError> {
        self.client.invoke(&GetWebhookInfoRequest {}).await
    }

    // the bot itself

    pub async fn get_me(&self) -> Result<User, BotError> {
        self.client.invoke(&GetMeRequest {}).await
    }

    pub async fn log_out(&self) -> Result<bool, BotError> {
        self.client.invoke(&LogOutRequest {}).await
    }

    pub async fn close(&self) -> Result<bool, BotError> {
        self.client.invoke(&CloseRequest {}).await
    }

    // sending messages

    pub async fn send_message(&self, request: SendMessageRequest) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn forward_message(
        &self,
        request: ForwardMessageRequest,
    ) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn forward_messages(
        &self,
        request: ForwardMessagesRequest,
    ) -> Result<Vec<MessageId>, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn copy_message(&self, request: CopyMessageRequest) -> Result<MessageId, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn copy_messages(
        &self,
        request: CopyMessagesRequest,
    ) -> Result<Vec<MessageId>, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn send_photo(&self, request: SendPhotoRequest) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn send_audio(&self, request: SendAudioRequest) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn send_document(&self, request: SendDocumentRequest) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn send_video(&self, request: SendVideoRequest) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn send_animation(&self, request: SendAnimationRequest) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn send_voice(&self, request: SendVoiceRequest) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn send_video_note(
        &self,
        request: SendVideoNoteRequest,
    ) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn send_location(&self, request: SendLocationRequest) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn send_venue(&self, request: SendVenueRequest) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn send_contact(&self, request: SendContactRequest) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn send_poll(&self, request: SendPollRequest) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn send_dice(&self, request: SendDiceRequest) -> Result<Message, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn send_chat_action(&self, request: SendChatActionRequest) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn set_message_reaction(
        &self,
        request: SetMessageReactionRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    // editing and deleting messages

    pub async fn edit_message_text(
        &self,
        request: EditMessageTextRequest,
    ) -> Result<MessageOrTrue, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn edit_message_caption(
        &self,
        request: EditMessageCaptionRequest,
    ) -> Result<MessageOrTrue, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn edit_message_reply_markup(
        &self,
        request: EditMessageReplyMarkupRequest,
    ) -> Result<MessageOrTrue, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn edit_message_live_location(
        &self,
        request: EditMessageLiveLocationRequest,
    ) -> Result<MessageOrTrue, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn stop_message_live_location(
        &self,
        request: StopMessageLiveLocationRequest,
    ) -> Result<MessageOrTrue, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn stop_poll(&self, request: StopPollRequest) -> Result<Poll, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn delete_message(&self, request: DeleteMessageRequest) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn delete_messages(&self, request: DeleteMessagesRequest) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    // chat administration

    pub async fn ban_chat_member(&self, request: BanChatMemberRequest) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn unban_chat_member(
        &self,
        request: UnbanChatMemberRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn restrict_chat_member(
        &self,
        request: RestrictChatMemberRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn promote_chat_member(
        &self,
        request: PromoteChatMemberRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn set_chat_administrator_custom_title(
        &self,
        request: SetChatAdministratorCustomTitleRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn ban_chat_sender_chat(
        &self,
        request: BanChatSenderChatRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn unban_chat_sender_chat(
        &self,
        request: UnbanChatSenderChatRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn set_chat_permissions(
        &self,
        request: SetChatPermissionsRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn export_chat_invite_link(
        &self,
        request: ExportChatInviteLinkRequest,
    ) -> Result<String, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn create_chat_invite_link(
        &self,
        request: CreateChatInviteLinkRequest,
    ) -> Result<ChatInviteLink, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn edit_chat_invite_link(
        &self,
        request: EditChatInviteLinkRequest,
    ) -> Result<ChatInviteLink, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn revoke_chat_invite_link(
        &self,
        request: RevokeChatInviteLinkRequest,
    ) -> Result<ChatInviteLink, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn approve_chat_join_request(
        &self,
        request: ApproveChatJoinRequestRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn decline_chat_join_request(
        &self,
        request: DeclineChatJoinRequestRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn set_chat_title(&self, request: SetChatTitleRequest) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn set_chat_description(
        &self,
        request: SetChatDescriptionRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn delete_chat_photo(
        &self,
        request: DeleteChatPhotoRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn pin_chat_message(&self, request: PinChatMessageRequest) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn unpin_chat_message(
        &self,
        request: UnpinChatMessageRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn unpin_all_chat_messages(
        &self,
        request: UnpinAllChatMessagesRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn leave_chat(&self, request: LeaveChatRequest) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn get_chat(&self, request: GetChatRequest) -> Result<Chat, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn get_chat_administrators(
        &self,
        request: GetChatAdministratorsRequest,
    ) -> Result<Vec<ChatMember>, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn get_chat_member_count(
        &self,
        request: GetChatMemberCountRequest,
    ) -> Result<i64, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn get_chat_member(
        &self,
        request: GetChatMemberRequest,
    ) -> Result<ChatMember, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn set_chat_sticker_set(
        &self,
        request: SetChatStickerSetRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn delete_chat_sticker_set(
        &self,
        request: DeleteChatStickerSetRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    // forum topics

    pub async fn get_forum_topic_icon_stickers(&self) -> Result<Vec<Sticker>, BotError> {
        self.client.invoke(&GetForumTopicIconStickersRequest {}).await
    }

    pub async fn create_forum_topic(
        &self,
        request: CreateForumTopicRequest,
    ) -> Result<ForumTopic, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn edit_forum_topic(&self, request: EditForumTopicRequest) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn close_forum_topic(
        &self,
        request: CloseForumTopicRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn reopen_forum_topic(
        &self,
        request: ReopenForumTopicRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn delete_forum_topic(
        &self,
        request: DeleteForumTopicRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn unpin_all_forum_topic_messages(
        &self,
        request: UnpinAllForumTopicMessagesRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn edit_general_forum_topic(
        &self,
        request: EditGeneralForumTopicRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn close_general_forum_topic(
        &self,
        request: CloseGeneralForumTopicRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn reopen_general_forum_topic(
        &self,
        request: ReopenGeneralForumTopicRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn hide_general_forum_topic(
        &self,
        request: HideGeneralForumTopicRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn unhide_general_forum_topic(
        &self,
        request: UnhideGeneralForumTopicRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn unpin_all_general_forum_topic_messages(
        &self,
        request: UnpinAllGeneralForumTopicMessagesRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    // bot profile

    pub async fn set_my_commands(&self, request: SetMyCommandsRequest) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn delete_my_commands(
        &self,
        request: DeleteMyCommandsRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn get_my_commands(
        &self,
        request: GetMyCommandsRequest,
    ) -> Result<Vec<BotCommand>, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn set_my_name(&self, request: SetMyNameRequest) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn get_my_name(&self, request: GetMyNameRequest) -> Result<BotName, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn set_my_description(
        &self,
        request: SetMyDescriptionRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn get_my_description(
        &self,
        request: GetMyDescriptionRequest,
    ) -> Result<BotDescription, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn set_my_short_description(
        &self,
        request: SetMyShortDescriptionRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn get_my_short_description(
        &self,
        request: GetMyShortDescriptionRequest,
    ) -> Result<BotShortDescription, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn set_chat_menu_button(
        &self,
        request: SetChatMenuButtonRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn get_chat_menu_button(
        &self,
        request: GetChatMenuButtonRequest,
    ) -> Result<MenuButton, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn set_my_default_administrator_rights(
        &self,
        request: SetMyDefaultAdministratorRightsRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn get_my_default_administrator_rights(
        &self,
        request: GetMyDefaultAdministratorRightsRequest,
    ) -> Result<ChatAdministratorRights, BotError> {
        self.client.invoke(&request).await
    }

    // files

    pub async fn get_file(&self, request: GetFileRequest) -> Result<File, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn get_user_profile_photos(
        &self,
        request: GetUserProfilePhotosRequest,
    ) -> Result<UserProfilePhotos, BotError> {
        self.client.invoke(&request).await
    }

    // inline mode and callbacks

    pub async fn answer_inline_query(
        &self,
        request: AnswerInlineQueryRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn answer_web_app_query(
        &self,
        request: AnswerWebAppQueryRequest,
    ) -> Result<SentWebAppMessage, BotError> {
        self.client.invoke(&request).await
    }

    pub async fn answer_callback_query(
        &self,
        request: AnswerCallbackQueryRequest,
    ) -> Result<bool, BotError> {
        self.client.invoke(&request).await
    }
}
