//! The bot's own identity and presentation: `getMe`, commands, name,
//! descriptions, menu button and default administrator rights.

use serde::Serialize;

use super::Method;
use crate::types::{
    BotCommand, BotCommandScope, BotDescription, BotName, BotShortDescription,
    ChatAdministratorRights, MenuButton, User,
};

/// `getMe`: basic information about the bot. Also the cheapest way to check
/// that a token is valid.
#[derive(Debug, Clone, Serialize)]
pub struct GetMeRequest {}

impl Method for GetMeRequest {
    const NAME: &'static str = "getMe";
    type Response = User;
}

/// `logOut`: log out from the cloud Bot API server before moving to a local
/// one.
#[derive(Debug, Clone, Serialize)]
pub struct LogOutRequest {}

impl Method for LogOutRequest {
    const NAME: &'static str = "logOut";
    type Response = bool;
}

/// `close`: close the bot instance before moving it to another local server.
#[derive(Debug, Clone, Serialize)]
pub struct CloseRequest {}

impl Method for CloseRequest {
    const NAME: &'static str = "close";
    type Response = bool;
}

/// `setMyCommands`: set the bot's command list for a scope.
#[derive(Debug, Clone, Serialize)]
pub struct SetMyCommandsRequest {
    pub commands: Vec<BotCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl SetMyCommandsRequest {
    pub fn new(commands: Vec<BotCommand>) -> Self {
        Self {
            commands,
            scope: None,
            language_code: None,
        }
    }
}

impl Method for SetMyCommandsRequest {
    const NAME: &'static str = "setMyCommands";
    type Response = bool;
}

/// `deleteMyCommands`: delete the command list for a scope, falling back to
/// higher-level commands.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteMyCommandsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl Method for DeleteMyCommandsRequest {
    const NAME: &'static str = "deleteMyCommands";
    type Response = bool;
}

/// `getMyCommands`: current command list for a scope.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMyCommandsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl Method for GetMyCommandsRequest {
    const NAME: &'static str = "getMyCommands";
    type Response = Vec<BotCommand>;
}

/// `setMyName`: change the bot's name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetMyNameRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl Method for SetMyNameRequest {
    const NAME: &'static str = "setMyName";
    type Response = bool;
}

/// `getMyName`: current bot name for a language.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMyNameRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl Method for GetMyNameRequest {
    const NAME: &'static str = "getMyName";
    type Response = BotName;
}

/// `setMyDescription`: change the description shown in empty chats.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetMyDescriptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl Method for SetMyDescriptionRequest {
    const NAME: &'static str = "setMyDescription";
    type Response = bool;
}

/// `getMyDescription`: current bot description for a language.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMyDescriptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl Method for GetMyDescriptionRequest {
    const NAME: &'static str = "getMyDescription";
    type Response = BotDescription;
}

/// `setMyShortDescription`: change the short description shown on the bot's
/// profile page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetMyShortDescriptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl Method for SetMyShortDescriptionRequest {
    const NAME: &'static str = "setMyShortDescription";
    type Response = bool;
}

/// `getMyShortDescription`: current short description for a language.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMyShortDescriptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl Method for GetMyShortDescriptionRequest {
    const NAME: &'static str = "getMyShortDescription";
    type Response = BotShortDescription;
}

/// `setChatMenuButton`: change the bot's menu button in a private chat, or
/// the default one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetChatMenuButtonRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_button: Option<MenuButton>,
}

impl Method for SetChatMenuButtonRequest {
    const NAME: &'static str = "setChatMenuButton";
    type Response = bool;
}

/// `getChatMenuButton`: current menu button in a private chat, or the
/// default one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetChatMenuButtonRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
}

impl Method for GetChatMenuButtonRequest {
    const NAME: &'static str = "getChatMenuButton";
    type Response = MenuButton;
}

/// `setMyDefaultAdministratorRights`: default rights requested when the bot
/// is added to a group or channel as administrator.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetMyDefaultAdministratorRightsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights: Option<ChatAdministratorRights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_channels: Option<bool>,
}

impl Method for SetMyDefaultAdministratorRightsRequest {
    const NAME: &'static str = "setMyDefaultAdministratorRights";
    type Response = bool;
}

/// `getMyDefaultAdministratorRights`: current default administrator rights.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMyDefaultAdministratorRightsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_channels: Option<bool>,
}

impl Method for GetMyDefaultAdministratorRightsRequest {
    const NAME: &'static str = "getMyDefaultAdministratorRights";
    type Response = ChatAdministratorRights;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;

    #[test]
    fn empty_requests_serialize_as_empty_objects() {
        assert_eq!(
            serde_json::to_string(&GetMeRequest {}).unwrap(),
            "{}"
        );
        assert_eq!(
            serde_json::to_string(&GetMyNameRequest::default()).unwrap(),
            "{}"
        );
        assert_eq!(GetMeRequest::NAME, "getMe");
    }

    #[test]
    fn set_my_commands_includes_scope_when_present() {
        let mut request = SetMyCommandsRequest::new(vec![BotCommand {
            command: "start".into(),
            description: "start the bot".into(),
        }]);
        request.scope = Some(BotCommandScope::AllPrivateChats);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["scope"]["type"], "all_private_chats");
        assert_eq!(value["commands"][0]["command"], "start");
    }
}
