//! Bot profile objects: commands, the `BotCommandScope` and `MenuButton`
//! one-of families, name and description records.

use serde::{Deserialize, Serialize};

use super::keyboard::WebAppInfo;
use super::primitives::ChatId;

/// One bot command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

/// Scope to which bot commands apply, discriminated by the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BotCommandScope {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "all_private_chats")]
    AllPrivateChats,
    #[serde(rename = "all_group_chats")]
    AllGroupChats,
    #[serde(rename = "all_chat_administrators")]
    AllChatAdministrators,
    #[serde(rename = "chat")]
    Chat { chat_id: ChatId },
    #[serde(rename = "chat_administrators")]
    ChatAdministrators { chat_id: ChatId },
    #[serde(rename = "chat_member")]
    ChatMember { chat_id: ChatId, user_id: i64 },
}

/// The bot's menu button in private chats, discriminated by the `type`
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MenuButton {
    #[serde(rename = "commands")]
    Commands,
    #[serde(rename = "web_app")]
    WebApp { text: String, web_app: WebAppInfo },
    #[serde(rename = "default")]
    Default,
}

/// The bot's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotName {
    pub name: String,
}

/// The bot's description shown in empty chats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotDescription {
    pub description: String,
}

/// The bot's short description shown on the profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotShortDescription {
    pub short_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unit_scopes_serialize_as_bare_tag_objects() {
        let value = serde_json::to_value(BotCommandScope::Default).unwrap();
        assert_eq!(value, json!({"type": "default"}));
    }

    #[test]
    fn chat_scope_carries_its_fields_next_to_the_tag() {
        let scope = BotCommandScope::ChatMember {
            chat_id: ChatId::Id(9),
            user_id: 4,
        };
        let value = serde_json::to_value(&scope).unwrap();
        assert_eq!(value, json!({"type": "chat_member", "chat_id": 9, "user_id": 4}));
        let back: BotCommandScope = serde_json::from_value(value).unwrap();
        assert_eq!(back, scope);
    }

    #[test]
    fn menu_button_dispatches_on_type() {
        let button: MenuButton = serde_json::from_value(json!({
            "type": "web_app", "text": "open", "web_app": {"url": "https://example.com"}
        }))
        .unwrap();
        assert!(matches!(button, MenuButton::WebApp { .. }));

        let err = serde_json::from_value::<MenuButton>(json!({"type": "sidebar"})).unwrap_err();
        assert!(err.to_string().contains("sidebar"), "{err}");
    }
}
