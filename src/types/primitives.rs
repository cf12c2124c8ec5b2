use serde::{Deserialize, Serialize};

/// Bot credential issued by BotFather.
///
/// Immutable for the lifetime of a client; used to build both the API base
/// URL and the file-download URL. Never printed by `Debug` on the client.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BotToken(String);

impl BotToken {
    pub fn new(token: impl Into<String>) -> Result<Self, String> {
        let token = token.into();
        if token.is_empty() {
            return Err("bot token must not be empty".to_string());
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BotToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BotToken(..)")
    }
}

/// Chat addressing accepted by the Bot API: a numeric chat id or a public
/// `@channelusername` string.
///
/// Untagged on the wire; decoding tries the integer shape first, then the
/// string shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        ChatId::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        ChatId::Username(username)
    }
}

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{id}"),
            ChatId::Username(name) => f.write_str(name),
        }
    }
}

/// Text formatting mode for message bodies and captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    #[serde(rename = "MarkdownV2")]
    MarkdownV2,
    #[serde(rename = "Markdown")]
    Markdown,
    #[serde(rename = "HTML")]
    Html,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_id_decodes_integer_shape_first() {
        let id: ChatId = serde_json::from_str("123").unwrap();
        assert_eq!(id, ChatId::Id(123));

        let name: ChatId = serde_json::from_str("\"@channel\"").unwrap();
        assert_eq!(name, ChatId::Username("@channel".to_string()));
    }

    #[test]
    fn chat_id_encodes_without_wrapper() {
        assert_eq!(serde_json::to_string(&ChatId::Id(-100123)).unwrap(), "-100123");
        assert_eq!(
            serde_json::to_string(&ChatId::from("@channel")).unwrap(),
            "\"@channel\""
        );
    }

    #[test]
    fn bot_token_debug_is_redacted() {
        let token = BotToken::new("123456:secret").unwrap();
        assert_eq!(format!("{token:?}"), "BotToken(..)");
    }

    #[test]
    fn bot_token_rejects_empty() {
        assert!(BotToken::new("").is_err());
    }

    #[test]
    fn parse_mode_uses_api_literals() {
        assert_eq!(serde_json::to_string(&ParseMode::Html).unwrap(), "\"HTML\"");
        assert_eq!(
            serde_json::to_string(&ParseMode::MarkdownV2).unwrap(),
            "\"MarkdownV2\""
        );
    }
}
