//! Message reactions: the `ReactionType` one-of family and the reaction
//! update payloads.

use serde::{Deserialize, Serialize};

use super::chat::Chat;
use super::unknown::MaybeUnknown;
use super::user::User;

/// The type of a reaction, discriminated by the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReactionType {
    #[serde(rename = "emoji")]
    Emoji { emoji: String },
    #[serde(rename = "custom_emoji")]
    CustomEmoji { custom_emoji_id: String },
}

impl ReactionType {
    pub fn emoji(emoji: impl Into<String>) -> Self {
        ReactionType::Emoji {
            emoji: emoji.into(),
        }
    }

    pub fn custom_emoji(id: impl Into<String>) -> Self {
        ReactionType::CustomEmoji {
            custom_emoji_id: id.into(),
        }
    }
}

/// A reaction with its vote count.
///
/// Server-produced only, so the reaction is wrapped in [`MaybeUnknown`]:
/// a reaction kind newer than this SDK must not make a whole `getUpdates`
/// batch undecodable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionCount {
    #[serde(rename = "type")]
    pub kind: MaybeUnknown<ReactionType>,
    pub total_count: i64,
}

/// A change of a reaction on a message performed by a user.
///
/// Like [`ReactionCount`], the reaction lists arrive from the server and
/// decode leniently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageReactionUpdated {
    pub chat: Chat,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_chat: Option<Chat>,
    pub date: i64,
    pub old_reaction: Vec<MaybeUnknown<ReactionType>>,
    pub new_reaction: Vec<MaybeUnknown<ReactionType>>,
}

/// Anonymous reaction count changes on a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageReactionCountUpdated {
    pub chat: Chat,
    pub message_id: i64,
    pub date: i64,
    pub reactions: Vec<ReactionCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reaction_round_trips_with_its_tag() {
        let reaction = ReactionType::emoji("👍");
        let value = serde_json::to_value(&reaction).unwrap();
        assert_eq!(value, json!({"type": "emoji", "emoji": "👍"}));
        let back: ReactionType = serde_json::from_value(value).unwrap();
        assert_eq!(back, reaction);
    }

    #[test]
    fn unknown_reaction_kind_is_rejected_with_tag() {
        let err =
            serde_json::from_value::<ReactionType>(json!({"type": "paid", "star_count": 3}))
                .unwrap_err();
        assert!(err.to_string().contains("paid"), "{err}");
    }

    #[test]
    fn reaction_update_tolerates_unrecognized_kinds() {
        let update: MessageReactionUpdated = serde_json::from_value(json!({
            "chat": {"id": 42, "type": "private"},
            "message_id": 5,
            "date": 1700000000,
            "old_reaction": [],
            "new_reaction": [
                {"type": "emoji", "emoji": "👍"},
                {"type": "paid"}
            ]
        }))
        .unwrap();

        assert_eq!(
            update.new_reaction[0],
            MaybeUnknown::Known(ReactionType::emoji("👍"))
        );
        match &update.new_reaction[1] {
            MaybeUnknown::Unknown(raw) => assert_eq!(raw.tag.as_deref(), Some("paid")),
            known => panic!("expected unknown kind, got {known:?}"),
        }
    }

    #[test]
    fn reaction_count_tolerates_unrecognized_kinds() {
        let count: ReactionCount =
            serde_json::from_value(json!({"type": {"type": "paid"}, "total_count": 3}))
                .unwrap();
        assert!(count.kind.is_unknown());
    }
}
