//! Forward-compatible decoding for tag-discriminated one-of families.
//!
//! The family enums (`ChatMember`, `ReactionType`, ...) decode strictly: an
//! unrecognized discriminator tag is an error, because silently picking a
//! wrong variant would corrupt caller logic. The remote API evolves
//! independently of this client though, so callers that must survive new
//! variants wrap the family in [`MaybeUnknown`], which keeps the raw JSON
//! fragment instead of failing and re-emits it verbatim on serialization.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A payload whose one-of tag was not recognized by the typed model.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownVariant {
    /// The literal discriminator value, when one of the known discriminator
    /// fields (`type`, `status`, `source`) was present.
    pub tag: Option<String>,
    /// The complete raw JSON fragment.
    pub value: Value,
}

/// Lenient wrapper around a one-of family type.
///
/// Decodes as [`Known`](MaybeUnknown::Known) when the inner type accepts
/// the payload, and as [`Unknown`](MaybeUnknown::Unknown) otherwise;
/// round-tripping an `Unknown` value drops nothing.
///
/// ```
/// use telegram_bot_sdk::types::{ChatMember, MaybeUnknown};
///
/// let json = r#"{"status": "super-admin", "user": {"id": 1, "is_bot": false, "first_name": "A"}}"#;
/// let member: MaybeUnknown<ChatMember> = serde_json::from_str(json).unwrap();
/// match member {
///     MaybeUnknown::Known(_) => unreachable!(),
///     MaybeUnknown::Unknown(raw) => assert_eq!(raw.tag.as_deref(), Some("super-admin")),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MaybeUnknown<T> {
    Known(T),
    Unknown(UnknownVariant),
}

impl<T> MaybeUnknown<T> {
    pub fn known(self) -> Option<T> {
        match self {
            MaybeUnknown::Known(value) => Some(value),
            MaybeUnknown::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, MaybeUnknown::Unknown(_))
    }
}

const DISCRIMINATOR_FIELDS: &[&str] = &["type", "status", "source"];

impl<'de, T: DeserializeOwned> Deserialize<'de> for MaybeUnknown<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match T::deserialize(value.clone()) {
            Ok(known) => Ok(MaybeUnknown::Known(known)),
            Err(_) => {
                let tag = DISCRIMINATOR_FIELDS
                    .iter()
                    .find_map(|field| value.get(field).and_then(Value::as_str))
                    .map(str::to_owned);
                Ok(MaybeUnknown::Unknown(UnknownVariant { tag, value }))
            }
        }
    }
}

impl<T: Serialize> Serialize for MaybeUnknown<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MaybeUnknown::Known(value) => value.serialize(serializer),
            MaybeUnknown::Unknown(raw) => raw.value.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReactionType;
    use serde_json::json;

    #[test]
    fn known_payload_decodes_through() {
        let reaction: MaybeUnknown<ReactionType> =
            serde_json::from_value(json!({"type": "emoji", "emoji": "🔥"})).unwrap();
        assert_eq!(
            reaction,
            MaybeUnknown::Known(ReactionType::emoji("🔥"))
        );
    }

    #[test]
    fn unknown_tag_is_preserved_and_round_trips() {
        let input = json!({"type": "paid", "star_count": 5});
        let reaction: MaybeUnknown<ReactionType> =
            serde_json::from_value(input.clone()).unwrap();
        match &reaction {
            MaybeUnknown::Unknown(raw) => assert_eq!(raw.tag.as_deref(), Some("paid")),
            known => panic!("expected unknown, got {known:?}"),
        }
        assert_eq!(serde_json::to_value(&reaction).unwrap(), input);
    }
}
