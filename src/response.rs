//! The Bot API response envelope and the stateless envelope decoder.
//!
//! Every remote call returns `{ok, error_code?, description?, parameters?,
//! result?}`. [`decode_response`] turns raw response bytes into a typed
//! result or a [`BotError`], and is deliberately a free function so
//! envelope handling can be unit-tested without a client or a network.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BotError;

/// Extra server hints attached to some `ok: false` envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group was migrated to a supergroup with this identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Flood control: seconds to wait before repeating the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i64>,
}

/// The raw response envelope.
///
/// Invariant (enforced by the server, checked here): exactly one of
/// `result` (when `ok`) or `error_code`/`description` (when not) is
/// present.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Option<ResponseParameters>,
    #[serde(default)]
    pub result: Option<T>,
}

/// Decode a raw Bot API response body into the expected result type.
///
/// `method` is only used for error context. Outcomes:
///
/// - body is not an envelope at all → [`BotError::MalformedResponse`];
/// - `ok: false` → [`BotError::Api`] with the server's code and
///   description verbatim;
/// - `ok: true` but `result` is absent or does not match `T` →
///   [`BotError::Schema`].
///
/// Protocol errors retain the raw bytes so callers can diagnose server
/// behavior the typed model does not cover yet.
pub fn decode_response<T: DeserializeOwned>(method: &str, raw: &[u8]) -> Result<T, BotError> {
    let envelope: ApiResponse<Value> =
        serde_json::from_slice(raw).map_err(|source| BotError::MalformedResponse {
            method: method.to_string(),
            raw: raw.to_vec(),
            source,
        })?;

    if !envelope.ok {
        return Err(BotError::Api {
            method: method.to_string(),
            error_code: envelope.error_code.unwrap_or_default(),
            description: envelope.description.unwrap_or_default(),
            parameters: envelope.parameters,
        });
    }

    let result = envelope.result.ok_or_else(|| BotError::Schema {
        method: method.to_string(),
        raw: raw.to_vec(),
        message: "envelope has ok: true but no result".to_string(),
    })?;

    serde_json::from_value(result).map_err(|source| BotError::Schema {
        method: method.to_string(),
        raw: raw.to_vec(),
        message: source.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Message;

    #[test]
    fn ok_envelope_yields_the_typed_result() {
        let raw = br#"{"ok":true,"result":{"message_id":55,"date":1700000000,
            "chat":{"id":123,"type":"private"},"text":"hi"}}"#;
        let message: Message = decode_response("sendMessage", raw).unwrap();
        assert_eq!(message.message_id, 55);
        assert_eq!(message.text.as_deref(), Some("hi"));
    }

    #[test]
    fn error_envelope_carries_code_and_description_verbatim() {
        let raw = br#"{"ok":false,"error_code":403,
            "description":"Forbidden: bot was blocked by the user"}"#;
        let err = decode_response::<Message>("sendMessage", raw).unwrap_err();
        match err {
            BotError::Api {
                method,
                error_code,
                description,
                parameters,
            } => {
                assert_eq!(method, "sendMessage");
                assert_eq!(error_code, 403);
                assert_eq!(description, "Forbidden: bot was blocked by the user");
                assert!(parameters.is_none());
            }
            other => panic!("wrong error kind: {other:?}"),
        }
    }

    #[test]
    fn flood_control_hint_is_exposed() {
        let raw = br#"{"ok":false,"error_code":429,"description":"Too Many Requests",
            "parameters":{"retry_after":17}}"#;
        let err = decode_response::<bool>("sendMessage", raw).unwrap_err();
        assert_eq!(err.retry_after(), Some(17));
    }

    #[test]
    fn garbage_body_is_a_malformed_response_with_raw_bytes() {
        let raw = b"<html>502 Bad Gateway</html>";
        let err = decode_response::<bool>("getMe", raw).unwrap_err();
        assert!(matches!(err, BotError::MalformedResponse { .. }));
        assert_eq!(err.raw_response(), Some(raw.as_slice()));
    }

    #[test]
    fn ok_without_result_violates_the_envelope_invariant() {
        let err = decode_response::<bool>("getMe", br#"{"ok":true}"#).unwrap_err();
        assert!(matches!(err, BotError::Schema { .. }));
    }

    #[test]
    fn mismatched_result_shape_is_a_schema_error_keeping_raw() {
        let raw = br#"{"ok":true,"result":{"unexpected":1}}"#;
        let err = decode_response::<Message>("sendMessage", raw).unwrap_err();
        match &err {
            BotError::Schema { method, .. } => assert_eq!(method, "sendMessage"),
            other => panic!("wrong error kind: {other:?}"),
        }
        assert_eq!(err.raw_response(), Some(raw.as_slice()));
    }
}
