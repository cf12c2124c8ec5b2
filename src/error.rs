use thiserror::Error;

use crate::response::ResponseParameters;

/// Telegram Bot SDK error types.
///
/// Errors fall into three disjoint groups that callers can match on:
///
/// - transport and encoding failures ([`Network`](BotError::Network),
///   [`Encode`](BotError::Encode)): the request never completed;
/// - protocol failures ([`MalformedResponse`](BotError::MalformedResponse),
///   [`Schema`](BotError::Schema)): a response arrived but could not be
///   mapped to the expected types; the raw body is retained for inspection;
/// - application failures ([`Api`](BotError::Api)): the Bot API itself
///   rejected the call with an `ok: false` envelope.
#[derive(Debug, Error)]
pub enum BotError {
    /// The request body could not be serialized to JSON.
    #[error("failed to encode request for \"{method}\": {source}")]
    Encode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP exchange failed: connect, send or body read.
    #[error("request \"{method}\" failed: {source}")]
    Network {
        method: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not a Bot API envelope at all.
    #[error("malformed response for \"{method}\": {source}")]
    MalformedResponse {
        method: String,
        /// Raw response body, kept for diagnostics.
        raw: Vec<u8>,
        #[source]
        source: serde_json::Error,
    },

    /// The envelope was well-formed and `ok: true`, but `result` did not
    /// match the expected shape (for one-of payloads this includes an
    /// unrecognized discriminator tag, named in `message`).
    #[error("result for \"{method}\" did not match the expected schema: {message}")]
    Schema {
        method: String,
        /// Raw response body, kept so callers can inspect shapes the SDK
        /// does not model yet.
        raw: Vec<u8>,
        message: String,
    },

    /// The Bot API returned `ok: false`. This is the normal channel for
    /// business-rule failures (bad chat id, permissions, flood control).
    #[error("request \"{method}\" completed with error {error_code}: {description}")]
    Api {
        method: String,
        error_code: i64,
        description: String,
        /// Optional server hints, e.g. `retry_after` on flood control.
        parameters: Option<ResponseParameters>,
    },

    /// Client construction problem (missing or empty token).
    #[error("configuration error: {0}")]
    Config(String),
}

impl BotError {
    /// Name of the API method this error originated from, when known.
    pub fn method(&self) -> Option<&str> {
        match self {
            BotError::Encode { method, .. }
            | BotError::Network { method, .. }
            | BotError::MalformedResponse { method, .. }
            | BotError::Schema { method, .. }
            | BotError::Api { method, .. } => Some(method),
            BotError::Config(_) => None,
        }
    }

    /// Raw response bytes, for protocol errors.
    pub fn raw_response(&self) -> Option<&[u8]> {
        match self {
            BotError::MalformedResponse { raw, .. } | BotError::Schema { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Flood-control hint: seconds to wait before retrying, when the server
    /// provided one alongside an application error.
    pub fn retry_after(&self) -> Option<i64> {
        match self {
            BotError::Api {
                parameters: Some(p),
                ..
            } => p.retry_after,
            _ => None,
        }
    }
}
