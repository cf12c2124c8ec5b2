//! The operation catalogue: one request struct per Bot API method.
//!
//! Each request implements [`Method`], pairing the remote method name with
//! its response type; the generic invocation pipeline in
//! [`BotClient`](crate::BotClient) consumes catalogue entries as pure
//! data. Per-operation validation (string length limits, mutually
//! exclusive parameters) is the server's responsibility, not the SDK's.
//!
//! Catalogue modules:
//!
//! - [`updates`] - long polling and webhook management
//! - [`messages`] - sending, editing, forwarding, reactions, polls
//! - [`chats`] - chat information, membership and administration
//! - [`bot_profile`] - identity, commands, descriptions, menu button
//! - [`files`] - file metadata and profile photos
//! - [`inline`] - inline mode and callback query answers
//! - [`forum`] - forum topic management

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod bot_profile;
pub mod chats;
pub mod files;
pub mod forum;
pub mod inline;
pub mod messages;
pub mod updates;

/// A Bot API method descriptor: the remote method name plus the request
/// (the implementing type) and response shapes.
///
/// ```
/// use serde::Serialize;
/// use telegram_bot_sdk::api::Method;
///
/// #[derive(Serialize)]
/// struct Ping {}
///
/// impl Method for Ping {
///     const NAME: &'static str = "ping";
///     type Response = bool;
/// }
/// ```
pub trait Method: Serialize {
    /// Remote method name, e.g. `"sendMessage"`.
    const NAME: &'static str;
    /// Shape of the envelope's `result` field on success.
    type Response: DeserializeOwned;
}
