//! Update retrieval (long polling) and webhook management.

use serde::Serialize;

use super::Method;
use crate::types::{Update, WebhookInfo};

/// `getUpdates`: receive incoming updates using long polling.
///
/// With a non-zero `timeout` the server holds the request open until an
/// update arrives or the timeout expires; make sure the client's HTTP
/// timeout exceeds it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUpdatesRequest {
    /// Identifier of the first update to return; pass the highest received
    /// `update_id` + 1 to confirm earlier updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// 1-100, defaults to 100 on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Long-poll timeout in seconds; 0 means short polling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

impl Method for GetUpdatesRequest {
    const NAME: &'static str = "getUpdates";
    type Response = Vec<Update>;
}

/// `setWebhook`: specify an HTTPS URL to receive incoming updates.
///
/// Running the webhook server itself is outside this SDK's scope; this
/// call only registers the URL with Telegram.
#[derive(Debug, Clone, Serialize)]
pub struct SetWebhookRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<String>,
}

impl SetWebhookRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ip_address: None,
            max_connections: None,
            allowed_updates: None,
            drop_pending_updates: None,
            secret_token: None,
        }
    }
}

impl Method for SetWebhookRequest {
    const NAME: &'static str = "setWebhook";
    type Response = bool;
}

/// `deleteWebhook`: switch back to long polling.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteWebhookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
}

impl Method for DeleteWebhookRequest {
    const NAME: &'static str = "deleteWebhook";
    type Response = bool;
}

/// `getWebhookInfo`: current webhook status.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetWebhookInfoRequest {}

impl Method for GetWebhookInfoRequest {
    const NAME: &'static str = "getWebhookInfo";
    type Response = WebhookInfo;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_updates_omits_unset_parameters() {
        let value = serde_json::to_value(GetUpdatesRequest::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));

        let request = GetUpdatesRequest {
            offset: Some(42),
            timeout: Some(30),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"offset": 42, "timeout": 30}));
    }
}
