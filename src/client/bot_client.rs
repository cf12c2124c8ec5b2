//! HTTP transport for the Bot API.
//!
//! One POST per invocation, JSON body, response body decoded through
//! [`decode_response`] regardless of HTTP status. The Bot API mirrors its
//! error state inside the envelope, so non-2xx responses are decoded the
//! same way as successful ones.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::api::Method;
use crate::error::BotError;
use crate::response::decode_response;
use crate::types::BotToken;

const DEFAULT_API_URL: &str = "https://api.telegram.org";
const DEFAULT_FILE_URL: &str = "https://api.telegram.org/file";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Bot API client.
///
/// Reusable HTTP client bound to one bot token. Built with reqwest for
/// async requests; cheap to clone, safe to share across tasks.
#[derive(Clone)]
pub struct BotClient {
    http: Client,
    token: BotToken,
    api_url: String,
    file_url: String,
}

impl BotClient {
    /// Create a new client builder.
    pub fn builder() -> BotClientBuilder {
        BotClientBuilder::default()
    }

    /// Create a client with default settings from a token.
    pub fn new(token: impl Into<String>) -> Result<Self, BotError> {
        Self::builder().token(token).build()
    }

    /// Base URL for API calls.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Invoke a catalogued method.
    pub async fn invoke<M: Method>(&self, request: &M) -> Result<M::Response, BotError> {
        self.call(M::NAME, request).await
    }

    /// Invoke a method by name with an arbitrary JSON-serializable body.
    ///
    /// Escape hatch for methods not in the catalogue; [`invoke`](Self::invoke)
    /// is the typed entry point.
    pub async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, BotError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let raw = self.invoke_raw(method, body).await?;
        decode_response(method, &raw)
    }

    /// POST the serialized body and return the raw response bytes, before
    /// any envelope handling.
    ///
    /// This is the seam feeding [`decode_response`]; use it when the typed
    /// model does not cover a response and the raw envelope is needed on
    /// the success path too.
    pub async fn invoke_raw<B>(&self, method: &str, body: &B) -> Result<Vec<u8>, BotError>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(|source| BotError::Encode {
            method: method.to_string(),
            source,
        })?;

        let url = format!("{}/bot{}/{}", self.api_url, self.token.as_str(), method);
        log::debug!("invoking {method} ({} request bytes)", payload.len());

        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json; charset=UTF-8")
            .body(payload)
            .send()
            .await
            .map_err(|source| BotError::Network {
                method: method.to_string(),
                source,
            })?;

        let status = response.status();
        let raw = response
            .bytes()
            .await
            .map_err(|source| BotError::Network {
                method: method.to_string(),
                source,
            })?;
        log::debug!("{method} returned HTTP {status} ({} response bytes)", raw.len());

        Ok(raw.to_vec())
    }

    /// Build the download URL for a `file_path` returned by `getFile`.
    ///
    /// Pure string formatting; no request is made and the path is not
    /// validated.
    pub fn file_url(&self, file_path: &str) -> String {
        format!("{}/bot{}/{}", self.file_url, self.token.as_str(), file_path)
    }
}

// The token must never leak through logs.
impl std::fmt::Debug for BotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotClient")
            .field("token", &self.token)
            .field("api_url", &self.api_url)
            .field("file_url", &self.file_url)
            .finish()
    }
}

/// Builder for [`BotClient`].
///
/// # Example
///
/// ```no_run
/// use telegram_bot_sdk::BotClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BotClient::builder()
///     .token("123456:ABC-DEF")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct BotClientBuilder {
    token: Option<String>,
    api_url: Option<String>,
    file_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl BotClientBuilder {
    /// Set the bot token issued by BotFather.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the base URL for API calls.
    ///
    /// Default: "https://api.telegram.org"
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the base URL for file downloads.
    ///
    /// Default: "https://api.telegram.org/file"
    pub fn file_url(mut self, url: impl Into<String>) -> Self {
        self.file_url = Some(url.into());
        self
    }

    /// Set the total timeout for requests.
    ///
    /// Default: 30 seconds. Long-polling `getUpdates` calls must fit inside
    /// this timeout, so raise it above the poll `timeout` parameter.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    ///
    /// Default: 10 seconds
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns an error if the token is missing or empty, or if the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<BotClient, BotError> {
        let token = self
            .token
            .ok_or_else(|| BotError::Config("token is required".to_string()))?;
        let token = BotToken::new(token).map_err(BotError::Config)?;

        let api_url = self
            .api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let file_url = self
            .file_url
            .unwrap_or_else(|| DEFAULT_FILE_URL.to_string());

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let connect_timeout = self
            .connect_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| BotError::Config(format!("failed to build http client: {e}")))?;

        Ok(BotClient {
            http,
            token,
            api_url,
            file_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_default_values() {
        let client = BotClient::builder().token("123456:ABC").build().unwrap();
        assert_eq!(client.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn builder_requires_token() {
        let err = BotClient::builder().build().unwrap_err();
        assert!(matches!(err, BotError::Config(_)));
    }

    #[test]
    fn builder_rejects_empty_token() {
        let err = BotClient::builder().token("").build().unwrap_err();
        assert!(matches!(err, BotError::Config(_)));
    }

    #[test]
    fn file_url_joins_base_token_and_path() {
        let client = BotClient::builder().token("T").build().unwrap();
        assert_eq!(
            client.file_url("documents/file_1.pdf"),
            "https://api.telegram.org/file/botT/documents/file_1.pdf"
        );
    }

    #[test]
    fn debug_redacts_the_token() {
        let client = BotClient::builder().token("secret-token").build().unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("BotToken(..)"));
    }
}
