//! Telegram Bot API client for Rust
//!
//! An async client SDK for the Telegram Bot API, covering **92 methods**
//! across 7 categories.
//!
//! ## Method Coverage
//!
//! | Category | Methods |
//! |----------|---------|
//! | Updates / Webhooks | 4 |
//! | Messages | 27 |
//! | Chat Administration | 27 |
//! | Forum Topics | 13 |
//! | Bot Profile | 16 |
//! | Files | 2 |
//! | Inline / Callbacks | 3 |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use telegram_bot_sdk::{api::messages::SendMessageRequest, Bot};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bot = Bot::new(std::env::var("BOT_TOKEN")?)?;
//!
//!     let me = bot.get_me().await?;
//!     println!("running as @{}", me.username.as_deref().unwrap_or("?"));
//!
//!     let sent = bot
//!         .send_message(SendMessageRequest::new(42, "hello from Rust"))
//!         .await?;
//!     println!("sent message {}", sent.message_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! Every method is also reachable generically: a request struct implements
//! [`api::Method`], and [`BotClient::invoke`] sends any of them. The [`Bot`]
//! facade is a thin convenience layer on top.
//!
//! ## Modules
//!
//! - [`api`] - the operation catalogue (one request struct per method)
//! - [`client`] - HTTP transport and the [`Bot`] facade
//! - [`error`] - error types
//! - [`response`] - the response envelope and its decoder
//! - [`types`] - Bot API entity types
//!
//! ## Error Handling
//!
//! All operations return [`BotError`], which separates transport failures
//! from protocol failures from API-level rejections:
//!
//! ```rust,ignore
//! use telegram_bot_sdk::BotError;
//!
//! match result {
//!     Ok(message) => { /* handle success */ }
//!     Err(BotError::Api { error_code, description, .. }) => {
//!         eprintln!("rejected: {} - {}", error_code, description);
//!     }
//!     Err(BotError::Network { source, .. }) => {
//!         eprintln!("transport failed: {source}");
//!     }
//!     Err(other) => eprintln!("error: {other}"),
//! }
//! ```
//!
//! The client never retries; rate-limit handling (`retry_after`) is left to
//! the caller.

pub mod api;
pub mod client;
pub mod error;
pub mod response;
pub mod types;

pub use client::{Bot, BotClient, BotClientBuilder};
pub use error::BotError;
pub use response::{decode_response, ApiResponse, ResponseParameters};
