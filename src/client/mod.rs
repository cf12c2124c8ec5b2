//! Client layer: HTTP transport plus the high-level [`Bot`] facade.

mod bot;
mod bot_client;

pub use bot::Bot;
pub use bot_client::{BotClient, BotClientBuilder};
