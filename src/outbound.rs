//! Outbound message delivery
//!
//! Background work (focus timers, reminders) sends text through this trait so
//! it never depends on the gateway directly.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use serenity::http::Http;
use serenity::model::id::{ChannelId, UserId};
use std::sync::Arc;

use crate::core::chunk_for_message;

#[async_trait]
pub trait Outbound: Send + Sync {
    /// Post `text` in a channel
    async fn send_to_channel(&self, channel_id: u64, text: &str) -> Result<()>;

    /// Send `text` to a user by direct message
    async fn send_direct(&self, user_id: u64, text: &str) -> Result<()>;
}

/// Delivers through the Discord REST API
pub struct DiscordOutbound {
    http: Arc<Http>,
}

impl DiscordOutbound {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Outbound for DiscordOutbound {
    async fn send_to_channel(&self, channel_id: u64, text: &str) -> Result<()> {
        for chunk in chunk_for_message(text) {
            ChannelId(channel_id).say(&self.http, chunk).await?;
        }
        debug!("Sent {} bytes to channel {channel_id}", text.len());
        Ok(())
    }

    async fn send_direct(&self, user_id: u64, text: &str) -> Result<()> {
        let dm = UserId(user_id).create_dm_channel(&*self.http).await?;
        for chunk in chunk_for_message(text) {
            dm.say(&self.http, chunk).await?;
        }
        debug!("Sent direct message to user {user_id}");
        Ok(())
    }
}
