//! Command router: prefix parsing, rate limiting and dispatch
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Per-user rate limiting before dispatch
//! - 1.0.0: Initial text command dispatch

use chrono::{Local, NaiveDateTime};
use log::{debug, error, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::args::parse_command;
use super::context::{CommandContext, Invocation};
use super::registry::CommandRegistry;
use crate::features::rate_limiting::RateLimiter;

/// A chat message as seen by the router
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub user_id: u64,
    pub channel_id: u64,
    pub content: String,
}

pub struct CommandRouter {
    registry: CommandRegistry,
    ctx: Arc<CommandContext>,
    rate_limiter: RateLimiter,
}

impl CommandRouter {
    pub fn new(ctx: CommandContext, rate_limiter: RateLimiter) -> Self {
        Self {
            registry: CommandRegistry::with_all_handlers(),
            ctx: Arc::new(ctx),
            rate_limiter,
        }
    }

    pub fn context(&self) -> Arc<CommandContext> {
        Arc::clone(&self.ctx)
    }

    /// Handle a message received now; `None` when it is not a command
    pub async fn dispatch(&self, msg: &InboundMessage) -> Option<String> {
        self.dispatch_at(msg, Local::now().naive_local()).await
    }

    /// Handle a message as if received at `now`
    pub async fn dispatch_at(&self, msg: &InboundMessage, now: NaiveDateTime) -> Option<String> {
        let (verb, args) = parse_command(&msg.content, &self.ctx.prefix)?;
        let request_id = Uuid::new_v4();
        let user_key = msg.user_id.to_string();

        info!(
            "[{request_id}] 🎯 Command '{verb}' | Args: {} | User: {} | Channel: {}",
            args.len(),
            msg.user_id,
            msg.channel_id
        );

        if !self.rate_limiter.check_rate_limit(&user_key) {
            warn!("[{request_id}] 🚫 Rate limit exceeded for user: {user_key}");
            let wait = self
                .rate_limiter
                .retry_after(&user_key)
                .map(|d| d.as_secs().max(1))
                .unwrap_or(1);
            return Some(format!(
                "You're sending commands too quickly! Try again in {wait}s."
            ));
        }

        let Some(handler) = self.registry.get(&verb) else {
            debug!("[{request_id}] ❓ Unknown command: {verb}");
            return Some(format!(
                "Unknown command. Use `{}help` to see available commands.",
                self.ctx.prefix
            ));
        };

        let invocation = Invocation {
            request_id,
            user_id: msg.user_id,
            channel_id: msg.channel_id,
            verb,
            args,
            now,
        };

        match handler.handle(Arc::clone(&self.ctx), &invocation).await {
            Ok(reply) => {
                info!("[{request_id}] ✅ Command '{}' completed", invocation.verb);
                Some(reply)
            }
            Err(e) if e.is_store_failure() => {
                error!(
                    "[{request_id}] ❌ Store failure in '{}' ({}): {e}",
                    invocation.verb,
                    self.ctx.store.describe()
                );
                Some(e.user_message())
            }
            Err(e) => {
                debug!("[{request_id}] Command '{}' rejected: {e}", invocation.verb);
                Some(e.user_message())
            }
        }
    }
}
