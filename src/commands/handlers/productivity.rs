//! Productivity command handlers
//!
//! Handles: tip, focusmode, focusstop
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: focusmode no longer blocks the handler; add focusstop
//! - 1.0.0: Initial tip and focusmode commands

use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::{CommandContext, Invocation};
use crate::commands::handler::TextCommandHandler;
use crate::core::PlannerResult;
use crate::features::focus::{FocusStart, MAX_FOCUS_MINUTES};
use crate::features::schedule::format_offset;
use crate::features::tips::random_tip;

/// Handler for tips and focus timers
pub struct ProductivityHandler;

#[async_trait]
impl TextCommandHandler for ProductivityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["tip", "focusmode", "focusstop"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        match invocation.verb.as_str() {
            "tip" => Ok(random_tip().to_string()),
            "focusmode" => self.handle_focus_mode(&ctx, invocation),
            "focusstop" => self.handle_focus_stop(&ctx, invocation),
            _ => Ok(String::new()),
        }
    }
}

impl ProductivityHandler {
    /// Handle !focusmode minutes
    fn handle_focus_mode(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        let usage = ctx.usage("focusmode");
        let args = invocation.args(&usage);
        args.expect(1)?;
        let minutes = args.integer_in(0, 1, MAX_FOCUS_MINUTES)?;

        let started = ctx
            .focus_timers
            .start(invocation.user_id, invocation.channel_id, minutes as u64);

        info!(
            "[{}] Focus mode ({minutes}m) for user {}: {started:?}",
            invocation.request_id, invocation.user_id
        );

        let mut reply = format!(
            "Focus mode started for {minutes} minutes. I'll notify you when time's up!"
        );
        if started == FocusStart::Replaced {
            reply.push_str(" (Your previous session was cancelled.)");
        }
        Ok(reply)
    }

    /// Handle !focusstop
    fn handle_focus_stop(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        let remaining = ctx.focus_timers.remaining(invocation.user_id);
        if !ctx.focus_timers.cancel(invocation.user_id) {
            return Ok("You don't have a focus session running.".to_string());
        }

        Ok(match remaining {
            Some(left) => format!(
                "Focus session cancelled with {} left.",
                format_offset(left)
            ),
            None => "Focus session cancelled.".to_string(),
        })
    }
}
