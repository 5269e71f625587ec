//! Homework command handlers
//!
//! Handles: addhw, viewhw, deletehw, due
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Validate due dates on addhw
//! - 1.0.0: Initial homework commands

use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::{CommandContext, Invocation};
use crate::commands::handler::TextCommandHandler;
use crate::core::{titled_list, PlannerError, PlannerResult};
use crate::features::schedule::{homework_due_within, parse_date};
use crate::store::HomeworkEntry;

/// Largest `!due` window accepted, in days
const MAX_DUE_WINDOW_DAYS: i64 = 3650;

/// Handler for homework commands
pub struct HomeworkHandler;

#[async_trait]
impl TextCommandHandler for HomeworkHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["addhw", "viewhw", "deletehw", "due"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        match invocation.verb.as_str() {
            "addhw" => self.handle_add(&ctx, invocation).await,
            "viewhw" => self.handle_view(&ctx, invocation).await,
            "deletehw" => self.handle_delete(&ctx, invocation).await,
            "due" => self.handle_due(&ctx, invocation).await,
            _ => Ok(String::new()),
        }
    }
}

impl HomeworkHandler {
    async fn handle_add(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        let usage = ctx.usage("addhw");
        let args = invocation.args(&usage);
        args.expect(2)?;
        let name = args.string(0)?;
        let due = parse_date(args.string(1)?)?.format("%Y-%m-%d").to_string();

        let entry = HomeworkEntry::new(name, due.clone());
        ctx.store
            .modify(&invocation.user_key(), move |record| record.homework.push(entry))
            .await?;

        info!(
            "[{}] Added homework '{name}' due {due} for user {}",
            invocation.request_id, invocation.user_id
        );
        Ok(format!("Homework '{name}' added, due {due}."))
    }

    async fn handle_view(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        let record = ctx.store.get_or_create(&invocation.user_key()).await?;
        if record.homework.is_empty() {
            return Ok("No homework assigned".to_string());
        }

        Ok(titled_list(
            "Upcoming Homework",
            record
                .homework
                .iter()
                .map(|hw| format!("{} due {}", hw.name, hw.due)),
        ))
    }

    async fn handle_delete(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        let usage = ctx.usage("deletehw");
        let args = invocation.args(&usage);
        args.expect(1)?;
        let name = args.string(0)?;

        let removed = ctx
            .store
            .modify(&invocation.user_key(), |record| record.remove_homework(name))
            .await?;

        if removed == 0 {
            return Err(PlannerError::NotFound {
                kind: "homework",
                name: name.to_string(),
            });
        }

        info!(
            "[{}] Deleted {removed} homework entries named '{name}' for user {}",
            invocation.request_id, invocation.user_id
        );
        Ok(format!("Homework '{name}' deleted."))
    }

    /// Handle !due days
    async fn handle_due(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        let usage = ctx.usage("due");
        let args = invocation.args(&usage);
        args.expect(1)?;
        let days = args.integer_in(0, 0, MAX_DUE_WINDOW_DAYS)?;

        let record = ctx.store.get_or_create(&invocation.user_key()).await?;
        let due = homework_due_within(&record.homework, invocation.now, days);
        if due.is_empty() {
            return Ok(format!("No homework due in the next {days} days."));
        }

        Ok(titled_list(
            "Homework due soon",
            due.iter().map(|hw| format!("{} due {}", hw.name, hw.due)),
        ))
    }
}
