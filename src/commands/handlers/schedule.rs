//! Class schedule command handlers
//!
//! Handles: addclass, viewclasses, nextclass, deleteclass, setreminder, todayschedule
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Normalize day and time on addclass; honour NextClassPolicy
//! - 1.0.0: Initial class schedule commands

use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::commands::context::{CommandContext, Invocation};
use crate::commands::handler::TextCommandHandler;
use crate::core::{titled_list, PlannerError, PlannerResult};
use crate::features::schedule::{
    format_offset, next_class, parse_time, parse_weekday, todays_classes, weekday_name,
};
use crate::store::{ClassEntry, ReminderEntry};

/// Longest reminder lead accepted, in minutes (one week)
const MAX_REMINDER_MINUTES: i64 = 7 * 24 * 60;

/// Handler for class schedule commands
pub struct ScheduleHandler;

#[async_trait]
impl TextCommandHandler for ScheduleHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &[
            "addclass",
            "viewclasses",
            "nextclass",
            "deleteclass",
            "setreminder",
            "todayschedule",
        ]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        match invocation.verb.as_str() {
            "addclass" => self.handle_add_class(&ctx, invocation).await,
            "viewclasses" => self.handle_view_classes(&ctx, invocation).await,
            "nextclass" => self.handle_next_class(&ctx, invocation).await,
            "deleteclass" => self.handle_delete_class(&ctx, invocation).await,
            "setreminder" => self.handle_set_reminder(&ctx, invocation).await,
            "todayschedule" => self.handle_today_schedule(&ctx, invocation).await,
            _ => Ok(String::new()),
        }
    }
}

impl ScheduleHandler {
    /// Handle !addclass name day time
    async fn handle_add_class(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        let usage = ctx.usage("addclass");
        let args = invocation.args(&usage);
        args.expect(3)?;

        let name = args.string(0)?;
        let day = weekday_name(parse_weekday(args.string(1)?)?);
        let time = parse_time(args.string(2)?)?.format("%H:%M").to_string();

        let entry = ClassEntry::new(name, day, time.clone());
        ctx.store
            .modify(&invocation.user_key(), move |record| record.classes.push(entry))
            .await?;

        info!(
            "[{}] Added class '{name}' ({day} {time}) for user {}",
            invocation.request_id, invocation.user_id
        );
        Ok(format!("Class '{name}' added on {day} at {time}."))
    }

    /// Handle !viewclasses
    async fn handle_view_classes(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        let record = ctx.store.get_or_create(&invocation.user_key()).await?;
        if record.classes.is_empty() {
            return Ok("No classes scheduled.".to_string());
        }

        Ok(titled_list(
            "Your Classes",
            record
                .classes
                .iter()
                .map(|c| format!("{} on {} at {}", c.name, c.day, c.time)),
        ))
    }

    /// Handle !nextclass
    async fn handle_next_class(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        let record = ctx.store.get_or_create(&invocation.user_key()).await?;

        match next_class(&record.classes, invocation.now, ctx.next_class_policy) {
            Some(next) => {
                debug!(
                    "[{}] Next class '{}' at {} (policy {})",
                    invocation.request_id, next.entry.name, next.starts_at, ctx.next_class_policy
                );
                Ok(format!(
                    "Next class: {} in {}.",
                    next.entry.name,
                    format_offset(next.starts_in)
                ))
            }
            None => Ok("No upcoming classes found.".to_string()),
        }
    }

    /// Handle !deleteclass name
    async fn handle_delete_class(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        let usage = ctx.usage("deleteclass");
        let args = invocation.args(&usage);
        args.expect(1)?;
        let name = args.string(0)?;

        let removed = ctx
            .store
            .modify(&invocation.user_key(), |record| record.remove_classes(name))
            .await?;

        if removed == 0 {
            return Err(PlannerError::NotFound {
                kind: "class",
                name: name.to_string(),
            });
        }

        info!(
            "[{}] Deleted {removed} class entries named '{name}' for user {}",
            invocation.request_id, invocation.user_id
        );
        Ok(format!("Class '{name}' deleted."))
    }

    /// Handle !setreminder name minutes_before
    async fn handle_set_reminder(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        let usage = ctx.usage("setreminder");
        let args = invocation.args(&usage);
        args.expect(2)?;
        let name = args.string(0)?;
        let minutes_before = args.integer_in(1, 0, MAX_REMINDER_MINUTES)?;

        let entry = ReminderEntry {
            name: name.to_string(),
            minutes_before,
        };
        ctx.store
            .modify(&invocation.user_key(), move |record| record.reminders.push(entry))
            .await?;

        info!(
            "[{}] Reminder for '{name}' ({minutes_before}m) set by user {}",
            invocation.request_id, invocation.user_id
        );
        Ok(format!("Reminder set for '{name}' {minutes_before} minutes before class."))
    }

    /// Handle !todayschedule
    async fn handle_today_schedule(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        let record = ctx.store.get_or_create(&invocation.user_key()).await?;
        let todays = todays_classes(&record.classes, invocation.now);
        if todays.is_empty() {
            return Ok("No classes today.".to_string());
        }

        Ok(titled_list(
            "Today's Classes",
            todays.iter().map(|c| format!("{} at {}", c.name, c.time)),
        ))
    }
}
