//! Utility command handlers
//!
//! Handles: help, clearall
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::catalog::help_text;
use crate::commands::context::{CommandContext, Invocation};
use crate::commands::handler::TextCommandHandler;
use crate::core::PlannerResult;

/// Handler for utility commands: help, clearall
pub struct UtilityHandler;

#[async_trait]
impl TextCommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["help", "clearall"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        match invocation.verb.as_str() {
            "help" => Ok(help_text(&ctx.prefix)),
            "clearall" => self.handle_clear_all(&ctx, invocation).await,
            _ => Ok(String::new()),
        }
    }
}

impl UtilityHandler {
    /// Handle !clearall
    async fn handle_clear_all(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        ctx.store.reset(&invocation.user_key()).await?;
        info!(
            "[{}] Cleared all data for user {}",
            invocation.request_id, invocation.user_id
        );
        Ok("All your data has been reset.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handlers::test_support::{at, context, invocation, USER};
    use crate::store::{ClassEntry, ExamEntry, HomeworkEntry, ReminderEntry};

    #[test]
    fn test_utility_handler_commands() {
        let names = UtilityHandler.command_names();
        assert!(names.contains(&"help"));
        assert!(names.contains(&"clearall"));
        assert_eq!(names.len(), 2);
    }

    #[tokio::test]
    async fn test_help_uses_prefix() {
        let (ctx, _) = context();
        let reply = UtilityHandler
            .handle(ctx, &invocation("help", &[], at("2025-01-01", "00:00")))
            .await
            .unwrap();
        assert!(reply.contains("!addclass name day time"));
        assert!(reply.contains("!clearall"));
    }

    #[tokio::test]
    async fn test_clear_all_keeps_user_key() {
        let (ctx, _) = context();
        let key = USER.to_string();
        ctx.store
            .modify(&key, |r| {
                r.classes.push(ClassEntry::new("Math", "Monday", "09:00"));
                r.homework.push(HomeworkEntry::new("Essay", "2025-01-02"));
                r.reminders.push(ReminderEntry {
                    name: "Math".to_string(),
                    minutes_before: 15,
                });
                r.exams.push(ExamEntry {
                    name: "Finals".to_string(),
                    date: "2025-06-01".to_string(),
                });
            })
            .await
            .unwrap();

        let reply = UtilityHandler
            .handle(
                Arc::clone(&ctx),
                &invocation("clearall", &[], at("2025-01-01", "00:00")),
            )
            .await
            .unwrap();
        assert_eq!(reply, "All your data has been reset.");

        let data = ctx.store.load().await.unwrap();
        assert!(data.contains_key(&key));
        let record = &data[&key];
        assert!(record.classes.is_empty());
        assert!(record.homework.is_empty());
        assert!(record.reminders.is_empty());
        assert!(record.exams.is_empty());
    }
}
