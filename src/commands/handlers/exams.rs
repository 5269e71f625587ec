//! Exam countdown command handler
//!
//! Handles: examcountdown
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Reject malformed dates before storing the exam
//! - 1.0.0: Initial examcountdown command

use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::{CommandContext, Invocation};
use crate::commands::handler::TextCommandHandler;
use crate::core::PlannerResult;
use crate::features::schedule::{days_until, parse_date};
use crate::store::ExamEntry;

pub struct ExamHandler;

#[async_trait]
impl TextCommandHandler for ExamHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["examcountdown"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &Invocation,
    ) -> PlannerResult<String> {
        let usage = ctx.usage("examcountdown");
        let args = invocation.args(&usage);
        args.expect(2)?;
        let name = args.string(0)?;
        let date = parse_date(args.string(1)?)?;

        let entry = ExamEntry {
            name: name.to_string(),
            date: date.format("%Y-%m-%d").to_string(),
        };
        ctx.store
            .modify(&invocation.user_key(), move |record| record.exams.push(entry))
            .await?;

        let days_left = days_until(date, invocation.now);
        info!(
            "[{}] Exam '{name}' on {date} stored for user {} ({days_left} days left)",
            invocation.request_id, invocation.user_id
        );
        Ok(format!("{days_left} days left until '{name}'!"))
    }
}
