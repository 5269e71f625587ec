//! Text command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use async_trait::async_trait;
use std::sync::Arc;

use super::context::{CommandContext, Invocation};
use crate::core::PlannerResult;

/// Trait for text command handlers
///
/// Each handler processes one or more verbs and returns the reply text.
/// Handlers are registered with a CommandRegistry and dispatched by verb.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl TextCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: Arc<CommandContext>,
///         invocation: &Invocation,
///     ) -> PlannerResult<String> {
///         Ok("Pong!".to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait TextCommandHandler: Send + Sync {
    /// Verb(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    /// Handle one invocation and produce the reply
    ///
    /// Errors are turned into user-facing replies by the router.
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &Invocation,
    ) -> PlannerResult<String>;
}
