//! Shared context for command handlers
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add FocusTimers and next class policy
//! - 1.0.0: Initial implementation with the user store

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::commands::args::Args;
use crate::commands::catalog;
use crate::features::focus::FocusTimers;
use crate::features::schedule::NextClassPolicy;
use crate::store::UserStore;

/// Services shared by every command handler
#[derive(Clone)]
pub struct CommandContext {
    pub store: UserStore,
    pub focus_timers: FocusTimers,
    pub next_class_policy: NextClassPolicy,
    pub prefix: String,
}

impl CommandContext {
    pub fn new(
        store: UserStore,
        focus_timers: FocusTimers,
        next_class_policy: NextClassPolicy,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            focus_timers,
            next_class_policy,
            prefix: prefix.into(),
        }
    }

    /// Usage line for a command under the configured prefix
    pub fn usage(&self, name: &str) -> String {
        catalog::usage(&self.prefix, name)
    }
}

/// One parsed command from one user
#[derive(Debug, Clone)]
pub struct Invocation {
    pub request_id: Uuid,
    pub user_id: u64,
    pub channel_id: u64,
    pub verb: String,
    pub args: Vec<String>,
    /// Local wall-clock time the command was received
    pub now: NaiveDateTime,
}

impl Invocation {
    /// Store key for the invoking user
    pub fn user_key(&self) -> String {
        self.user_id.to_string()
    }

    pub fn args<'a>(&'a self, usage: &'a str) -> Args<'a> {
        Args::new(&self.args, usage)
    }
}
