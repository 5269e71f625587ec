// Core layer - config, errors and reply formatting
pub mod core;

// Storage layer - per-user JSON records
pub mod store;

// Features layer - schedule logic, timers and reminders
pub mod features;

// Delivery of messages that are not direct command replies
pub mod outbound;

// Application layer
pub mod commands;

pub use self::core::{Config, PlannerError, PlannerResult};

pub use commands::{CommandContext, CommandRouter, InboundMessage};
pub use features::{FocusTimers, NextClassPolicy, RateLimiter, ReminderScheduler};
pub use outbound::{DiscordOutbound, Outbound};
pub use store::{StorageBackend, UserStore};
