//! # Command System
//!
//! Prefixed text commands (`!addclass ...`) for the study planner.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add router with rate limiting and quoted arguments
//! - 1.0.0: Handler trait, context, registry and catalogue

pub mod args;
pub mod catalog;
pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod router;

pub use context::{CommandContext, Invocation};
pub use handler::TextCommandHandler;
pub use registry::CommandRegistry;
pub use router::{CommandRouter, InboundMessage};
