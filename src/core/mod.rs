//! # Core Module
//!
//! Configuration, error kinds, and reply formatting shared by every command.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add error module with PlannerError
//! - 1.0.0: Initial creation with config and response modules

pub mod config;
pub mod error;
pub mod response;

pub use config::Config;
pub use error::{PlannerError, PlannerResult};
pub use response::{chunk_for_message, chunk_text, titled_list, MESSAGE_LIMIT};
