//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::TextCommandHandler;

/// Registry mapping verbs to handlers
///
/// Multiple verbs can map to the same handler when they share state or
/// formatting helpers.
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn TextCommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry holding every built-in handler
    pub fn with_all_handlers() -> Self {
        let mut registry = Self::new();
        for handler in super::handlers::create_all_handlers() {
            registry.register(handler);
        }
        registry
    }

    /// Register a handler for all of its declared verbs
    pub fn register(&mut self, handler: Arc<dyn TextCommandHandler>) {
        for &name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn TextCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered verbs (not unique handlers)
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
