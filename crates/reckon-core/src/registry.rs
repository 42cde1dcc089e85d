//! Command registry and the startup loader that builds it.
//!
//! The [`CommandRegistry`] maps lowercase command names to
//! [`CommandFactory`] constructors. It is assembled once from a static
//! factory table by [`CommandRegistry::load`] and never mutated afterwards,
//! so it can be shared by plain reference with every command invocation.
//!
//! # Example
//!
//! ```rust
//! use reckon_core::CommandRegistry;
//!
//! let registry = CommandRegistry::builtin().unwrap();
//! assert!(registry.contains("add"));
//! let cmd = registry.instantiate("ADD").unwrap();
//! assert_eq!(cmd.name(), "add");
//! ```

use std::collections::HashMap;

use tracing::{debug, info};

use crate::command::{Command, CommandFactory};
use crate::commands::BUILTIN_COMMANDS;
use crate::error::RegistryError;

/// Immutable mapping from command name to command factory.
#[derive(Default)]
pub struct CommandRegistry {
    factories: HashMap<String, CommandFactory>,
}

impl CommandRegistry {
    /// Build a registry from the built-in command table.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::load(BUILTIN_COMMANDS)
    }

    /// Build a registry from an arbitrary factory table.
    ///
    /// Each factory is invoked exactly once to learn its name, which is
    /// lowercased to form the key. Fails on the first empty or colliding
    /// name; a collision is a programming error, never silently overwritten.
    pub fn load(factories: &[CommandFactory]) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for factory in factories {
            registry.register_checked(*factory)?;
        }
        info!(count = registry.len(), "commands loaded");
        Ok(registry)
    }

    /// Register a factory, rejecting empty and duplicate names.
    fn register_checked(&mut self, factory: CommandFactory) -> Result<(), RegistryError> {
        let name = factory().name().to_lowercase();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.factories.contains_key(&name) {
            return Err(RegistryError::Duplicate { name });
        }
        debug!(command = %name, "registered command");
        self.factories.insert(name, factory);
        Ok(())
    }

    /// Look up the factory for `name` (case-insensitive).
    pub fn get(&self, name: &str) -> Option<CommandFactory> {
        self.factories.get(&name.to_lowercase()).copied()
    }

    /// Construct a fresh instance of the command called `name`.
    pub fn instantiate(&self, name: &str) -> Option<Box<dyn Command>> {
        self.get(name).map(|factory| factory())
    }

    /// Check whether a command is registered (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_lowercase())
    }

    /// List all registered command names (sorted).
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}
