//! `menu`: list every loaded command.

use crate::command::Command;
use crate::error::CommandError;
use crate::registry::CommandRegistry;

/// `menu` -- list the names of all registered commands.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuCommand;

impl Command for MenuCommand {
    fn name(&self) -> &str {
        "menu"
    }

    fn execute(
        &self,
        args: &[&str],
        registry: Option<&CommandRegistry>,
    ) -> Result<Option<String>, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::usage("Usage: menu"));
        }

        let Some(registry) = registry.filter(|r| !r.is_empty()) else {
            return Ok(Some("No commands loaded.".into()));
        };

        Ok(Some(format!(
            "Available commands: {}",
            registry.names().join(", ")
        )))
    }
}
