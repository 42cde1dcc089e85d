//! The contract every calculator operation implements.

use crate::error::CommandError;
use crate::registry::CommandRegistry;

/// A single executable command.
///
/// Implementors are stateless: the registry builds a fresh instance for each
/// invocation and drops it afterwards, so construction must be cheap and
/// free of side effects.
pub trait Command: Send + Sync {
    /// The command name (what the user types). Lowercase and stable; it is
    /// used as the registry key.
    fn name(&self) -> &str;

    /// Execute the command.
    ///
    /// `args` are the tokens that followed the command name, exactly as
    /// typed. `registry` is the full set of loaded commands, or `None` when
    /// the command runs outside of any registry.
    ///
    /// Returns the text to print, `None` when there is nothing to print, or
    /// a [`CommandError`].
    fn execute(
        &self,
        args: &[&str],
        registry: Option<&CommandRegistry>,
    ) -> Result<Option<String>, CommandError>;
}

/// Zero-argument constructor producing a fresh command instance.
pub type CommandFactory = fn() -> Box<dyn Command>;
