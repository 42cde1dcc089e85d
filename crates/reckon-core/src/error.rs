//! Error types for the reckon calculator.
//!
//! [`CommandError`] is what a single command invocation can fail with; the
//! REPL catches it at the dispatch boundary and keeps running.
//! [`RegistryError`] is the only fatal error: it aborts startup before the
//! loop begins.

use thiserror::Error;

/// Failure of a single command invocation.
///
/// Both variants display as the bare message; the REPL adds the
/// `Error:` / `Unexpected error:` prefix depending on the variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommandError {
    // ── Recoverable, user-caused ─────────────────────────────────────

    /// Malformed invocation: wrong argument count, non-numeric operand,
    /// or a domain violation such as division by zero.
    #[error("{0}")]
    Usage(String),

    // ── Internal ─────────────────────────────────────────────────────

    /// A fault inside the command itself, not caused by the user's input.
    #[error("{0}")]
    Internal(String),
}

impl CommandError {
    /// Build a [`CommandError::Usage`] from any message.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Build a [`CommandError::Internal`] from any message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error was caused by the user's input.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Fatal error raised while assembling the command registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    /// Two command implementations report the same (lowercased) name.
    #[error("duplicate command name: {name}")]
    Duplicate {
        /// The colliding name.
        name: String,
    },

    /// A command implementation reports an empty name.
    #[error("command registered with an empty name")]
    EmptyName,
}
