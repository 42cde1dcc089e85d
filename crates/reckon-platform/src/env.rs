//! Environment variable abstraction and native implementation.
//!
//! Provides a platform-agnostic [`Environment`] trait for reading
//! environment-style configuration. The native implementation delegates to
//! [`std::env`]; tests substitute an in-memory map.

/// Variable naming the active deployment environment.
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Value reported when [`ENVIRONMENT_VAR`] is unset or blank.
pub const UNKNOWN_ENVIRONMENT: &str = "unknown";

/// Platform-agnostic, read-only environment variable access.
pub trait Environment: Send + Sync {
    /// Get the value of an environment variable, or `None` if it is not set.
    fn get_var(&self, name: &str) -> Option<String>;
}

/// Native environment implementation using [`std::env`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeEnvironment;

impl Environment for NativeEnvironment {
    fn get_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Resolve the name of the active deployment environment.
///
/// Reads [`ENVIRONMENT_VAR`] and falls back to [`UNKNOWN_ENVIRONMENT`] when
/// the variable is missing or contains only whitespace. The value is purely
/// informational.
pub fn deployment_environment(env: &dyn Environment) -> String {
    match env.get_var(ENVIRONMENT_VAR) {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => {
            tracing::debug!(var = ENVIRONMENT_VAR, "environment variable not set");
            UNKNOWN_ENVIRONMENT.to_string()
        }
    }
}
