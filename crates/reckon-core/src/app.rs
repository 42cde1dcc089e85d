//! Application bootstrap.
//!
//! [`App`] assembles everything a calculator session needs: it resolves the
//! deployment environment name, loads the command registry (the only step
//! that can fail fatally), and prints the welcome banner before handing the
//! terminal to a [`Session`].

use std::io::{self, BufRead, Write};

use reckon_platform::env::{Environment, deployment_environment};
use tracing::info;

use crate::command::CommandFactory;
use crate::commands::BUILTIN_COMMANDS;
use crate::error::RegistryError;
use crate::registry::CommandRegistry;
use crate::repl::Session;

/// Banner lines printed once before the first prompt.
pub const BANNER: [&str; 2] = [
    "Welcome to the Interactive Calculator!",
    "Type 'menu' to see available commands or 'exit' to quit.",
];

/// The interactive calculator.
#[derive(Debug)]
pub struct App {
    registry: CommandRegistry,
    environment: String,
}

impl App {
    /// Build an app with the built-in commands, reading the deployment
    /// environment name from `env`.
    pub fn new(env: &dyn Environment) -> Result<Self, RegistryError> {
        Self::with_commands(deployment_environment(env), BUILTIN_COMMANDS)
    }

    /// Build an app from an explicit environment name and factory table.
    pub fn with_commands(
        environment: impl Into<String>,
        factories: &[CommandFactory],
    ) -> Result<Self, RegistryError> {
        let environment = environment.into();
        info!(environment = %environment, "environment detected");
        let registry = CommandRegistry::load(factories)?;
        Ok(Self {
            registry,
            environment,
        })
    }

    /// The loaded command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The deployment environment name (informational only).
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Open a new session over this app's registry.
    pub fn session(&self) -> Session<'_> {
        Session::new(&self.registry)
    }

    /// Print the banner and run one interactive session to completion.
    pub fn start<R, W>(&self, input: R, output: &mut W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        for line in BANNER {
            writeln!(output, "{line}")?;
        }
        writeln!(output)?;
        self.session().run(input, output)
    }
}
